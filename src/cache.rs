//! Verdict and artifact caches.
//!
//! - [`session::VerdictSession`]: in-memory correct/incorrect sets private to
//!   one engine.
//! - [`persistent::HashLineCache`]: an append-only file of
//!   `<sha256>||<json>` lines, one file per purpose.
//! - [`artifact`]: whole-value caches in binary, JSON, CSV or text form.

pub mod artifact;
pub mod persistent;
pub mod session;

pub use artifact::{ArtifactCache, CacheFormat};
pub use persistent::HashLineCache;
pub use session::VerdictSession;
