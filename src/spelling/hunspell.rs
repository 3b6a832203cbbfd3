//! Primary backend: affix-aware checking with `zspell`.
//!
//! Without the `hunspell` feature the loader reports the capability as
//! unavailable and selection moves on to the plain word list.

use std::path::Path;

use crate::error::Result;
use crate::language::LanguageTag;
use crate::spelling::backend::{BackendKind, BackendLoader, LoadOutcome};

#[cfg(feature = "hunspell")]
pub use enabled::HunspellBackend;

#[cfg(feature = "hunspell")]
mod enabled {
    use std::fmt::{self, Debug};
    use std::fs;
    use std::path::Path;

    use crate::error::{OrthosError, Result};
    use crate::spelling::backend::{BackendKind, SpellBackend};

    pub struct HunspellBackend {
        dictionary: zspell::Dictionary,
    }

    impl HunspellBackend {
        /// Build from `.aff` and `.dic` contents.
        pub fn from_strings(aff: &str, dic: &str) -> Result<Self> {
            let dictionary = zspell::builder()
                .config_str(aff)
                .dict_str(dic)
                .build()
                .map_err(|e| OrthosError::dictionary(format!("Failed to build dictionary: {e}")))?;
            Ok(Self { dictionary })
        }

        pub fn from_files(aff: &Path, dic: &Path) -> Result<Self> {
            let aff_content = fs::read_to_string(aff)?;
            let dic_content = fs::read_to_string(dic)?;
            Self::from_strings(&aff_content, &dic_content)
        }
    }

    impl SpellBackend for HunspellBackend {
        fn check(&self, word: &str) -> bool {
            self.dictionary.check_word(word)
        }

        fn kind(&self) -> BackendKind {
            BackendKind::Primary
        }
    }

    impl Debug for HunspellBackend {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("HunspellBackend").finish_non_exhaustive()
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HunspellLoader;

impl BackendLoader for HunspellLoader {
    fn kind(&self) -> BackendKind {
        BackendKind::Primary
    }

    #[cfg(feature = "hunspell")]
    fn load(&self, language: &LanguageTag, base_path: &Path) -> Result<LoadOutcome> {
        use std::sync::Arc;

        use tracing::{debug, warn};

        use crate::error::OrthosError;
        use crate::spelling::locate::locate;

        // the first directory holding both files wins; none is a config error
        let files = locate(base_path, language, true)?;
        let Some(aff) = files.aff.as_deref() else {
            return Err(OrthosError::DictionaryNotFound {
                language: language.to_string(),
                base_path: base_path.to_path_buf(),
            });
        };

        match HunspellBackend::from_files(aff, &files.dic) {
            Ok(backend) => {
                debug!(language = %language, "affix dictionary loaded");
                Ok(LoadOutcome::Ready(Arc::new(backend)))
            }
            // zspell rejects some affix syntax; the plain reader can still cope
            Err(OrthosError::Dictionary(reason)) => {
                warn!(language = %language, %reason, "affix dictionary unusable");
                Ok(LoadOutcome::unavailable(reason))
            }
            Err(e) => Err(e),
        }
    }

    #[cfg(not(feature = "hunspell"))]
    fn load(&self, _language: &LanguageTag, _base_path: &Path) -> Result<LoadOutcome> {
        Ok(LoadOutcome::unavailable("built without the hunspell feature"))
    }
}
