//! Content-hash keyed, append-only line cache.
//!
//! Each entry is one line `<hex sha256 of key>||<json value>`. Every read
//! parses the whole file, so lookups cost O(file size); callers keep hot
//! entries in memory. When a hash appears more than once the first line
//! holding valid JSON wins. Lines that are not UTF-8, lack the separator or
//! carry unparsable JSON are skipped.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::error::Result;

const SEPARATOR: &str = "||";

/// Lowercase hex SHA-256 of `text`.
pub fn hash_text(text: &str) -> String {
    format!("{:x}", Sha256::digest(text.as_bytes()))
}

#[derive(Debug, Clone)]
pub struct HashLineCache {
    path: PathBuf,
}

impl HashLineCache {
    /// Create an empty cache file, truncating any previous content.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        File::create(&path)?;
        Ok(HashLineCache { path })
    }

    /// Open a cache file, creating it when missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(HashLineCache { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the whole file into a hash to raw JSON map.
    pub fn read_all(&self) -> Result<HashMap<String, String>> {
        let mut entries = HashMap::new();
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(entries),
            Err(e) => return Err(e.into()),
        };

        for (line_no, bytes) in BufReader::new(file).split(b'\n').enumerate() {
            let bytes = bytes?;
            let Ok(line) = std::str::from_utf8(&bytes) else {
                warn!(path = %self.path.display(), line = line_no + 1, "skipping non UTF-8 cache line");
                continue;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some((hash, raw)) = line.split_once(SEPARATOR) else {
                warn!(path = %self.path.display(), line = line_no + 1, "skipping malformed cache line");
                continue;
            };
            if entries.contains_key(hash) {
                continue;
            }
            if serde_json::from_str::<serde_json::Value>(raw).is_err() {
                warn!(path = %self.path.display(), line = line_no + 1, "skipping unparsable cache value");
                continue;
            }
            entries.insert(hash.to_string(), raw.to_string());
        }

        Ok(entries)
    }

    /// The cached value for `key`, or `None` on a miss.
    ///
    /// A stored value that does not deserialize into `T` counts as a miss.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let hash = hash_text(key);
        let Some(raw) = self.read_all()?.remove(&hash) else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(key, "persistent cache hit");
                Ok(Some(value))
            }
            Err(e) => {
                warn!(key, error = %e, "unreadable cache value");
                Ok(None)
            }
        }
    }

    /// Append an entry for `key`. `null` values are not stored.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        if json == "null" {
            return Ok(());
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}{SEPARATOR}{json}", hash_text(key))?;
        Ok(())
    }

    /// Number of distinct hashes stored.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read_all()?.len())
    }
}
