//! Whole-value artifact caches.
//!
//! A [`CacheFormat`] fixes both the serialization and the file extension:
//!
//! | format | extension | content |
//! |---|---|---|
//! | `Binary` | `bin` | bincode |
//! | `Json` | `json` | JSON |
//! | `Csv` | `csv` | a header row plus one row per object; values load back as strings |
//! | `Text` | `txt` | a single string written verbatim |
//!
//! # Examples
//!
//! ```
//! use orthos::cache::artifact::{ArtifactCache, CacheFormat};
//!
//! let dir = tempfile::TempDir::new().unwrap();
//! let cache = ArtifactCache::new(dir.path());
//! let path = cache.path_for("report", CacheFormat::Json);
//!
//! let first: Vec<u32> = cache.cache_or_compute(&path, CacheFormat::Json, || Ok(vec![1, 2])).unwrap();
//! let second: Vec<u32> = cache.cache_or_compute(&path, CacheFormat::Json, || Ok(vec![9])).unwrap();
//! assert_eq!(first, second);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::cache::persistent::hash_text;
use crate::error::{OrthosError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheFormat {
    Binary,
    Json,
    Csv,
    Text,
}

impl CacheFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            CacheFormat::Binary => "bin",
            CacheFormat::Json => "json",
            CacheFormat::Csv => "csv",
            CacheFormat::Text => "txt",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "bin" => Some(CacheFormat::Binary),
            "json" => Some(CacheFormat::Json),
            "csv" => Some(CacheFormat::Csv),
            "txt" => Some(CacheFormat::Text),
            _ => None,
        }
    }
}

/// SHA-256 of the canonical JSON form of `data` (object keys sorted).
pub fn cache_key<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    let canonical = serde_json::to_string(&serde_json::to_value(data)?)?;
    Ok(hash_text(&canonical))
}

/// `<dir>/<sha256(key)>.<ext>`
pub fn cache_file_name(key: &str, dir: &Path, format: CacheFormat) -> PathBuf {
    dir.join(format!("{}.{}", hash_text(key), format.extension()))
}

/// Artifact cache rooted at one directory.
#[derive(Debug, Clone)]
pub struct ArtifactCache {
    directory: PathBuf,
}

impl ArtifactCache {
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        ArtifactCache {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn path_for(&self, key: &str, format: CacheFormat) -> PathBuf {
        cache_file_name(key, &self.directory, format)
    }

    pub fn save<T: Serialize>(&self, path: &Path, data: &T, format: CacheFormat) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        match format {
            CacheFormat::Binary => fs::write(path, bincode::serialize(data)?)?,
            CacheFormat::Json => fs::write(path, serde_json::to_vec(data)?)?,
            CacheFormat::Csv => write_csv(path, serde_json::to_value(data)?)?,
            CacheFormat::Text => match serde_json::to_value(data)? {
                Value::String(text) => fs::write(path, text)?,
                _ => {
                    return Err(OrthosError::cache("text artifacts must be a single string"));
                }
            },
        }
        debug!(path = %path.display(), ?format, "artifact saved");
        Ok(())
    }

    /// Load an artifact, `None` if the file does not exist.
    pub fn load<T: DeserializeOwned>(&self, path: &Path, format: CacheFormat) -> Result<Option<T>> {
        if !path.is_file() {
            return Ok(None);
        }
        let value = match format {
            CacheFormat::Binary => bincode::deserialize(&fs::read(path)?)?,
            CacheFormat::Json => serde_json::from_slice(&fs::read(path)?)?,
            CacheFormat::Csv => serde_json::from_value(read_csv(path)?)?,
            CacheFormat::Text => serde_json::from_value(Value::String(fs::read_to_string(path)?))?,
        };
        Ok(Some(value))
    }

    /// Return the cached artifact at `path`, or compute, save and return it.
    pub fn cache_or_compute<T, F>(&self, path: &Path, format: CacheFormat, compute: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Result<T>,
    {
        if let Some(cached) = self.load(path, format)? {
            debug!(path = %path.display(), "artifact cache hit");
            return Ok(cached);
        }
        let value = compute()?;
        self.save(path, &value, format)?;
        Ok(value)
    }
}

fn write_csv(path: &Path, value: Value) -> Result<()> {
    let rows: Vec<Map<String, Value>> = match value {
        Value::Array(items) if !items.is_empty() => items
            .into_iter()
            .map(|item| match item {
                Value::Object(map) => Ok(map),
                _ => Err(OrthosError::cache("CSV artifacts must be a list of objects")),
            })
            .collect::<Result<_>>()?,
        _ => return Err(OrthosError::cache("CSV artifacts must be a non-empty list")),
    };

    let headers: Vec<String> = rows[0].keys().cloned().collect();
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&headers)?;
    for row in &rows {
        let record: Vec<String> = headers
            .iter()
            .map(|h| match row.get(h) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
            })
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

fn read_csv(path: &Path) -> Result<Value> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Map<String, Value> = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.to_string(), Value::String(v.to_string())))
            .collect();
        rows.push(Value::Object(row));
    }
    Ok(Value::Array(rows))
}
