//! Process-wide dictionary registry.
//!
//! Handles are created lazily, once per language tag, and kept for the life
//! of the registry. First-time construction for a tag runs under a
//! per-tag lock so concurrent engines never load the same files twice;
//! lookups of an already bound handle only take the read side of the map.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::error::{OrthosError, Result};
use crate::language::LanguageTag;
use crate::spelling::backend::{BackendLoader, LoadOutcome, default_loaders};
use crate::spelling::handle::DictionaryHandle;

#[derive(Debug)]
pub struct DictionaryRegistry {
    base_path: PathBuf,
    loaders: Vec<Arc<dyn BackendLoader>>,
    handles: RwLock<HashMap<String, Arc<DictionaryHandle>>>,
    init_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
    loads: AtomicUsize,
}

impl DictionaryRegistry {
    /// A registry using the built-in loaders.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self::with_loaders(base_path, default_loaders())
    }

    /// A registry trying `loaders` in order.
    pub fn with_loaders<P: AsRef<Path>>(base_path: P, loaders: Vec<Arc<dyn BackendLoader>>) -> Self {
        DictionaryRegistry {
            base_path: base_path.as_ref().to_path_buf(),
            loaders,
            handles: RwLock::new(HashMap::new()),
            init_locks: Mutex::new(HashMap::new()),
            loads: AtomicUsize::new(0),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// The bound handle for `language`, if any.
    pub fn get(&self, language: &LanguageTag) -> Option<Arc<DictionaryHandle>> {
        self.handles.read().get(language.as_str()).cloned()
    }

    /// Bind a handle for `language`, or return the existing one.
    ///
    /// `custom_words` only take effect on first binding.
    pub fn load(
        &self,
        language: &LanguageTag,
        custom_words: &HashSet<String>,
    ) -> Result<Arc<DictionaryHandle>> {
        if let Some(handle) = self.get(language) {
            return Ok(handle);
        }

        let init_lock = Arc::clone(
            self.init_locks
                .lock()
                .entry(language.as_str().to_string())
                .or_default(),
        );
        let _guard = init_lock.lock();

        if let Some(handle) = self.get(language) {
            debug!(language = %language, "dictionary bound concurrently");
            return Ok(handle);
        }

        let handle = Arc::new(self.bind(language, custom_words)?);
        self.handles
            .write()
            .insert(language.as_str().to_string(), Arc::clone(&handle));
        Ok(handle)
    }

    /// Verify `word` with the bound handle for `language`.
    pub fn verify(&self, language: &LanguageTag, word: &str) -> Result<bool> {
        let handle = self.get(language).ok_or_else(|| {
            OrthosError::invalid_operation(format!("No dictionary loaded for {language}"))
        })?;
        Ok(handle.verify(word))
    }

    /// Number of backend constructions performed so far.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn loaded_languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.handles.read().keys().cloned().collect();
        languages.sort();
        languages
    }

    fn bind(&self, language: &LanguageTag, custom_words: &HashSet<String>) -> Result<DictionaryHandle> {
        for loader in &self.loaders {
            self.loads.fetch_add(1, Ordering::SeqCst);
            match loader.load(language, &self.base_path)? {
                LoadOutcome::Ready(backend) => {
                    info!(
                        language = %language,
                        backend = %backend.kind(),
                        custom_words = custom_words.len(),
                        "dictionary bound"
                    );
                    return Ok(DictionaryHandle::new(
                        language.clone(),
                        backend,
                        Arc::new(custom_words.clone()),
                    ));
                }
                LoadOutcome::Unavailable { reason } => {
                    warn!(
                        language = %language,
                        backend = %loader.kind(),
                        %reason,
                        "backend unavailable, trying next"
                    );
                }
            }
        }

        Err(OrthosError::dictionary(format!(
            "No spelling backend available for {language}"
        )))
    }
}
