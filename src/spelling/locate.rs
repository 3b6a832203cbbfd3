//! Dictionary file search.
//!
//! Files are named after the full tag (`en_US.dic`, `en_US.aff`) and looked
//! up in `base/<primary>`, then `base/<tag>`, then `base` itself. The first
//! directory holding every required file wins.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{OrthosError, Result};
use crate::language::LanguageTag;

/// Resolved dictionary files for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryFiles {
    pub dic: PathBuf,
    pub aff: Option<PathBuf>,
}

/// The search directories in order.
pub fn candidate_dirs(base_path: &Path, language: &LanguageTag) -> [PathBuf; 3] {
    [
        base_path.join(language.primary()),
        base_path.join(language.as_str()),
        base_path.to_path_buf(),
    ]
}

/// Find the `.dic` file, and the `.aff` file when `require_aff` is set.
pub fn locate(base_path: &Path, language: &LanguageTag, require_aff: bool) -> Result<DictionaryFiles> {
    let dic_name = format!("{}.dic", language.as_str());
    let aff_name = format!("{}.aff", language.as_str());

    for dir in candidate_dirs(base_path, language) {
        let dic = dir.join(&dic_name);
        let aff = dir.join(&aff_name);
        if !dic.is_file() {
            continue;
        }
        if require_aff && !aff.is_file() {
            continue;
        }
        debug!(language = %language, dir = %dir.display(), "dictionary files located");
        return Ok(DictionaryFiles {
            dic,
            aff: if aff.is_file() { Some(aff) } else { None },
        });
    }

    Err(OrthosError::DictionaryNotFound {
        language: language.to_string(),
        base_path: base_path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "1\nword\n").unwrap();
    }

    #[test]
    fn test_primary_dir_wins() {
        let dir = TempDir::new().unwrap();
        let tag = LanguageTag::parse("en_US").unwrap();
        touch(&dir.path().join("en/en_US.dic"));
        touch(&dir.path().join("en/en_US.aff"));
        touch(&dir.path().join("en_US.dic"));
        touch(&dir.path().join("en_US.aff"));

        let files = locate(dir.path(), &tag, true).unwrap();
        assert_eq!(files.dic, dir.path().join("en/en_US.dic"));
        assert_eq!(files.aff, Some(dir.path().join("en/en_US.aff")));
    }

    #[test]
    fn test_aff_requirement_skips_incomplete_dirs() {
        let dir = TempDir::new().unwrap();
        let tag = LanguageTag::parse("de_DE").unwrap();
        touch(&dir.path().join("de/de_DE.dic"));
        touch(&dir.path().join("de_DE/de_DE.dic"));
        touch(&dir.path().join("de_DE/de_DE.aff"));

        let files = locate(dir.path(), &tag, true).unwrap();
        assert_eq!(files.dic, dir.path().join("de_DE/de_DE.dic"));

        let files = locate(dir.path(), &tag, false).unwrap();
        assert_eq!(files.dic, dir.path().join("de/de_DE.dic"));
        assert_eq!(files.aff, None);
    }

    #[test]
    fn test_missing_files_name_language_and_base() {
        let dir = TempDir::new().unwrap();
        let tag = LanguageTag::parse("fr_FR").unwrap();
        let err = locate(dir.path(), &tag, false).unwrap_err();
        match err {
            OrthosError::DictionaryNotFound { language, base_path } => {
                assert_eq!(language, "fr_FR");
                assert_eq!(base_path, dir.path());
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
