//! Finding and reading token files.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, error, warn};
use walkdir::WalkDir;

use crate::error::{Result, TokenError};

/// One successfully parsed token file.
#[derive(Debug, Clone)]
pub struct TokenDocument {
    pub path: PathBuf,
    pub root: Value,
}

impl TokenDocument {
    /// Parses document text. Object keys keep their source order.
    pub fn parse(path: impl Into<PathBuf>, text: &str) -> Result<Self> {
        let path = path.into();
        match serde_json::from_str(text) {
            Ok(root) => Ok(Self { path, root }),
            Err(err) => Err(TokenError::Parse {
                path,
                message: err.to_string(),
                help: Some(format!("line {}, column {}", err.line(), err.column())),
            }),
        }
    }

    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| TokenError::io(path, "Failed to read token file", e))?;
        Self::parse(path, &text)
    }
}

/// Files found in a tokens directory and the ones that parsed.
#[derive(Debug, Default)]
pub struct LoadedSources {
    /// Every eligible file, including ones that failed to load.
    pub files: Vec<PathBuf>,
    pub documents: Vec<TokenDocument>,
}

/// Whether a file name is a token file: `*.json`, not hidden.
pub fn is_token_file(name: &str) -> bool {
    name.ends_with(".json") && !name.starts_with('.')
}

/// Lists token files directly inside `dir`, sorted by file name.
pub fn scan_tokens_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(TokenError::MissingDirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(TokenError::Io {
                    path: dir.to_path_buf(),
                    message: format!("Failed to read tokens directory: {err}"),
                })
            }
            Err(err) => {
                warn!("skipping unreadable tokens directory entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            debug!(path = %entry.path().display(), "skipping file with a non UTF-8 name");
            continue;
        };
        if is_token_file(name) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Scans `dir` and parses every token file. A file that cannot be read or
/// parsed is logged and left out; only a directory failure is an error.
pub fn load_tokens_dir(dir: &Path) -> Result<LoadedSources> {
    let files = scan_tokens_dir(dir)?;
    let mut documents = Vec::with_capacity(files.len());
    for path in &files {
        match TokenDocument::read(path) {
            Ok(document) => {
                debug!(path = %path.display(), "loaded token file");
                documents.push(document);
            }
            Err(err) => error!(path = %path.display(), "failed to process token file: {err}"),
        }
    }
    Ok(LoadedSources { files, documents })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn token_file_names() {
        assert!(is_token_file("core.json"));
        assert!(!is_token_file(".hidden.json"));
        assert!(!is_token_file("notes.txt"));
        assert!(!is_token_file("core.json.bak"));
    }

    #[test]
    fn parse_keeps_key_order() {
        let doc = TokenDocument::parse("t.json", r#"{"values": {"z": 1, "a": 2, "m": 3}}"#).unwrap();
        let keys: Vec<_> = doc.root["values"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn parse_failure_reports_path() {
        let err = TokenDocument::parse("broken.json", "{ not json").unwrap_err();
        match err {
            TokenError::Parse { path, .. } => assert_eq!(path, PathBuf::from("broken.json")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn scan_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.json", "a.json", ".c.json", "readme.md"] {
            fs::write(dir.path().join(name), "{}").unwrap();
        }
        fs::create_dir(dir.path().join("nested.json")).unwrap();

        let files = scan_tokens_dir(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_token_files_are_followed() {
        let dir = tempfile::tempdir().unwrap();
        let shared = dir.path().join("shared");
        let tokens = dir.path().join("tokens");
        fs::create_dir(&shared).unwrap();
        fs::create_dir(&tokens).unwrap();
        fs::write(shared.join("core.json"), r#"{"collections": []}"#).unwrap();
        std::os::unix::fs::symlink(shared.join("core.json"), tokens.join("core.json")).unwrap();
        std::os::unix::fs::symlink(shared.join("gone.json"), tokens.join("dangling.json")).unwrap();

        let loaded = load_tokens_dir(&tokens).unwrap();
        assert_eq!(loaded.files, vec![tokens.join("core.json")]);
        assert_eq!(loaded.documents.len(), 1);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = scan_tokens_dir(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, TokenError::MissingDirectory { .. }));
    }

    #[test]
    fn unparseable_files_are_counted_but_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.json"), "{").unwrap();
        fs::write(dir.path().join("good.json"), r#"{"collections": []}"#).unwrap();

        let loaded = load_tokens_dir(dir.path()).unwrap();
        assert_eq!(loaded.files.len(), 2);
        assert_eq!(loaded.documents.len(), 1);
        assert!(loaded.documents[0].path.ends_with("good.json"));
    }
}
