//! Voice asset lookup

use std::path::{Path, PathBuf};

use crate::error::AssemblyError;
use crate::phrase::ClipToken;

/// A named directory of clips, one file per token
#[derive(Debug, Clone)]
pub struct Voice {
    name: String,
    dir: PathBuf,
}

impl Voice {
    /// Open `<voices_dir>/<name>`.
    ///
    /// Only the directory is checked here; individual clips are resolved
    /// lazily during assembly.
    pub fn open(voices_dir: impl AsRef<Path>, name: &str) -> Result<Self, AssemblyError> {
        let voices_dir = voices_dir.as_ref();
        let dir = voices_dir.join(name);

        let plain_name = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(|c: char| c == '/' || c == '\\');

        if !plain_name || !dir.is_dir() {
            return Err(AssemblyError::VoiceNotFound {
                name: name.to_string(),
                dir: voices_dir.to_path_buf(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            dir,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// File backing a token
    pub fn clip_path(&self, token: &ClipToken) -> PathBuf {
        self.dir.join(token.as_str())
    }

    /// Names of all voices installed under `voices_dir`, sorted
    pub fn available(voices_dir: impl AsRef<Path>) -> std::io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(voices_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_and_resolve() {
        let root = tempdir().unwrap();
        std::fs::create_dir(root.path().join("magnus")).unwrap();

        let voice = Voice::open(root.path(), "magnus").unwrap();
        assert_eq!(voice.name(), "magnus");
        assert_eq!(
            voice.clip_path(&ClipToken::connector(20)),
            root.path().join("magnus").join("20-.wav")
        );
    }

    #[test]
    fn test_missing_voice() {
        let root = tempdir().unwrap();
        let err = Voice::open(root.path(), "nobody").unwrap_err();
        assert!(matches!(err, AssemblyError::VoiceNotFound { ref name, .. } if name == "nobody"));
    }

    #[test]
    fn test_rejects_path_like_names() {
        let root = tempdir().unwrap();
        std::fs::create_dir(root.path().join("magnus")).unwrap();
        assert!(Voice::open(root.path().join("magnus"), "..").is_err());
        assert!(Voice::open(root.path(), "magnus/../magnus").is_err());
    }

    #[test]
    fn test_available_lists_directories_only() {
        let root = tempdir().unwrap();
        std::fs::create_dir(root.path().join("magnus")).unwrap();
        std::fs::create_dir(root.path().join("anna")).unwrap();
        std::fs::write(root.path().join("README"), "clips live here").unwrap();

        assert_eq!(Voice::available(root.path()).unwrap(), ["anna", "magnus"]);
    }
}
