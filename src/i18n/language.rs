//! Language target: a translation language paired with its output folder.

use std::path::{Path, PathBuf};

/// A destination language for a localization run.
///
/// The request code and folder name usually coincide, but differ for variant
/// locales (e.g. the API expects `zh-CN` while Xcode expects `zh-Hans.lproj`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTarget {
    /// Language code sent to the translation API (e.g., "es", "zh-CN")
    code: String,

    /// Folder name without the `.lproj` suffix (e.g., "es", "zh-Hans")
    folder: String,
}

impl LanguageTarget {
    pub fn new(code: impl Into<String>, folder: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            folder: folder.into(),
        }
    }

    /// Language code used for the translation request.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Output folder name, without the `.lproj` suffix.
    pub fn folder(&self) -> &str {
        &self.folder
    }

    /// Directory holding this language's strings file: `<resources_dir>/<folder>.lproj`.
    pub fn output_dir(&self, resources_dir: &Path) -> PathBuf {
        resources_dir.join(format!("{}.lproj", self.folder))
    }
}
