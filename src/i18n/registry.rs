//! Language table: the set of languages a run generates files for.
//!
//! The table is an ordinary immutable value. `main` builds it once at
//! startup and passes it by reference to the pipeline; nothing is stored in
//! a global.

use crate::error::Error;
use crate::i18n::LanguageTarget;

/// Ordered list of language targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    targets: Vec<LanguageTarget>,
}

impl LanguageTable {
    /// Build a table from explicit targets, preserving their order.
    pub fn new(targets: Vec<LanguageTarget>) -> Self {
        Self { targets }
    }

    /// The languages the app ships with.
    ///
    /// Only Simplified Chinese needs a folder that differs from its API code.
    pub fn default_targets() -> Self {
        Self::new(
            [
                ("es", "es"),
                ("fr", "fr"),
                ("de", "de"),
                ("zh-CN", "zh-Hans"),
                ("ru", "ru"),
                ("ar", "ar"),
                ("pt", "pt"),
            ]
            .into_iter()
            .map(|(code, folder)| LanguageTarget::new(code, folder))
            .collect(),
        )
    }

    /// Get a target by its API language code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageTarget> {
        self.targets.iter().find(|target| target.code() == code)
    }

    /// Restrict the table to the given codes, in the order they are listed.
    ///
    /// # Returns
    /// * `Ok(LanguageTable)` with one target per requested code
    /// * `Err(Error::UnknownLanguage)` for the first code not in this table
    pub fn select<S: AsRef<str>>(&self, codes: &[S]) -> Result<LanguageTable, Error> {
        codes
            .iter()
            .map(|code| {
                let code = code.as_ref();
                self.get_by_code(code)
                    .cloned()
                    .ok_or_else(|| Error::UnknownLanguage(code.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(LanguageTable::new)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageTarget> {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::default_targets()
    }
}
