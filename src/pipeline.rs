//! End-to-end localization run: parse once, then translate and write each
//! language in turn.
//!
//! Languages are processed one at a time and entries within a language one
//! at a time; every translation is awaited before the next request is sent.

use crate::config::{Config, FailurePolicy};
use crate::error::Error;
use crate::i18n::{LanguageTable, LanguageTarget};
use crate::strings_file::{read_strings_file, Entry};
use crate::translation::Translator;
use crate::writer::StringsWriter;
use std::path::PathBuf;
use tracing::{info, warn};

/// Outcome for a single language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageReport {
    pub code: String,
    pub path: PathBuf,
    pub lines_written: usize,
    /// Keys left out of the file (only populated under `FailurePolicy::SkipEntry`)
    pub failed_keys: Vec<String>,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub entries: usize,
    pub skipped_lines: usize,
    pub languages: Vec<LanguageReport>,
}

impl RunReport {
    /// Total number of entries that could not be translated across all languages.
    pub fn failed_count(&self) -> usize {
        self.languages.iter().map(|l| l.failed_keys.len()).sum()
    }
}

/// Generate one strings file per language in `table` from `config.source_file`.
///
/// The source is read before anything is written, so a missing source file
/// leaves the output tree untouched. Under `FailurePolicy::Abort` the first
/// translation error is returned as-is: the in-progress file keeps the lines
/// already written and later languages are never started.
pub async fn run<T: Translator>(
    config: &Config,
    table: &LanguageTable,
    translator: &T,
) -> Result<RunReport, Error> {
    let parsed = read_strings_file(&config.source_file)?;

    info!(
        "Loaded {} entries from {}",
        parsed.entries.len(),
        config.source_file.display()
    );
    if parsed.skipped > 0 {
        warn!(
            "Skipped {} line(s) in {} that are not \"key\" = \"value\"; entries",
            parsed.skipped,
            config.source_file.display()
        );
    }

    let mut languages = Vec::with_capacity(table.len());
    for target in table.iter() {
        let report = localize_language(config, target, &parsed.entries, translator).await?;
        languages.push(report);
    }

    Ok(RunReport {
        entries: parsed.entries.len(),
        skipped_lines: parsed.skipped,
        languages,
    })
}

/// Translate every entry into one language and write its strings file.
pub async fn localize_language<T: Translator>(
    config: &Config,
    target: &LanguageTarget,
    entries: &[Entry],
    translator: &T,
) -> Result<LanguageReport, Error> {
    info!("Translating to {}...", target.code());

    let out_dir = target.output_dir(&config.resources_dir);
    let mut writer = StringsWriter::create(&out_dir, &config.strings_file_name)?;
    let mut failed_keys = Vec::new();

    for entry in entries {
        match translator.translate(&entry.value, target.code()).await {
            Ok(translated) => writer.write_entry(&entry.key, &translated)?,
            Err(e) if config.failure_policy == FailurePolicy::SkipEntry
                && e.is_translation_failure() =>
            {
                warn!("Skipping '{}' for {}: {}", entry.key, target.code(), e);
                failed_keys.push(entry.key.clone());
            }
            Err(e) => return Err(e),
        }
    }

    info!("Written {}", writer.path().display());

    Ok(LanguageReport {
        code: target.code().to_string(),
        path: writer.path().to_path_buf(),
        lines_written: writer.lines_written(),
        failed_keys,
    })
}
