use anyhow::{bail, Result};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// What to do when a single entry cannot be translated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the whole run on the first failed translation
    #[default]
    Abort,
    /// Log the failure, leave the entry out of the file, and keep going
    SkipEntry,
}

impl FromStr for FailurePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(FailurePolicy::Abort),
            "skip" | "skip-entry" | "skip_entry" => Ok(FailurePolicy::SkipEntry),
            other => bail!(
                "Invalid TRANSLATION_FAILURE_POLICY '{}' (expected 'abort' or 'skip')",
                other
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Input
    pub source_file: PathBuf,

    // Output
    pub resources_dir: PathBuf,
    pub strings_file_name: String,

    // Translation API
    pub translate_api_url: String,
    pub source_language: String,
    pub request_timeout: Duration,

    // Run selection
    pub target_languages: Option<Vec<String>>,
    pub failure_policy: FailurePolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Input
            source_file: std::env::var("SOURCE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    PathBuf::from("ScreenShotAutoRun")
                        .join("en.lproj")
                        .join("Localizable.strings")
                }),

            // Output
            resources_dir: std::env::var("RESOURCES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("ScreenShotAutoRun")),
            strings_file_name: std::env::var("STRINGS_FILE_NAME")
                .unwrap_or_else(|_| "Localizable.strings".to_string()),

            // Translation API
            translate_api_url: std::env::var("TRANSLATE_API_URL").unwrap_or_else(|_| {
                "https://translate.googleapis.com/translate_a/single".to_string()
            }),
            source_language: std::env::var("SOURCE_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),
            request_timeout: Duration::from_secs(
                std::env::var("REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            ),

            // Run selection
            target_languages: std::env::var("TARGET_LANGUAGES")
                .ok()
                .map(|v| parse_language_list(&v))
                .filter(|codes| !codes.is_empty()),
            failure_policy: match std::env::var("TRANSLATION_FAILURE_POLICY") {
                Ok(v) => v.parse()?,
                Err(_) => FailurePolicy::default(),
            },
        })
    }
}

/// Split a comma-separated list of language codes, dropping empty items.
fn parse_language_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: [&str; 8] = [
        "SOURCE_FILE",
        "RESOURCES_DIR",
        "STRINGS_FILE_NAME",
        "TRANSLATE_API_URL",
        "SOURCE_LANGUAGE",
        "REQUEST_TIMEOUT_SECS",
        "TARGET_LANGUAGES",
        "TRANSLATION_FAILURE_POLICY",
    ];

    fn clear_env() {
        for var in ALL_VARS {
            std::env::remove_var(var);
        }
    }

    // ==================== Default Tests ====================

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().expect("Should load defaults");

        assert_eq!(
            config.source_file,
            PathBuf::from("ScreenShotAutoRun/en.lproj/Localizable.strings")
        );
        assert_eq!(config.resources_dir, PathBuf::from("ScreenShotAutoRun"));
        assert_eq!(config.strings_file_name, "Localizable.strings");
        assert_eq!(
            config.translate_api_url,
            "https://translate.googleapis.com/translate_a/single"
        );
        assert_eq!(config.source_language, "en");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.target_languages, None);
        assert_eq!(config.failure_policy, FailurePolicy::Abort);
    }

    // ==================== Override Tests ====================

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("SOURCE_FILE", "App/Base.lproj/Main.strings");
        std::env::set_var("RESOURCES_DIR", "App");
        std::env::set_var("STRINGS_FILE_NAME", "Main.strings");
        std::env::set_var("TRANSLATE_API_URL", "http://localhost:9999/t");
        std::env::set_var("REQUEST_TIMEOUT_SECS", "3");
        std::env::set_var("TARGET_LANGUAGES", "es, zh-CN,,");
        std::env::set_var("TRANSLATION_FAILURE_POLICY", "skip");

        let config = Config::from_env().expect("Should load");
        clear_env();

        assert_eq!(config.source_file, PathBuf::from("App/Base.lproj/Main.strings"));
        assert_eq!(config.resources_dir, PathBuf::from("App"));
        assert_eq!(config.strings_file_name, "Main.strings");
        assert_eq!(config.translate_api_url, "http://localhost:9999/t");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(
            config.target_languages,
            Some(vec!["es".to_string(), "zh-CN".to_string()])
        );
        assert_eq!(config.failure_policy, FailurePolicy::SkipEntry);
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_falls_back_to_default() {
        clear_env();
        std::env::set_var("REQUEST_TIMEOUT_SECS", "soon");

        let config = Config::from_env().expect("Should load");
        clear_env();

        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    #[serial]
    fn test_blank_target_languages_means_all() {
        clear_env();
        std::env::set_var("TARGET_LANGUAGES", " , ");

        let config = Config::from_env().expect("Should load");
        clear_env();

        assert_eq!(config.target_languages, None);
    }

    #[test]
    #[serial]
    fn test_invalid_failure_policy_is_error() {
        clear_env();
        std::env::set_var("TRANSLATION_FAILURE_POLICY", "retry");

        let result = Config::from_env();
        clear_env();

        let err = result.expect_err("Should reject unknown policy");
        assert!(err.to_string().contains("retry"));
    }

    // ==================== FailurePolicy Tests ====================

    #[test]
    fn test_failure_policy_from_str() {
        assert_eq!("abort".parse::<FailurePolicy>().ok(), Some(FailurePolicy::Abort));
        assert_eq!(" SKIP ".parse::<FailurePolicy>().ok(), Some(FailurePolicy::SkipEntry));
        assert_eq!(
            "skip-entry".parse::<FailurePolicy>().ok(),
            Some(FailurePolicy::SkipEntry)
        );
        assert!("".parse::<FailurePolicy>().is_err());
    }

    #[test]
    fn test_parse_language_list() {
        assert_eq!(parse_language_list("es,fr"), vec!["es", "fr"]);
        assert_eq!(parse_language_list(" de ,  ,pt "), vec!["de", "pt"]);
        assert!(parse_language_list("").is_empty());
    }
}
