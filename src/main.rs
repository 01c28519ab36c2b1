use anyhow::{Context, Result};
use strings_localizer::{config, i18n::LanguageTable, pipeline, translation::GoogleTranslator};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("strings_localizer=info".parse()?)
                .add_directive("localize_strings=info".parse()?),
        )
        .init();

    info!("Starting strings localization");

    // Load configuration from environment
    let config = config::Config::from_env()?;

    // Language table is fixed for the lifetime of the process
    let table = match &config.target_languages {
        Some(codes) => LanguageTable::default_targets().select(codes)?,
        None => LanguageTable::default_targets(),
    };

    let translator = GoogleTranslator::new(&config).context("Failed to build HTTP client")?;

    let report = pipeline::run(&config, &table, &translator)
        .await
        .with_context(|| format!("Localization of {} failed", config.source_file.display()))?;

    for language in &report.languages {
        if !language.failed_keys.is_empty() {
            warn!(
                "{}: {} entries left untranslated: {:?}",
                language.code,
                language.failed_keys.len(),
                language.failed_keys
            );
        }
    }

    info!(
        "✓ Localized {} entries into {} languages",
        report.entries,
        report.languages.len()
    );
    Ok(())
}
