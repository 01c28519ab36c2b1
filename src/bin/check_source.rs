use anyhow::{bail, Context, Result};
use strings_localizer::{config, strings_file};
use tracing::{info, warn};

/// Parse the source strings file without calling the translation API.
///
/// Exits non-zero when any non-comment line failed to parse, so a truncated
/// or hand-mangled source is caught before a full (slow) localization run.
fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("check_source=info".parse()?),
        )
        .init();

    let config = config::Config::from_env()?;
    let parsed = strings_file::read_strings_file(&config.source_file)
        .context("Failed to parse source strings file")?;

    info!(
        "{}: {} entries",
        config.source_file.display(),
        parsed.entries.len()
    );

    let mut seen = std::collections::HashSet::new();
    for entry in &parsed.entries {
        if !seen.insert(entry.key.as_str()) {
            warn!("Duplicate key '{}' will be written twice", entry.key);
        }
    }

    if parsed.skipped > 0 {
        bail!(
            "{} line(s) in {} do not match \"key\" = \"value\";",
            parsed.skipped,
            config.source_file.display()
        );
    }

    Ok(())
}
