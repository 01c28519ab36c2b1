//! Target languages for generated strings files.
//!
//! # Architecture
//!
//! - `language`: `LanguageTarget`, an API language code plus its `.lproj` folder
//! - `registry`: `LanguageTable`, the immutable ordered set of targets for a run
//!
//! # Example
//!
//! ```rust,ignore
//! use strings_localizer::i18n::LanguageTable;
//!
//! let table = LanguageTable::default_targets().select(&["es", "zh-CN"])?;
//! for target in table.iter() {
//!     println!("{} -> {}", target.code(), target.folder());
//! }
//! ```

mod language;
mod registry;

pub use language::LanguageTarget;
pub use registry::LanguageTable;
