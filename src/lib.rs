pub mod config;
pub mod error;
pub mod i18n;
pub mod pipeline;
pub mod strings_file;
pub mod translation;
pub mod writer;

pub use error::Error;
