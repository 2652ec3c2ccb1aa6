//! # pt-infra
//!
//! Infrastructure adapters: the HTTP translation client and the settings
//! file repository.

pub mod settings;
pub mod translate;

pub use settings::FileSettingsRepository;
pub use translate::HttpTranslator;
