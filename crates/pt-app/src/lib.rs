//! # pt-app
//!
//! Use cases and the pipeline engine. Everything here talks to the outside
//! world through the ports defined in `pt-core`.

pub mod engine;
pub mod usecases;

pub use engine::{EngineCommand, EngineHandle, PipelineEngine};
pub use usecases::{ExtractSelection, TranslateSelection};
