pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::CatalogConfig;
pub use core::catalog::CatalogEngine;
pub use domain::model::{PatternKind, Transcript};
pub use utils::error::{PatternError, Result};
