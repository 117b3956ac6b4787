pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod solutions;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalInputs;
pub use config::HarnessConfig;
pub use crate::core::{registry::Registry, runner::PuzzleRunner, scaffold::Scaffold};
pub use domain::model::{InputKind, Part, PartResult, RunReport, ScaffoldEntry, ScaffoldReport};
pub use domain::ports::{InputSource, Solution};
pub use utils::error::{HarnessError, Result};
