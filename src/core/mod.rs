pub mod registry;
pub mod runner;
pub mod scaffold;

pub use crate::domain::model::{InputKind, Part, PartResult, RunReport, ScaffoldEntry, ScaffoldReport};
pub use crate::domain::ports::{InputSource, Solution};
pub use crate::utils::error::Result;
