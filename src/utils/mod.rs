pub mod error;
pub mod grid;
pub mod logger;
pub mod monitor;
pub mod validation;
