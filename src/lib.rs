pub mod commands;
pub mod error;

pub use commands::Shift;
pub use error::CliError;
