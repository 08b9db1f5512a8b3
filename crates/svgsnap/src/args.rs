//! The shared lifecycle of the command-line tools
use crate::config::Config;

/// A command that can be run from parsed arguments
pub trait RunCommand {
    /// # Errors
    ///
    /// If any part of the lifecycle fails
    /// * Fails to read or parse the input
    /// * Fails to write or serialize the output
    fn run(self, config: Config) -> anyhow::Result<()>;
}
