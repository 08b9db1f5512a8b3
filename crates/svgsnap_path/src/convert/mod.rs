//! Conversions between forms of path data.
//!
//! Converting a path is done in two steps:
//! 1. Resolve every relative command against the running cursor, with [`absolute`]
//! 2. Snap the resolved coordinates to a grid when serializing, with [`crate::snap`]
mod absolute;

pub use crate::convert::absolute::absolute;
use crate::command::ID;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
/// An error while resolving a path's commands
pub enum Error {
    /// A command didn't have enough coordinate pairs to complete a group of arguments
    #[error("`{command}` expects groups of {group} coordinate pair(s), but received {received}")]
    IncompleteArguments {
        /// The command as written
        command: ID,
        /// The number of pairs making up one group of arguments
        group: usize,
        /// The number of whole pairs given
        received: usize,
    },
}
