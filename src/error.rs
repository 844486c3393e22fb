/*!

  Error types for netlist translation.

*/

use std::path::PathBuf;
use thiserror::Error;

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a translation.
///
/// Malformed lines are not errors: they are skipped. Only conditions the
/// translation cannot continue past end up here.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the netlist or writing an output file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file being read or written
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },

    /// A declared input or output port has no net id to record
    #[error("line {line}: port '{name}' cannot be declared as an input or output")]
    UnmappedPort {
        /// 1-based line number in the netlist
        line: usize,
        /// The offending port name
        name: String,
    },
}

impl Error {
    /// Wraps an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
