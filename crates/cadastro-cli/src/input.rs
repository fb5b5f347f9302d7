//! Reading command input from a file or stdin.

use std::io::{self, Read};

use thiserror::Error;
use tracing::debug;

/// Failures while reading command input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The named file could not be read.
    #[error("failed to read file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: io::Error,
    },
    /// Standard input could not be read.
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] io::Error),
}

/// Reads the whole input from `path`, or from stdin when no path is given.
pub fn read_source(path: Option<&str>) -> Result<String, InputError> {
    match path {
        Some(path) => {
            debug!(path, "reading input file");
            std::fs::read_to_string(path).map_err(|source| InputError::File {
                path: path.to_string(),
                source,
            })
        }
        None => {
            debug!("reading input from stdin");
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
