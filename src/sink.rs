use std::fs::File;
use std::io::Write;

use tracing::info;

use crate::error::SinkError;

/// Destination for rendered Markdown
pub trait OutputSink {
    fn emit(&self, content: &str, destination: &str) -> Result<(), SinkError>;
}

/// Writes to a file, creating or truncating it
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSink;

impl OutputSink for FileSink {
    fn emit(&self, content: &str, destination: &str) -> Result<(), SinkError> {
        let mut file = File::create(destination).map_err(|source| SinkError::Open {
            destination: destination.to_string(),
            source,
        })?;
        file.write_all(content.as_bytes())
            .map_err(|source| SinkError::Write {
                destination: destination.to_string(),
                source,
            })?;
        info!(destination, bytes = content.len(), "wrote markdown");
        Ok(())
    }
}

/// Prints to standard output; the destination name is only used in errors
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&self, content: &str, destination: &str) -> Result<(), SinkError> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|source| SinkError::Write {
                destination: destination.to_string(),
                source,
            })
    }
}
