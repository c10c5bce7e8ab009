use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisualizerError {
    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

pub type Result<T> = std::result::Result<T, VisualizerError>;

/// Non-fatal problem with a single block.
///
/// The block is still rendered (as a fallback card); the warning only lets
/// callers find out which blocks were degraded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockFormatWarning {
    /// Position of the block in the message content list
    pub index: usize,
    /// Type tag as found in the input, or "unknown" when it was missing
    pub block_type: String,
    pub reason: String,
}

impl fmt::Display for BlockFormatWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "block {} ({}): {}",
            self.index, self.block_type, self.reason
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VisualizerError::Schema("missing content".into());
        assert_eq!(err.to_string(), "Schema error: missing content");
    }

    #[test]
    fn test_warning_display() {
        let warning = BlockFormatWarning {
            index: 2,
            block_type: "tool_use".into(),
            reason: "missing field `name`".into(),
        };
        assert_eq!(
            warning.to_string(),
            "block 2 (tool_use): missing field `name`"
        );
    }
}
