//! Input limits for submissions.
//!
//! Guards the pipeline against oversized pastes. Blank input is not a
//! violation; it simply produces no claims.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Limits applied to each submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputLimits {
    /// Maximum submission size in bytes (default: 64KB)
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
}

fn default_max_input_bytes() -> usize {
    64 * 1024
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

impl InputLimits {
    /// Validate a submission against the size limit
    pub fn validate(&self, input: &str) -> Result<(), InputViolation> {
        let size = input.len();
        if size > self.max_input_bytes {
            return Err(InputViolation::TooLarge {
                actual: size,
                limit: self.max_input_bytes,
            });
        }
        Ok(())
    }
}

/// Input rejection reasons
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputViolation {
    #[error("Input too large: {actual} bytes > {limit} bytes")]
    TooLarge { actual: usize, limit: usize },
}
