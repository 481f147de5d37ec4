use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// JDs shorter than this still analyze, but the result is flagged as thin.
pub const SHORT_JD_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum JdWarning {
    ShortDescription { length: usize, recommended: usize },
}

/// Rejects a blank JD; returns non-blocking warnings otherwise.
pub fn validate_jd(jd_text: &str) -> Result<Vec<JdWarning>, AppError> {
    let trimmed = jd_text.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }

    let length = trimmed.chars().count();
    let mut warnings = Vec::new();
    if length < SHORT_JD_CHARS {
        warnings.push(JdWarning::ShortDescription {
            length,
            recommended: SHORT_JD_CHARS,
        });
    }
    Ok(warnings)
}
