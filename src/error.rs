use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid shift: {0}. Must be between 1 and 25")]
    InvalidShift(i32),

    #[error("Invalid keyword: {0:?}. Must be non-empty and contain only letters A-Z")]
    InvalidKeyword(String),

    #[error("Invalid rail count: {0}. Must be at least 1")]
    InvalidRails(usize),

    #[error("Missing parameter for {method}: {parameter}")]
    MissingParameter {
        method: String,
        parameter: &'static str,
    },

    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    #[error("Unsupported mode: {0}")]
    UnsupportedMode(String),

    #[error("Method required: pass --method or a profile")]
    MethodRequired,
}

pub type Result<T> = std::result::Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_keyword() {
        let err = CipherError::InvalidKeyword("k3y".into());
        assert_eq!(
            err.to_string(),
            "Invalid keyword: \"k3y\". Must be non-empty and contain only letters A-Z"
        );
    }

    #[test]
    fn test_display_missing_parameter() {
        let err = CipherError::MissingParameter {
            method: "railfence".into(),
            parameter: "rails",
        };
        assert_eq!(err.to_string(), "Missing parameter for railfence: rails");
    }
}
