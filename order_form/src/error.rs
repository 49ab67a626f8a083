use std::path::PathBuf;

use thiserror::Error;

/// Reasons a field's text cannot be read as an amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("not a number: {0:?}")]
    NotANumber(String),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: invalid value {value:?} for `{key}`")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AmountError::NotANumber("abc".to_string());
        assert_eq!(err.to_string(), "not a number: \"abc\"");

        let err = SettingsError::InvalidValue {
            line: 3,
            key: "market_price_ore".to_string(),
            value: "lots".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "line 3: invalid value \"lots\" for `market_price_ore`"
        );
    }
}
