//! Crate-level error types.

use std::fmt;

/// Errors produced by the fluid-slider crate.
#[derive(Debug)]
pub enum SliderError {
    /// A range was rejected because `minimum >= maximum` or a bound is not
    /// finite.
    InvalidRange {
        /// Requested lower bound.
        minimum: f64,
        /// Requested upper bound.
        maximum: f64,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for SliderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { minimum, maximum } => write!(
                f,
                "invalid slider range: minimum {minimum} must be finite and \
                 below maximum {maximum}"
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for SliderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SliderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Validate a `[minimum, maximum]` pair.
pub(crate) fn check_range(minimum: f64, maximum: f64) -> Result<(), SliderError> {
    if minimum.is_finite() && maximum.is_finite() && minimum < maximum {
        Ok(())
    } else {
        Err(SliderError::InvalidRange { minimum, maximum })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordered_range() {
        assert!(check_range(0.0, 1.0).is_ok());
        assert!(check_range(-10.0, -5.0).is_ok());
    }

    #[test]
    fn rejects_degenerate_and_inverted_ranges() {
        assert!(matches!(
            check_range(1.0, 1.0),
            Err(SliderError::InvalidRange { .. })
        ));
        assert!(check_range(5.0, 2.0).is_err());
        assert!(check_range(f64::NAN, 2.0).is_err());
        assert!(check_range(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn display_names_both_bounds() {
        let msg = SliderError::InvalidRange {
            minimum: 3.0,
            maximum: 1.0,
        }
        .to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('1'));
    }
}
