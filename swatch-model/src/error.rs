use std::fmt::{self, Display};

/// Errors produced while turning user supplied strings into colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The input was empty after trimming.
    Empty,
    /// The input was not a `#rgb` or `#rrggbb` hex color.
    InvalidHex(String),
}

impl ColorParseError {
    /// The raw input that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            ColorParseError::Empty => "",
            ColorParseError::InvalidHex(raw) => raw,
        }
    }
}

impl Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::Empty => write!(f, "invalid color: empty input"),
            ColorParseError::InvalidHex(raw) => {
                write!(f, "invalid color format: {raw:?}")
            }
        }
    }
}

impl std::error::Error for ColorParseError {}

/// Result alias for color parsing.
pub type Result<T> = std::result::Result<T, ColorParseError>;

/// Returned when a string names neither `solid` nor `gradient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSwatchModeError(pub String);

impl Display for ParseSwatchModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown swatch mode {:?} (expected \"solid\" or \"gradient\")",
            self.0
        )
    }
}

impl std::error::Error for ParseSwatchModeError {}
