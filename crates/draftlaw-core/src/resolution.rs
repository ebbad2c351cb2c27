//! Resolution types, authority thresholds, and operator overrides.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel override value meaning "classify automatically".
pub const AUTO: &str = "auto";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseOverrideError {
    #[error(
        "unknown resolution type {0:?}; expected one of: auto, Board Resolution, \
         Shareholder Resolution, Special Shareholder Resolution"
    )]
    ResolutionType(String),

    #[error(
        "unknown authority threshold {0:?}; expected one of: auto, Standard Majority, \
         Supermajority, Unanimous"
    )]
    AuthorityThreshold(String),
}

/// The legal instrument being drafted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionType {
    #[serde(rename = "Board Resolution")]
    Board,
    #[serde(rename = "Shareholder Resolution")]
    Shareholder,
    #[serde(rename = "Special Shareholder Resolution")]
    SpecialShareholder,
}

impl ResolutionType {
    pub const ALL: [Self; 3] = [Self::Board, Self::Shareholder, Self::SpecialShareholder];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Board => "Board Resolution",
            Self::Shareholder => "Shareholder Resolution",
            Self::SpecialShareholder => "Special Shareholder Resolution",
        }
    }

    /// Whether the label names shareholders, so the record must list some.
    pub fn requires_shareholders(&self) -> bool {
        self.as_str().to_lowercase().contains("shareholder")
    }

    /// Whether the label names the board, so the record must list directors.
    pub fn requires_directors(&self) -> bool {
        self.as_str().to_lowercase().contains("board")
    }
}

impl fmt::Display for ResolutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResolutionType {
    type Err = ParseOverrideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseOverrideError::ResolutionType(s.to_string()))
    }
}

/// Voting threshold needed to pass the resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorityThreshold {
    #[serde(rename = "Standard Majority")]
    StandardMajority,
    Supermajority,
    Unanimous,
}

impl AuthorityThreshold {
    pub const ALL: [Self; 3] = [Self::StandardMajority, Self::Supermajority, Self::Unanimous];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StandardMajority => "Standard Majority",
            Self::Supermajority => "Supermajority",
            Self::Unanimous => "Unanimous",
        }
    }
}

impl fmt::Display for AuthorityThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthorityThreshold {
    type Err = ParseOverrideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseOverrideError::AuthorityThreshold(s.to_string()))
    }
}

/// Operator choice for a classified value: detect it, or use a fixed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Override<T> {
    Auto,
    Fixed(T),
}

impl<T> Default for Override<T> {
    fn default() -> Self {
        Self::Auto
    }
}

impl<T> Override<T> {
    /// The fixed value, or the result of `detect` when set to auto.
    ///
    /// `detect` is not called for a fixed override.
    pub fn resolve(self, detect: impl FnOnce() -> T) -> T {
        match self {
            Self::Auto => detect(),
            Self::Fixed(value) => value,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl<T: FromStr<Err = ParseOverrideError>> FromStr for Override<T> {
    type Err = ParseOverrideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() || s.trim().eq_ignore_ascii_case(AUTO) {
            return Ok(Self::Auto);
        }
        s.parse().map(Self::Fixed)
    }
}

impl<T: fmt::Display> fmt::Display for Override<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str(AUTO),
            Self::Fixed(value) => fmt::Display::fmt(value, f),
        }
    }
}
