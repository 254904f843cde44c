//! Value types for climb log entries.
//!
//! `Attempts` and `Effort` only ever hold values from their domain, so the
//! builder never has to validate them after the fact.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AscentError;

/// How a route was completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickType {
    #[default]
    Send,
    Attempt,
    Flash,
    Onsight,
}

impl TickType {
    /// Every tick type, in the order choices are offered.
    pub const ALL: [TickType; 4] = [
        TickType::Send,
        TickType::Attempt,
        TickType::Flash,
        TickType::Onsight,
    ];

    /// Wire name used in emitted records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Send => "send",
            Self::Attempt => "attempt",
            Self::Flash => "flash",
            Self::Onsight => "onsight",
        }
    }

    /// Human-facing label for prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Send => "Send",
            Self::Attempt => "Attempt",
            Self::Flash => "Flash",
            Self::Onsight => "Onsight",
        }
    }
}

impl fmt::Display for TickType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TickType {
    type Err = AscentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "");
        TickType::ALL
            .into_iter()
            .find(|tick| tick.as_str() == normalized)
            .ok_or_else(|| {
                AscentError::InvalidInput(format!(
                    "tick type '{}' (expected send, attempt, flash, or onsight)",
                    s.trim()
                ))
            })
    }
}

/// Number of tries on a route, only meaningful for `TickType::Attempt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Attempts(u8);

impl Attempts {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Returns `None` when `value` is outside 1..=5.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// All selectable values, ascending.
    pub fn choices() -> impl Iterator<Item = Attempts> {
        (Self::MIN..=Self::MAX).map(Attempts)
    }
}

impl Default for Attempts {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for Attempts {
    type Error = AscentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            AscentError::OutOfRange(format!(
                "attempts must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            ))
        })
    }
}

impl From<Attempts> for u8 {
    fn from(value: Attempts) -> Self {
        value.0
    }
}

impl fmt::Display for Attempts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Perceived effort on a 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Effort(u8);

impl Effort {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const DEFAULT: u8 = 7;

    /// Returns `None` when `value` is outside 1..=10.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// All selectable values, ascending.
    pub fn choices() -> impl Iterator<Item = Effort> {
        (Self::MIN..=Self::MAX).map(Effort)
    }
}

impl Default for Effort {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u8> for Effort {
    type Error = AscentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            AscentError::OutOfRange(format!(
                "effort must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            ))
        })
    }
}

impl From<Effort> for u8 {
    fn from(value: Effort) -> Self {
        value.0
    }
}

impl fmt::Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two independent skill tag sets an entry carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillKind {
    Physical,
    Technical,
}

impl SkillKind {
    pub const ALL: [SkillKind; 2] = [SkillKind::Physical, SkillKind::Technical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Technical => "technical",
        }
    }
}

impl fmt::Display for SkillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
