//! Tool codes, tool types and their charge policies.

use crate::money::Cents;
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Errors that can occur when parsing schema values from user input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The tool code was empty.
    #[error("Tool code may not be empty.")]
    EmptyToolCode,

    /// The tool code contained something other than ASCII letters and digits.
    #[error("Tool code `{0}` must be alphanumeric.")]
    InvalidToolCode(String),

    /// The tool type name is not one the store rents.
    #[error("Unknown tool type `{0}` (expected ladder, chainsaw or jackhammer).")]
    UnknownToolType(String),
}

/// A tool code such as `JAKR`, normalized to upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ToolCode(String);

impl ToolCode {
    /// Parse and normalize a tool code.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::EmptyToolCode`] for an empty (or all-whitespace)
    /// input and [`SchemaError::InvalidToolCode`] if any character is not an
    /// ASCII letter or digit.
    pub fn new(code: &str) -> Result<Self, SchemaError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(SchemaError::EmptyToolCode);
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(SchemaError::InvalidToolCode(code.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Return the normalized code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ToolCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}

impl FromStr for ToolCode {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ToolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ToolCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ToolCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ToolCode {
    fn eq(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl PartialEq<&str> for ToolCode {
    fn eq(&self, other: &&str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

/// Which classes of day a tool type is billed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargePolicy {
    /// Monday through Friday.
    pub weekday: bool,
    /// Saturday and Sunday.
    pub weekend: bool,
    /// Observed holidays, whatever day of the week they land on.
    pub holiday: bool,
}

/// The kinds of tool the store rents.
///
/// A tool type fixes the daily charge and the [`ChargePolicy`]; brands and
/// codes live on the individual tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    /// $1.49 a day, no charge on holidays.
    Ladder,
    /// $1.49 a day, no charge on weekends.
    Chainsaw,
    /// $2.99 a day, no charge on weekends or holidays.
    Jackhammer,
}

impl ToolType {
    /// Every tool type, in catalog order.
    pub const ALL: [ToolType; 3] = [ToolType::Ladder, ToolType::Chainsaw, ToolType::Jackhammer];

    /// Human-readable name used on rental agreements.
    pub fn description(self) -> &'static str {
        match self {
            ToolType::Ladder => "Ladder",
            ToolType::Chainsaw => "Chainsaw",
            ToolType::Jackhammer => "Jackhammer",
        }
    }

    /// Charge for each billed rental day.
    pub fn daily_charge(self) -> Cents {
        match self {
            ToolType::Ladder | ToolType::Chainsaw => Cents::new(149),
            ToolType::Jackhammer => Cents::new(299),
        }
    }

    /// Which days this type is billed for.
    pub fn policy(self) -> ChargePolicy {
        match self {
            ToolType::Ladder => ChargePolicy {
                weekday: true,
                weekend: true,
                holiday: false,
            },
            ToolType::Chainsaw => ChargePolicy {
                weekday: true,
                weekend: false,
                holiday: true,
            },
            ToolType::Jackhammer => ChargePolicy {
                weekday: true,
                weekend: false,
                holiday: false,
            },
        }
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for ToolType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolType::ALL
            .into_iter()
            .find(|t| t.description().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SchemaError::UnknownToolType(s.to_string()))
    }
}
