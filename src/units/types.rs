use crate::error::CapError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Farad subunits shown on the converter screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Nano,
    Pico,
    Micro,
    Milli,
}

impl Unit {
    /// Field order of the screen: nF, pF, uF, mF
    pub const ALL: [Unit; 4] = [Unit::Nano, Unit::Pico, Unit::Micro, Unit::Milli];

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Nano => "nF",
            Unit::Pico => "pF",
            Unit::Micro => "uF",
            Unit::Milli => "mF",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Unit::Nano => "nanofarad",
            Unit::Pico => "picofarad",
            Unit::Micro => "microfarad",
            Unit::Milli => "millifarad",
        }
    }

    /// How many nanofarads one of this unit is
    pub fn factor_to_nano(self) -> f64 {
        match self {
            Unit::Milli => 1e6,
            Unit::Micro => 1e3,
            Unit::Nano => 1.0,
            Unit::Pico => 1e-3,
        }
    }

    /// The three units other than `self`, in field order
    pub fn others(self) -> impl Iterator<Item = Unit> {
        Unit::ALL.into_iter().filter(move |u| *u != self)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Unit {
    type Err = CapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // Long names are matched case-insensitively ("Microfarad", "nano")
        match trimmed.to_lowercase().as_str() {
            "nano" | "nanofarad" | "nanofarads" => return Ok(Unit::Nano),
            "pico" | "picofarad" | "picofarads" => return Ok(Unit::Pico),
            "micro" | "microfarad" | "microfarads" => return Ok(Unit::Micro),
            "milli" | "millifarad" | "millifarads" => return Ok(Unit::Milli),
            _ => {}
        }

        // Symbols: the prefix is case-sensitive since "M" would be mega
        let prefix = trimmed
            .strip_suffix('F')
            .or_else(|| trimmed.strip_suffix('f'))
            .unwrap_or(trimmed);

        match prefix {
            "n" => Ok(Unit::Nano),
            "p" => Ok(Unit::Pico),
            "u" | "µ" | "μ" => Ok(Unit::Micro),
            "m" => Ok(Unit::Milli),
            _ => Err(CapError::InvalidUnit(s.to_string())),
        }
    }
}
