// Licensed under the Apache-2.0 license

//! The closed set of register access modes.
//!
//! A mode describes the access-direction contract of a register across the
//! PS/PL boundary: which side reads, which side writes, and whether a write
//! is pulsed for a single cycle. The set is closed; mode codes are parsed
//! into [`Mode`] at construction time, so an unrecognized mode can never
//! reach a generator.

use crate::error::{RegisterMapError, Result};
use std::fmt;
use std::str::FromStr;

/// Register access mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// PS read-only.
    R,
    /// PS write-only.
    W,
    /// PS read and write.
    RW,
    /// PS write, asserted for one cycle in PL.
    WPulse,
    /// PS read, PS write asserted for one cycle in PL.
    RWPulse,
}

impl Mode {
    /// All modes, in declaration order.
    pub const ALL: [Mode; 5] = [Mode::R, Mode::W, Mode::RW, Mode::WPulse, Mode::RWPulse];

    /// Parse a canonical mode code.
    pub fn from_code(code: &str) -> Result<Mode> {
        match code {
            "r" => Ok(Mode::R),
            "w" => Ok(Mode::W),
            "r_w" => Ok(Mode::RW),
            "wpulse" => Ok(Mode::WPulse),
            "r_wpulse" => Ok(Mode::RWPulse),
            _ => Err(RegisterMapError::InvalidMode {
                mode: code.to_string(),
            }),
        }
    }

    /// The canonical lowercase code, as used in the generated VHDL aggregate.
    pub fn code(&self) -> &'static str {
        match self {
            Mode::R => "r",
            Mode::W => "w",
            Mode::RW => "r_w",
            Mode::WPulse => "wpulse",
            Mode::RWPulse => "r_wpulse",
        }
    }

    /// Human-readable label, as shown in the HTML mode column.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::R => "Read",
            Mode::W => "Write",
            Mode::RW => "Read, Write",
            Mode::WPulse => "Write-pulse",
            Mode::RWPulse => "Read, Write-pulse",
        }
    }

    /// Semantic description of the PS/PL behavior.
    pub fn describe(&self) -> &'static str {
        match self {
            Mode::R => "PS can read a value that PL provides.",
            Mode::W => "PS can write a value that is available for PL usage.",
            Mode::RW => {
                "PS can write a value and read it back. \
                 The written value is available for PL usage."
            }
            Mode::WPulse => "PS can write a value that is asserted for one cycle in PL.",
            Mode::RWPulse => {
                "PS can read a value that PL provides. \
                 PS can write a value that is asserted for one cycle in PL."
            }
        }
    }
}

impl FromStr for Mode {
    type Err = RegisterMapError;

    fn from_str(s: &str) -> Result<Mode> {
        Mode::from_code(s)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_code(mode.code()).unwrap(), mode);
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let err = Mode::from_code("bogus").unwrap_err();
        assert_eq!(
            err,
            RegisterMapError::InvalidMode {
                mode: "bogus".to_string()
            }
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(Mode::RW.label(), "Read, Write");
        assert_eq!(Mode::WPulse.label(), "Write-pulse");
        assert_eq!(Mode::RWPulse.label(), "Read, Write-pulse");
    }
}
