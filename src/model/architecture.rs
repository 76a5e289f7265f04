//! GPU microarchitecture codenames.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::gpu_record::{FormatError, ValidationError};

/// Closed set of GPU microarchitectures a catalog record can carry.
///
/// Declaration order is significant: the discriminants are stable and
/// [`Architecture::Turing`] is the base variant used by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Architecture {
    #[default]
    Turing = 0,
    Ampere = 1,
    AdaLovelace = 2,
    Hopper = 3,
    Blackwell = 4,
}

impl Architecture {
    /// Every variant, in declaration order.
    pub const ALL: [Architecture; 5] = [
        Architecture::Turing,
        Architecture::Ampere,
        Architecture::AdaLovelace,
        Architecture::Hopper,
        Architecture::Blackwell,
    ];

    /// Canonical variant name, as used in the text format.
    pub const fn name(self) -> &'static str {
        match self {
            Architecture::Turing => "Turing",
            Architecture::Ampere => "Ampere",
            Architecture::AdaLovelace => "AdaLovelace",
            Architecture::Hopper => "Hopper",
            Architecture::Blackwell => "Blackwell",
        }
    }
}

impl Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Architecture {
    type Err = FormatError;

    /// Matches a variant name case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Architecture::ALL
            .into_iter()
            .find(|arch| arch.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FormatError::Architecture(s.to_string()))
    }
}

impl TryFrom<i32> for Architecture {
    type Error = ValidationError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Architecture::ALL
            .into_iter()
            .find(|arch| *arch as i32 == code)
            .ok_or(ValidationError::UnknownArchitecture(code))
    }
}
