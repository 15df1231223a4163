//! Pyrometric cone reference: the fixed cone ladder and temperature table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A pyrometric cone on the ladder from 04 (coolest) to 10 (hottest).
///
/// Cones are ordinal labels, not numbers: "04" and "4" are different cones.
/// Serialized as the label string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cone {
    #[serde(rename = "04")]
    C04,
    #[serde(rename = "03")]
    C03,
    #[serde(rename = "02")]
    C02,
    #[serde(rename = "01")]
    C01,
    #[serde(rename = "1")]
    C1,
    #[serde(rename = "2")]
    C2,
    #[serde(rename = "3")]
    C3,
    #[serde(rename = "4")]
    C4,
    #[serde(rename = "5")]
    C5,
    #[default]
    #[serde(rename = "6")]
    C6,
    #[serde(rename = "7")]
    C7,
    #[serde(rename = "8")]
    C8,
    #[serde(rename = "9")]
    C9,
    #[serde(rename = "10")]
    C10,
}

impl Cone {
    /// Every cone, coolest first.
    pub const ALL: [Self; 14] = [
        Self::C04,
        Self::C03,
        Self::C02,
        Self::C01,
        Self::C1,
        Self::C2,
        Self::C3,
        Self::C4,
        Self::C5,
        Self::C6,
        Self::C7,
        Self::C8,
        Self::C9,
        Self::C10,
    ];

    /// The label as written on the cone, e.g. `"04"` or `"6"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::C04 => "04",
            Self::C03 => "03",
            Self::C02 => "02",
            Self::C01 => "01",
            Self::C1 => "1",
            Self::C2 => "2",
            Self::C3 => "3",
            Self::C4 => "4",
            Self::C5 => "5",
            Self::C6 => "6",
            Self::C7 => "7",
            Self::C8 => "8",
            Self::C9 => "9",
            Self::C10 => "10",
        }
    }

    /// Approximate end temperature in °F. Reference data for program
    /// defaults and display; the suggestion engine never reads it.
    pub fn temperature_f(self) -> u32 {
        match self {
            Self::C04 => 1830,
            Self::C03 => 1850,
            Self::C02 => 1870,
            Self::C01 => 1890,
            Self::C1 => 1910,
            Self::C2 => 1920,
            Self::C3 => 1930,
            Self::C4 => 1945,
            Self::C5 => 1975,
            Self::C6 => 1995,
            Self::C7 => 2015,
            Self::C8 => 2035,
            Self::C9 => 2055,
            Self::C10 => 2075,
        }
    }

    /// The label's digits read as an integer, as the suggestion engine
    /// compares cones. Leading-zero labels collapse ("04" reads as 4,
    /// "01" and "1" both read as 1).
    pub fn ordinal_value(self) -> i32 {
        match self {
            Self::C04 => 4,
            Self::C03 => 3,
            Self::C02 => 2,
            Self::C01 | Self::C1 => 1,
            Self::C2 => 2,
            Self::C3 => 3,
            Self::C4 => 4,
            Self::C5 => 5,
            Self::C6 => 6,
            Self::C7 => 7,
            Self::C8 => 8,
            Self::C9 => 9,
            Self::C10 => 10,
        }
    }
}

impl fmt::Display for Cone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Cone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cone| cone.label() == s)
            .ok_or_else(|| format!("unknown cone '{s}' (expected one of 04, 03, 02, 01, 1 through 10)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_spans_1830_to_2075() {
        assert_eq!(Cone::C04.temperature_f(), 1830);
        assert_eq!(Cone::C6.temperature_f(), 1995);
        assert_eq!(Cone::C10.temperature_f(), 2075);
    }

    #[test]
    fn labels_parse_back() {
        for cone in Cone::ALL {
            assert_eq!(cone.label().parse::<Cone>().unwrap(), cone);
        }
    }

    #[test]
    fn leading_zero_labels_are_distinct_cones() {
        assert_ne!("04".parse::<Cone>().unwrap(), "4".parse::<Cone>().unwrap());
    }

    #[test]
    fn ordinal_value_collapses_leading_zeros() {
        // The suggestion engine reads labels numerically, so 04 compares as 4
        // and 01 compares the same as 1.
        assert_eq!(Cone::C04.ordinal_value(), 4);
        assert_eq!(Cone::C01.ordinal_value(), Cone::C1.ordinal_value());
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!("11".parse::<Cone>().is_err());
        assert!("".parse::<Cone>().is_err());
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Cone::C04).unwrap();
        assert_eq!(json, "\"04\"");
        let back: Cone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Cone::C04);
    }
}
