use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DuocalError;

/// Event categories, each with the color used for its dots and chips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "Quality Time")]
    QualityTime,
    #[serde(rename = "Date Night")]
    DateNight,
    #[serde(rename = "Travel")]
    Travel,
    #[serde(rename = "Family & Friends")]
    FamilyAndFriends,
    #[serde(rename = "Errands")]
    Errands,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::QualityTime,
        Category::DateNight,
        Category::Travel,
        Category::FamilyAndFriends,
        Category::Errands,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::QualityTime => "Quality Time",
            Category::DateNight => "Date Night",
            Category::Travel => "Travel",
            Category::FamilyAndFriends => "Family & Friends",
            Category::Errands => "Errands",
        }
    }

    /// Hex color (`#rrggbb`)
    pub fn color(self) -> &'static str {
        match self {
            Category::QualityTime => "#a78bfa",
            Category::DateNight => "#fb7185",
            Category::Travel => "#22d3ee",
            Category::FamilyAndFriends => "#f472b6",
            Category::Errands => "#60a5fa",
        }
    }

    /// Color as an RGB triple, for terminals.
    pub fn rgb(self) -> (u8, u8, u8) {
        let hex = &self.color()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DuocalError;

    /// Accepts the label in any case, with or without spaces/dashes ("date-night", "Date Night").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalize = |v: &str| {
            v.chars()
                .filter(|c| c.is_alphanumeric() || *c == '&')
                .flat_map(char::to_lowercase)
                .collect::<String>()
                .replace('&', "and")
        };
        let wanted = normalize(s);

        Category::ALL
            .into_iter()
            .find(|c| normalize(c.label()) == wanted)
            .ok_or_else(|| DuocalError::InvalidValue {
                field: "category",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_lenient_about_formatting() {
        assert_eq!("date night".parse::<Category>().unwrap(), Category::DateNight);
        assert_eq!("Date-Night".parse::<Category>().unwrap(), Category::DateNight);
        assert_eq!(
            "family and friends".parse::<Category>().unwrap(),
            Category::FamilyAndFriends
        );
        assert_eq!(
            "Family & Friends".parse::<Category>().unwrap(),
            Category::FamilyAndFriends
        );
        assert!("work".parse::<Category>().is_err());
    }

    #[test]
    fn rgb_matches_hex() {
        assert_eq!(Category::QualityTime.rgb(), (0xa7, 0x8b, 0xfa));
        assert_eq!(Category::Errands.rgb(), (0x60, 0xa5, 0xfa));
    }

    #[test]
    fn serializes_with_label() {
        let json = serde_json::to_string(&Category::FamilyAndFriends).unwrap();
        assert_eq!(json, r#""Family & Friends""#);
    }
}
