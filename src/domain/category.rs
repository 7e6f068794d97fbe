use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The five skill buckets plotted on the radar chart.
///
/// Declaration order is the canonical order: every tie between categories
/// resolves to the one declared first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkillCategory {
    Practical,
    Creative,
    Analytical,
    Technical,
    Social,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Practical,
        SkillCategory::Creative,
        SkillCategory::Analytical,
        SkillCategory::Technical,
        SkillCategory::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Practical => "Practical",
            SkillCategory::Creative => "Creative",
            SkillCategory::Analytical => "Analytical",
            SkillCategory::Technical => "Technical",
            SkillCategory::Social => "Social",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown skill category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for SkillCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl Serialize for SkillCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SkillCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_matches_ord() {
        let mut sorted = SkillCategory::ALL;
        sorted.sort();
        assert_eq!(sorted, SkillCategory::ALL);
        assert!(SkillCategory::Practical < SkillCategory::Social);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("creative".parse::<SkillCategory>(), Ok(SkillCategory::Creative));
        assert_eq!(" SOCIAL ".parse::<SkillCategory>(), Ok(SkillCategory::Social));
        assert!("Musical".parse::<SkillCategory>().is_err());
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&SkillCategory::Technical).unwrap();
        assert_eq!(json, "\"Technical\"");
        let back: SkillCategory = serde_json::from_str("\"analytical\"").unwrap();
        assert_eq!(back, SkillCategory::Analytical);
    }
}
