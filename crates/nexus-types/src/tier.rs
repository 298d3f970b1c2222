use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Membership tier.
///
/// The tier table is fixed at compile time. Every key carries its tier three
/// times over: the 3-char prefix, the separator glyph, and the rank letter at
/// the head of segment B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Archivist,
    Orchestrator,
    Godfather,
    Entity,
}

impl Tier {
    /// Table order. Decoding scans tiers in this order and takes the first match.
    pub const ALL: [Tier; 4] = [
        Tier::Archivist,
        Tier::Orchestrator,
        Tier::Godfather,
        Tier::Entity,
    ];

    /// 1-based rank, bounded to 26 so it maps onto a single Latin letter.
    pub const fn rank(self) -> u8 {
        match self {
            Tier::Archivist => 1,
            Tier::Orchestrator => 2,
            Tier::Godfather => 3,
            Tier::Entity => 4,
        }
    }

    /// Uppercase table key, e.g. `ARCHIVIST`.
    pub const fn name(self) -> &'static str {
        match self {
            Tier::Archivist => "ARCHIVIST",
            Tier::Orchestrator => "ORCHESTRATOR",
            Tier::Godfather => "GODFATHER",
            Tier::Entity => "ENTITY",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Tier::Archivist => "Archivist",
            Tier::Orchestrator => "Orchestrator",
            Tier::Godfather => "Godfather",
            Tier::Entity => "Entity",
        }
    }

    pub const fn separator(self) -> char {
        match self {
            Tier::Archivist => '-',
            Tier::Orchestrator => ':',
            Tier::Godfather => '∞',
            Tier::Entity => '⟡',
        }
    }

    pub const fn prefix(self) -> &'static str {
        match self {
            Tier::Archivist => "ARK",
            Tier::Orchestrator => "ORC",
            Tier::Godfather => "GOD",
            Tier::Entity => "NXS",
        }
    }

    /// Case-insensitive lookup by table key. Surrounding whitespace is not
    /// stripped, so `" archivist "` is unknown.
    pub fn from_name(name: &str) -> Option<Tier> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.name().eq_ignore_ascii_case(name))
    }

    pub fn from_rank(rank: u8) -> Option<Tier> {
        Tier::ALL.into_iter().find(|tier| tier.rank() == rank)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTier(pub String);

impl fmt::Display for UnknownTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown tier: {}", self.0)
    }
}

impl std::error::Error for UnknownTier {}

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::from_name(s).ok_or_else(|| UnknownTier(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_unambiguous() {
        let ranks: HashSet<u8> = Tier::ALL.iter().map(|t| t.rank()).collect();
        let prefixes: HashSet<&str> = Tier::ALL.iter().map(|t| t.prefix()).collect();
        let separators: HashSet<char> = Tier::ALL.iter().map(|t| t.separator()).collect();

        assert_eq!(ranks.len(), Tier::ALL.len());
        assert_eq!(prefixes.len(), Tier::ALL.len());
        assert_eq!(separators.len(), Tier::ALL.len());

        for tier in Tier::ALL {
            assert!((1..=26).contains(&tier.rank()));
            assert_eq!(tier.prefix().chars().count(), 3);
            for other in Tier::ALL {
                assert!(!other.prefix().contains(tier.separator()));
            }
        }
    }

    #[test]
    fn test_ranks_follow_table_order() {
        let ranks: Vec<u8> = Tier::ALL.iter().map(|t| t.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(Tier::from_name("Archivist"), Some(Tier::Archivist));
        assert_eq!(Tier::from_name("godfather"), Some(Tier::Godfather));
        assert_eq!(Tier::from_name("ENTITY"), Some(Tier::Entity));
        assert_eq!(Tier::from_name("ROOKIE"), None);
        assert_eq!(Tier::from_name(""), None);
    }

    #[test]
    fn test_from_name_does_not_trim() {
        assert_eq!(Tier::from_name(" archivist "), None);
        assert_eq!(Tier::from_name("Entity\n"), None);
        assert!(" godfather".parse::<Tier>().is_err());
    }

    #[test]
    fn test_from_str_reports_unknown_name() {
        let err = "ROOKIE".parse::<Tier>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown tier: ROOKIE");
    }

    #[test]
    fn test_serde_uses_table_key() {
        let json = serde_json::to_string(&Tier::Orchestrator).unwrap();
        assert_eq!(json, "\"ORCHESTRATOR\"");

        let tier: Tier = serde_json::from_str("\"ENTITY\"").unwrap();
        assert_eq!(tier, Tier::Entity);
    }
}
