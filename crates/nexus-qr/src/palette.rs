/// Main QR colors by tier key. Closed set; anything else takes the fallback.
const TIER_COLORS: [(&str, &str); 4] = [
    ("ARCHIVIST", "#3A86FF"),
    ("ORCHESTRATOR", "#8338EC"),
    ("GODFATHER", "#FF006E"),
    ("ENTITY", "#FFBE0B"),
];

pub const FALLBACK_COLOR: &str = "#10b981";

pub fn tier_color(tier_name: &str) -> Option<&'static str> {
    TIER_COLORS
        .iter()
        .find(|(name, _)| *name == tier_name)
        .map(|(_, color)| *color)
}

/// Visual density of the QR pattern: twice the rank, capped at 10.
pub fn pattern_complexity(tier_level: u8) -> u8 {
    tier_level.saturating_mul(2).min(10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_types::Tier;

    #[test]
    fn test_every_tier_has_a_color() {
        for tier in Tier::ALL {
            assert!(tier_color(tier.name()).is_some(), "{} has no color", tier);
        }
        assert_eq!(tier_color("GODFATHER"), Some("#FF006E"));
    }

    #[test]
    fn test_unknown_names_have_no_color() {
        assert_eq!(tier_color("ROOKIE"), None);
        // Lookup is by exact table key.
        assert_eq!(tier_color("Godfather"), None);
    }

    #[test]
    fn test_pattern_complexity_caps_at_ten() {
        assert_eq!(pattern_complexity(1), 2);
        assert_eq!(pattern_complexity(3), 6);
        assert_eq!(pattern_complexity(5), 10);
        assert_eq!(pattern_complexity(26), 10);
        assert_eq!(pattern_complexity(u8::MAX), 10);
    }
}
