use nexus_types::{KeyAttributes, Tier};

/// Personal element appended to segment D.
///
/// Initials of the first two words of `name` when one is given, otherwise the
/// first two characters of the user hash fragment. Tier separator glyphs are
/// dropped from the initials so the key always splits into five parts; if
/// nothing is left the hash fallback applies.
pub fn personal_element(attributes: Option<&KeyAttributes>, fragment: &str) -> String {
    let initials: String = attributes
        .and_then(|attrs| attrs.name.as_deref())
        .map(|name| {
            name.split_whitespace()
                .take(2)
                .filter_map(|word| word.chars().next())
                .flat_map(char::to_uppercase)
                .filter(|c| !is_separator(*c))
                .collect()
        })
        .unwrap_or_default();

    if initials.is_empty() {
        fragment.chars().take(2).collect()
    } else {
        initials
    }
}

fn is_separator(c: char) -> bool {
    Tier::ALL.iter().any(|tier| tier.separator() == c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_from_name() {
        let attrs = KeyAttributes::with_name("Alice Smith");
        assert_eq!(personal_element(Some(&attrs), "4E40E8"), "AS");
    }

    #[test]
    fn test_only_first_two_words_count() {
        let attrs = KeyAttributes::with_name("  mary   jane watson ");
        assert_eq!(personal_element(Some(&attrs), "4E40E8"), "MJ");
    }

    #[test]
    fn test_single_word_name_gives_one_initial() {
        let attrs = KeyAttributes::with_name("Cher");
        assert_eq!(personal_element(Some(&attrs), "4E40E8"), "C");
    }

    #[test]
    fn test_falls_back_to_fragment() {
        assert_eq!(personal_element(None, "4E40E8"), "4E");
        assert_eq!(
            personal_element(Some(&KeyAttributes::default()), "4E40E8"),
            "4E"
        );
        let blank = KeyAttributes::with_name("   ");
        assert_eq!(personal_element(Some(&blank), "4E40E8"), "4E");
    }

    #[test]
    fn test_separator_initials_are_dropped() {
        let attrs = KeyAttributes::with_name("-dash Smith");
        assert_eq!(personal_element(Some(&attrs), "4E40E8"), "S");

        let attrs = KeyAttributes::with_name("Alice ⟡");
        assert_eq!(personal_element(Some(&attrs), "4E40E8"), "A");

        for glyph in ["-", ":", "∞", "⟡"] {
            let attrs = KeyAttributes::with_name(format!("{glyph}x {glyph}y"));
            assert_eq!(personal_element(Some(&attrs), "4E40E8"), "4E");
        }
    }
}
