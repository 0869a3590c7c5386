/// Collaboration separators, checked in this order. The first listed
/// separator present anywhere in the credit wins, regardless of where it
/// appears in the string, so longer tokens come before their substrings.
/// Case variants are spelled out; matching is case-sensitive.
pub const COLLABORATION_SEPARATORS: [&str; 23] = [
    " feat. ",
    " feat ",
    " featuring ",
    " Featuring ",
    " ft. ",
    " Ft. ",
    " ft ",
    " Ft ",
    " vs. ",
    " vs ",
    " Vs. ",
    " Vs ",
    " VS ",
    " with ",
    " With ",
    " and ",
    " And ",
    " & ",
    " \u{b7} ",
    " x ",
    " X ",
    " + ",
    ", ",
];

/// Extract the primary artist from a collaboration credit
/// ("Artist A feat. Artist B" → "Artist A").
pub fn extract_primary(artist_raw: &str) -> &str {
    COLLABORATION_SEPARATORS
        .iter()
        .find_map(|sep| artist_raw.split_once(sep))
        .map(|(primary, _)| primary)
        .unwrap_or(artist_raw)
        .trim()
}

/// Number of uppercase letters, used to prefer "proper" casing between
/// spellings of the same artist.
pub fn uppercase_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_uppercase()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_primary_common_credits() {
        assert_eq!(extract_primary("Artist A & Artist B"), "Artist A");
        assert_eq!(extract_primary("Artist A feat. Artist B"), "Artist A");
        assert_eq!(extract_primary("Solo Artist"), "Solo Artist");
        assert_eq!(extract_primary("  Solo Artist  "), "Solo Artist");
        assert_eq!(extract_primary("Tiësto Vs. Someone"), "Tiësto");
        assert_eq!(extract_primary("A \u{b7} B"), "A");
        assert_eq!(extract_primary("Jay-Z, Kanye West"), "Jay-Z");
    }

    #[test]
    fn test_extract_primary_uses_list_order_not_position() {
        // ", " appears first in the text but " & " is listed earlier.
        assert_eq!(extract_primary("A, B & C"), "A, B");
        // " feat. " outranks " x " even though " x " comes first.
        assert_eq!(extract_primary("A x B feat. C"), "A x B");
    }

    #[test]
    fn test_extract_primary_is_case_sensitive_per_variant() {
        assert_eq!(extract_primary("A FEAT. B"), "A FEAT. B");
        assert_eq!(extract_primary("A Feat. B"), "A Feat. B");
        assert_eq!(extract_primary("A Featuring B"), "A");
    }

    #[test]
    fn test_extract_primary_requires_surrounding_spaces() {
        assert_eq!(extract_primary("Simon&Garfunkel"), "Simon&Garfunkel");
        assert_eq!(extract_primary("Xzibit"), "Xzibit");
        assert_eq!(extract_primary("Andrew Bird"), "Andrew Bird");
    }

    #[test]
    fn test_uppercase_count() {
        assert_eq!(uppercase_count("abc"), 0);
        assert_eq!(uppercase_count("ABC"), 3);
        assert_eq!(uppercase_count("Sigur Rós"), 2);
        assert_eq!(uppercase_count("ÉLAN"), 4);
    }
}
