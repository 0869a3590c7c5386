use std::path::Path;
use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

fn is_combining(c: char) -> bool {
    canonical_combining_class(c) != 0
}

/// Fold a display string into the key used for every artist comparison:
/// decomposed, stripped of combining marks, lowercased.
///
/// Lowercasing works on the whole string so context rules apply (a word-final
/// `Σ` becomes `ς`). It can reintroduce decomposable characters (`İ` → `i̇`),
/// so the decompose/strip step runs again afterwards to stay idempotent.
pub fn normalize(s: &str) -> String {
    let stripped: String = s.nfkd().filter(|c| !is_combining(*c)).collect();
    stripped
        .to_lowercase()
        .chars()
        .nfkd()
        .filter(|c| !is_combining(*c))
        .collect()
}

/// Comparison key for a directory path. Trailing dots are ignored for
/// directory identity on some filesystems (`E.L.I.` and `E.L.I` are the
/// same folder on Windows), so they are stripped before folding.
pub fn path_key(path: &Path) -> String {
    let joined: std::path::PathBuf = path.components().collect();
    let text = joined.to_string_lossy();
    normalize(text.trim_end_matches('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_diacritics_and_case() {
        assert_eq!(normalize("Sigur Rós"), "sigur ros");
        assert_eq!(normalize("Sigur Ros"), normalize("Sigur Rós"));
        assert_eq!(normalize("BJÖRK"), "bjork");
    }

    #[test]
    fn test_normalize_greek_final_sigma() {
        assert_eq!(normalize("ΜΑΡΚΟΣ"), "μαρκος");
        assert_eq!(normalize("ΜΑΡΚΟΣ"), normalize("Μάρκος"));
        assert_eq!(normalize("ΟΔΥΣΣΕΑΣ ΕΛΥΤΗΣ"), normalize("Οδυσσέας Ελύτης"));
    }

    #[test]
    fn test_normalize_composition_forms_match() {
        let composed = "Beyonc\u{e9}";
        let decomposed = "Beyonce\u{301}";
        assert_eq!(normalize(composed), normalize(decomposed));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for s in [
            "Sigur Rós",
            "İstanbul",
            "Mötley Crüe",
            "℃ Band",
            "ﬁlter",
            "Ⅻ",
            "",
            "   spaced   ",
            "Ǆemal",
            "ΜΑΡΚΟΣ",
        ] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_path_key_ignores_trailing_dots_and_case() {
        assert_eq!(
            path_key(Path::new("/music/E.L.I.")),
            path_key(Path::new("/music/e.l.i"))
        );
        assert_eq!(
            path_key(Path::new("/music/Drake/")),
            path_key(Path::new("/music/drake"))
        );
        assert_ne!(
            path_key(Path::new("/music/Drake")),
            path_key(Path::new("/other/Drake"))
        );
    }
}
