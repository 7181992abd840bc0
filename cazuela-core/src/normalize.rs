//! Text normalization for loose answer matching.
//!
//! The dialogues compare free-form Spanish answers ("Sí", "si", "SI") and menu
//! keywords case- and accent-insensitively. Decomposes with NFD, drops the
//! combining marks, lowercases, and trims.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Returns a lowercase, diacritic-stripped, trimmed copy of `s`.
///
/// Total over any string input; never fails.
pub fn normalize(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents_and_case() {
        assert_eq!(normalize("Sí"), "si");
        assert_eq!(normalize("SÍ"), "si");
        assert_eq!(normalize("NO"), "no");
        assert_eq!(normalize("Canción"), "cancion");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize("  sí  "), "si");
        assert_eq!(normalize("\topciones\n"), "opciones");
    }

    #[test]
    fn test_plain_ascii_unchanged() {
        assert_eq!(normalize("opciones"), "opciones");
        assert_eq!(normalize("1"), "1");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
