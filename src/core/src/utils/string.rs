use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

pub struct StringUtils;

impl StringUtils {
    /// URL slug: lower case, diacritics stripped, whitespace runs to `-`, anything else outside `[a-z0-9-]` dropped
    pub fn slug(value: &str) -> String {
        let mut slug = String::with_capacity(value.len());
        let mut in_whitespace = false;

        let lowered = value.trim().to_lowercase();

        for c in lowered.nfd().filter(|c| !is_combining_mark(*c)) {
            if c.is_whitespace() {
                if !in_whitespace {
                    slug.push('-');
                }
                in_whitespace = true;
                continue;
            }

            in_whitespace = false;

            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                slug.push(c);
            }
        }

        slug
    }

    pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_folds_accents_and_spaces() {
        assert_eq!(StringUtils::slug("  Pelada de Quinta  "), "pelada-de-quinta");
        assert_eq!(StringUtils::slug("Futebol São João"), "futebol-sao-joao");
        assert_eq!(StringUtils::slug("Racha   do Zé!"), "racha-do-ze");
    }

    #[test]
    fn test_slug_strips_any_diacritic() {
        assert_eq!(StringUtils::slug("Ōsaka Fut"), "osaka-fut");
        assert_eq!(StringUtils::slug("Çağlar Řeka"), "caglar-reka");
        assert_eq!(StringUtils::slug("ÁGUA VIVA"), "agua-viva");
    }

    #[test]
    fn test_slug_keeps_digits_and_dashes() {
        assert_eq!(StringUtils::slug("Fut-7 2024"), "fut-7-2024");
        assert_eq!(StringUtils::slug(""), "");
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(StringUtils::contains_ignore_case("PAREDAO", "pare"));
        assert!(!StringUtils::contains_ignore_case("PAREDAO", "xyz"));
    }
}
