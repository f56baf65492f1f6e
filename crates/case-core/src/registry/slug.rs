//! Derivación de slugs a partir de títulos de página.

use unicode_normalization::UnicodeNormalization;

/// Convierte un título en un identificador apto para URL.
///
/// Minúsculas ASCII; se descartan los caracteres que no sean alfanuméricos,
/// `_`, `-` o espacios; las rachas de espacios y guiones se colapsan en un
/// único `-`; se recortan `-` y `_` en los extremos. Se normaliza antes a
/// NFKD, así los acentos quedan como marcas combinantes y se descartan
/// (`Café` -> `cafe`); lo que no tiene forma ASCII se pierde.
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.nfkd() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else if c == '-' || c.is_whitespace() {
            pending_dash = true;
        }
    }
    out.trim_matches(|c| c == '-' || c == '_').to_string()
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn slugify_matches_expected_forms() {
        assert_eq!(slugify("Intro"), "intro");
        assert_eq!(slugify("SCS roles"), "scs-roles");
        assert_eq!(slugify("  Impact -- statement  "), "impact-statement");
        assert_eq!(slugify("What's next?"), "whats-next");
        assert_eq!(slugify("snake_case title"), "snake_case-title");
        assert_eq!(slugify("Café"), "cafe");
        assert_eq!(slugify("Résumé review"), "resume-review");
        assert_eq!(slugify("ﬁnal Ｓtep"), "final-step");
        assert_eq!(slugify("日本"), "");
        assert_eq!(slugify("!!!"), "");
    }
}
