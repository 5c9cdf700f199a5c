use crate::case::Language;

/// How a submission is compared against a case's expected answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// The trimmed submission must equal the answer character for character.
    ExactMatch,
    /// The trimmed submission must contain the required declaration somewhere.
    ContainsDeclaration,
}

impl Strategy {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Html | Language::Js => Strategy::ExactMatch,
            Language::Css => Strategy::ContainsDeclaration,
        }
    }

    pub fn check(self, expected: &str, submitted: &str) -> bool {
        match self {
            Strategy::ExactMatch => exact_match(expected, submitted),
            Strategy::ContainsDeclaration => contains_declaration(expected, submitted),
        }
    }
}

pub fn validate(language: Language, expected: &str, submitted: &str) -> bool {
    Strategy::for_language(language).check(expected, submitted)
}

fn exact_match(expected: &str, submitted: &str) -> bool {
    submitted.trim() == expected.trim()
}

fn contains_declaration(declaration: &str, submitted: &str) -> bool {
    let declaration = declaration.trim();
    !declaration.is_empty() && submitted.trim().contains(declaration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_exact_match_ignores_surrounding_whitespace() {
        assert!(validate(Language::Html, "<p>Hello World</p>", "  <p>Hello World</p>\n\n"));
    }

    #[test]
    fn test_html_is_case_sensitive() {
        assert!(!validate(Language::Html, "<p>Hello World</p>", "<p>hello world</p>"));
    }

    #[test]
    fn test_html_rejects_inner_whitespace_changes() {
        assert!(!validate(Language::Html, "<p>Hello World</p>", "<p>Hello  World</p>"));
        assert!(!validate(Language::Html, "<p>Hello World</p>", "<p> Hello World</p>"));
    }

    #[test]
    fn test_html_rejects_extra_markup() {
        assert!(!validate(
            Language::Html,
            "<p>Hello World</p>",
            "<div><p>Hello World</p></div>"
        ));
    }

    #[test]
    fn test_js_exact_match_multiline() {
        let expected = "const result = document.getElementById('result');\nresult.innerHTML = 2 + 2;";
        assert!(validate(Language::Js, expected, &format!("\n{expected}\n")));
        assert!(!validate(
            Language::Js,
            expected,
            "const result = document.getElementById('result');\nresult.innerHTML = 4;"
        ));
    }

    #[test]
    fn test_css_contains_declaration_anywhere() {
        assert!(validate(
            Language::Css,
            "font-size: 24px",
            ".big { font-size: 24px; margin: 0; }"
        ));
        assert!(validate(
            Language::Css,
            "font-size: 24px",
            "p { margin: 0; }\n.anything {\n  font-size: 24px;\n}"
        ));
    }

    #[test]
    fn test_css_requires_exact_declaration_text() {
        assert!(!validate(Language::Css, "font-size: 24px", ".big { font-size:24px; }"));
        assert!(!validate(Language::Css, "font-size: 24px", ".big { font-size: 20px; }"));
        assert!(!validate(Language::Css, "font-size: 24px", ".big {\n\n}"));
    }

    #[test]
    fn test_css_empty_declaration_never_matches() {
        assert!(!validate(Language::Css, "  ", ".big { color: red; }"));
    }

    #[test]
    fn test_strategy_per_language() {
        assert_eq!(Strategy::for_language(Language::Html), Strategy::ExactMatch);
        assert_eq!(Strategy::for_language(Language::Js), Strategy::ExactMatch);
        assert_eq!(Strategy::for_language(Language::Css), Strategy::ContainsDeclaration);
    }
}
