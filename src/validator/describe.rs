/// Plain English for a `property: value` declaration, used in CSS feedback.
pub fn describe_declaration(declaration: &str) -> String {
    let declaration = declaration.trim().trim_end_matches(';');
    let Some((property, value)) = declaration.split_once(':') else {
        return fallback();
    };
    let value = value.trim();

    match property.trim() {
        "background-color" => format!("sets the background color to {}", value),
        "font-size" => format!("makes the text {} in size", value),
        "text-align" => format!("aligns the text to the {}", value),
        "color" => format!("sets the text color to {}", value),
        "font-weight" => format!("makes the text {}", value),
        "margin" => format!("adds {} of space around the element", value),
        "border" => format!("adds a {} border around the element", value),
        "border-radius" => format!("makes the corners round with a radius of {}", value),
        "display" if value == "none" => "hides the element".to_string(),
        "display" => "shows the element".to_string(),
        "padding" => format!("adds {} of space inside the element", value),
        _ => fallback(),
    }
}

fn fallback() -> String {
    "applies the specified styling to the element".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_properties() {
        assert_eq!(describe_declaration("font-size: 24px"), "makes the text 24px in size");
        assert_eq!(describe_declaration("color: red;"), "sets the text color to red");
        assert_eq!(describe_declaration("font-weight: bold"), "makes the text bold");
    }

    #[test]
    fn test_display_depends_on_value() {
        assert_eq!(describe_declaration("display: none"), "hides the element");
        assert_eq!(describe_declaration("display: flex"), "shows the element");
    }

    #[test]
    fn test_unknown_or_malformed() {
        assert_eq!(
            describe_declaration("cursor: pointer"),
            "applies the specified styling to the element"
        );
        assert_eq!(
            describe_declaration("not a declaration"),
            "applies the specified styling to the element"
        );
    }
}
