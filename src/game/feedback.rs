use crate::case::Language;
use crate::validator::describe_declaration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
    Hint,
    Notice,
}

/// A message for the presentation layer to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub title: String,
    pub body: String,
}

impl Feedback {
    pub fn new(kind: FeedbackKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Feedback {
            kind,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn correct(language: Language, submitted: &str, expected: &str) -> Self {
        let praise = match language {
            Language::Html => format!("Great job! You correctly added: {}", submitted),
            Language::Css => format!(
                "Excellent! You applied: {}\nThat {}.",
                submitted,
                describe_declaration(expected)
            ),
            Language::Js => format!("Well done! Your code works: {}", submitted),
        };
        Feedback::new(
            FeedbackKind::Success,
            "✓ Correct!",
            format!("{}\nMove on to the next case!", praise),
        )
    }

    pub fn incorrect(language: Language) -> Self {
        let advice = match language {
            Language::Html => "Check the HTML structure and try again.",
            Language::Css => "Check the CSS property and value.",
            Language::Js => "Check the JavaScript syntax.",
        };
        Feedback::new(
            FeedbackKind::Error,
            "Try Again",
            format!("{}\nAsk for a hint if you are stuck.", advice),
        )
    }

    pub fn empty_submission() -> Self {
        Feedback::new(
            FeedbackKind::Error,
            "Empty Input",
            "Please enter your solution before submitting.",
        )
    }

    pub fn hint(text: &str) -> Self {
        Feedback::new(FeedbackKind::Hint, "Hint", text)
    }
}

/// Receives feedback from the controller. The terminal UI renders it; tests record it.
pub trait FeedbackSink {
    fn emit(&mut self, feedback: Feedback);
    fn clear(&mut self);
}
