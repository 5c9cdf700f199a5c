use thiserror::Error;

use crate::case::Language;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("case {index} is out of range: {language} has {count} cases")]
    IndexOutOfRange {
        language: Language,
        index: usize,
        count: usize,
    },
    #[error("nothing to submit: the code buffer is empty")]
    EmptySubmission,
}
