use crate::case::{Case, Language, Sources};

/// Mutable state of one game: which case is active and what the player has typed.
#[derive(Debug, Clone)]
pub struct Session {
    case: Case,
    language: Language,
    case_index: usize,
    buffers: Sources,
    initial: Sources,
    current_file: Language,
    solved: bool,
    hint_visible: bool,
}

impl Session {
    pub fn new(language: Language, case_index: usize, case: &Case) -> Self {
        Session {
            case: case.clone(),
            language,
            case_index,
            buffers: case.starting_code.clone(),
            initial: case.starting_code.clone(),
            current_file: language,
            solved: false,
            hint_visible: false,
        }
    }

    /// Re-initializes the session for another case.
    pub fn load(&mut self, language: Language, case_index: usize, case: &Case) {
        *self = Session::new(language, case_index, case);
    }

    pub fn case(&self) -> &Case {
        &self.case
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn case_index(&self) -> usize {
        self.case_index
    }

    pub fn current_file(&self) -> Language {
        self.current_file
    }

    pub fn set_current_file(&mut self, kind: Language) {
        self.current_file = kind;
    }

    /// The buffer under test, i.e. the one for the session's language.
    pub fn code(&self) -> &str {
        self.buffers.get(self.language)
    }

    pub fn buffer(&self, kind: Language) -> &str {
        self.buffers.get(kind)
    }

    pub fn set_code(&mut self, text: String) {
        *self.buffers.get_mut(self.language) = text;
    }

    pub fn is_editable(&self, kind: Language) -> bool {
        kind == self.language
    }

    pub fn restore_initial(&mut self) {
        self.buffers = self.initial.clone();
    }

    pub fn solved(&self) -> bool {
        self.solved
    }

    pub fn set_solved(&mut self, solved: bool) {
        self.solved = solved;
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn toggle_hint(&mut self) -> bool {
        self.hint_visible = !self.hint_visible;
        self.hint_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn css_case() -> Case {
        Case {
            title: "Big".into(),
            description: "Make it big".into(),
            starting_code: Sources {
                html: "<p class=\"big\">x</p>".into(),
                css: ".big {\n\n}".into(),
                js: String::new(),
            },
            expected_answer: "font-size: 24px".into(),
            hint: "use font-size".into(),
            solution: None,
        }
    }

    #[test]
    fn test_new_session_starts_on_language_file() {
        let session = Session::new(Language::Css, 0, &css_case());
        assert_eq!(session.current_file(), Language::Css);
        assert_eq!(session.code(), ".big {\n\n}");
        assert!(!session.solved());
        assert!(!session.hint_visible());
    }

    #[test]
    fn test_set_code_only_touches_language_buffer() {
        let mut session = Session::new(Language::Css, 0, &css_case());
        session.set_current_file(Language::Html);
        session.set_code(".big { font-size: 24px; }".into());
        assert_eq!(session.buffer(Language::Css), ".big { font-size: 24px; }");
        assert_eq!(session.buffer(Language::Html), "<p class=\"big\">x</p>");
        assert!(!session.is_editable(Language::Html));
    }

    #[test]
    fn test_restore_initial() {
        let mut session = Session::new(Language::Css, 0, &css_case());
        session.set_code("junk".into());
        session.restore_initial();
        assert_eq!(session.code(), ".big {\n\n}");
    }

    #[test]
    fn test_load_clears_flags() {
        let mut session = Session::new(Language::Css, 0, &css_case());
        session.set_solved(true);
        session.toggle_hint();
        session.set_current_file(Language::Html);
        session.load(Language::Css, 1, &css_case());
        assert_eq!(session.case_index(), 1);
        assert!(!session.solved());
        assert!(!session.hint_visible());
        assert_eq!(session.current_file(), Language::Css);
    }
}
