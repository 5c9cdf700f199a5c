use anyhow::{bail, Result};

use super::types::{Case, CaseFile, Language};
use crate::error::GameError;

/// Read-only table of cases, one non-empty list per language.
#[derive(Debug, Clone)]
pub struct Catalog {
    html: Vec<Case>,
    css: Vec<Case>,
    js: Vec<Case>,
}

impl Catalog {
    pub fn from_files(files: impl IntoIterator<Item = CaseFile>) -> Result<Self> {
        let mut catalog = Catalog {
            html: Vec::new(),
            css: Vec::new(),
            js: Vec::new(),
        };
        for file in files {
            catalog.list_mut(file.language).extend(file.cases);
        }
        for language in Language::ALL {
            if catalog.list(language).is_empty() {
                bail!("no cases defined for {}", language);
            }
        }
        Ok(catalog)
    }

    fn list(&self, language: Language) -> &[Case] {
        match language {
            Language::Html => &self.html,
            Language::Css => &self.css,
            Language::Js => &self.js,
        }
    }

    fn list_mut(&mut self, language: Language) -> &mut Vec<Case> {
        match language {
            Language::Html => &mut self.html,
            Language::Css => &mut self.css,
            Language::Js => &mut self.js,
        }
    }

    pub fn count(&self, language: Language) -> usize {
        self.list(language).len()
    }

    pub fn get_case(&self, language: Language, index: usize) -> Result<&Case, GameError> {
        let cases = self.list(language);
        cases.get(index).ok_or(GameError::IndexOutOfRange {
            language,
            index,
            count: cases.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::load_builtin;
    use crate::validator::validate;

    fn all_cases(catalog: &Catalog, language: Language) -> Vec<&Case> {
        (0..catalog.count(language))
            .map(|i| catalog.get_case(language, i).unwrap())
            .collect()
    }

    #[test]
    fn test_get_case_out_of_range() {
        let catalog = load_builtin().unwrap();
        let err = catalog.get_case(Language::Js, 3).unwrap_err();
        assert_eq!(
            err,
            GameError::IndexOutOfRange {
                language: Language::Js,
                index: 3,
                count: 3,
            }
        );
    }

    #[test]
    fn test_every_expected_answer_validates() {
        let catalog = load_builtin().unwrap();
        for language in Language::ALL {
            for case in all_cases(&catalog, language) {
                assert!(
                    validate(language, &case.expected_answer, &case.expected_answer),
                    "{}: {}",
                    language,
                    case.title
                );
            }
        }
    }

    #[test]
    fn test_every_full_solution_validates() {
        let catalog = load_builtin().unwrap();
        for language in Language::ALL {
            for case in all_cases(&catalog, language) {
                if let Some(solution) = &case.solution {
                    assert!(validate(language, &case.expected_answer, solution), "{}", case.title);
                }
            }
        }
    }

    #[test]
    fn test_starting_code_does_not_already_solve_the_case() {
        let catalog = load_builtin().unwrap();
        for language in Language::ALL {
            for case in all_cases(&catalog, language) {
                let start = case.starting_code.get(language);
                assert!(!validate(language, &case.expected_answer, start), "{}", case.title);
            }
        }
    }

    #[test]
    fn test_empty_language_rejected() {
        let files = vec![CaseFile {
            language: Language::Html,
            cases: Vec::new(),
        }];
        assert!(Catalog::from_files(files).is_err());
    }
}
