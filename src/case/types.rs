use std::fmt;

use serde::Deserialize;

/// A challenge language, which is also the kind of file a buffer holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Html,
    Css,
    Js,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Html, Language::Css, Language::Js];

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Html => "html",
            Language::Css => "css",
            Language::Js => "js",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Js => "JavaScript",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Language::Html => Language::Css,
            Language::Css => Language::Js,
            Language::Js => Language::Html,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Language::Html => Language::Js,
            Language::Css => Language::Html,
            Language::Js => Language::Css,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One text per file kind. Used for a case's starting code and for the
/// live editor buffers of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Sources {
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub css: String,
    #[serde(default)]
    pub js: String,
}

impl Sources {
    pub fn get(&self, kind: Language) -> &str {
        match kind {
            Language::Html => &self.html,
            Language::Css => &self.css,
            Language::Js => &self.js,
        }
    }

    pub fn get_mut(&mut self, kind: Language) -> &mut String {
        match kind {
            Language::Html => &mut self.html,
            Language::Css => &mut self.css,
            Language::Js => &mut self.js,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub starting_code: Sources,
    /// Exact text for html/js, the required `property: value` declaration for css.
    pub expected_answer: String,
    pub hint: String,
    #[serde(default)]
    pub solution: Option<String>,
}

/// On-disk shape of one case file: a language and its cases in order.
#[derive(Debug, Deserialize)]
pub struct CaseFile {
    pub language: Language,
    #[serde(rename = "case", default)]
    pub cases: Vec<Case>,
}
