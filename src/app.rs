use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use tracing::warn;
use tui_textarea::{CursorMove, TextArea};

use crate::case::{Catalog, Language};
use crate::error::GameError;
use crate::game::{Controller, Direction, Feedback, FeedbackKind, FeedbackSink, Navigation};

pub enum GameState {
    TitleScreen,
    Instructions,
    LanguageSelect,
    Playing,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    NewGame,
    Instructions,
    Quit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 3] = [MenuOption::NewGame, MenuOption::Instructions, MenuOption::Quit];

    fn next(self) -> Self {
        match self {
            MenuOption::NewGame => MenuOption::Instructions,
            MenuOption::Instructions => MenuOption::Quit,
            MenuOption::Quit => MenuOption::NewGame,
        }
    }

    fn prev(self) -> Self {
        match self {
            MenuOption::NewGame => MenuOption::Quit,
            MenuOption::Instructions => MenuOption::NewGame,
            MenuOption::Quit => MenuOption::Instructions,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::NewGame => "  NEW GAME  ",
            MenuOption::Instructions => "  INSTRUCTIONS  ",
            MenuOption::Quit => "  QUIT  ",
        }
    }
}

/// Everything the player can ask for while a case is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Submit,
    Hint,
    Reset,
    Next,
    Prev,
    SwitchFile(Language),
    CycleFile,
    Menu,
    Quit,
}

/// Feedback as the terminal shows it: the results panel and the hint panel.
#[derive(Debug, Default)]
pub struct Panel {
    pub results: Option<Feedback>,
    pub hint: Option<Feedback>,
}

impl FeedbackSink for Panel {
    fn emit(&mut self, feedback: Feedback) {
        match feedback.kind {
            FeedbackKind::Hint => self.hint = Some(feedback),
            _ => self.results = Some(feedback),
        }
    }

    fn clear(&mut self) {
        self.results = None;
    }
}

pub struct App<'a> {
    catalog: Catalog,
    start_case: usize,
    pub game: Option<Controller<Panel>>,
    pub editor: TextArea<'a>,
    /// Where the player left off in the file under test.
    code_cursor: (usize, usize),
    pub state: GameState,
    pub menu_selection: MenuOption,
    pub language_selection: Language,
    pub message_scroll: u16,
    pub command_mode: bool,
    pub command_buffer: String,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    pub fn new(catalog: Catalog, start_case: usize) -> Self {
        App {
            catalog,
            start_case,
            game: None,
            editor: TextArea::default(),
            code_cursor: (0, 0),
            state: GameState::TitleScreen,
            menu_selection: MenuOption::NewGame,
            language_selection: Language::Html,
            message_scroll: 0,
            command_mode: false,
            command_buffer: String::new(),
            should_quit: false,
        }
    }

    pub fn start_game(&mut self, language: Language) {
        let last = self.catalog.count(language).saturating_sub(1);
        let index = self.start_case.min(last);
        match Controller::new(self.catalog.clone(), language, index, Panel::default()) {
            Ok(game) => {
                self.game = Some(game);
                self.code_cursor = (0, 0);
                self.state = GameState::Playing;
                self.sync_editor();
            }
            Err(err) => {
                warn!(%err, "could not start game");
                self.state = GameState::TitleScreen;
            }
        }
    }

    /// Rebuilds the editor from the buffer of the file on display.
    fn sync_editor(&mut self) {
        let Some(game) = &self.game else {
            return;
        };
        let session = game.session();
        let kind = session.current_file();
        let title = if session.is_editable(kind) {
            format!(
                " {} [F5: Submit | F1: Hint | F2: Reset | F3/F4: Prev/Next | Esc: Command] ",
                kind.label()
            )
        } else {
            format!(" {} (read-only) ", kind.label())
        };

        // split keeps a trailing empty line, lines() would drop it
        self.editor = TextArea::from(session.buffer(kind).split('\n'));
        self.editor
            .set_block(Block::default().borders(Borders::ALL).title(title));
        self.editor
            .set_line_number_style(Style::default().fg(Color::DarkGray));
        if session.is_editable(kind) {
            let (row, col) = self.code_cursor;
            self.editor.move_cursor(CursorMove::Jump(
                u16::try_from(row).unwrap_or(u16::MAX),
                u16::try_from(col).unwrap_or(u16::MAX),
            ));
        }
        self.message_scroll = 0;
    }

    /// File kinds worth a tab: the one under test plus any non-empty context.
    pub fn visible_files(&self) -> Vec<Language> {
        let Some(game) = &self.game else {
            return Vec::new();
        };
        let session = game.session();
        Language::ALL
            .into_iter()
            .filter(|&kind| session.is_editable(kind) || !session.buffer(kind).is_empty())
            .collect()
    }

    pub fn perform(&mut self, action: Action) {
        self.message_scroll = 0;
        match action {
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            Action::Menu => {
                self.game = None;
                self.state = GameState::TitleScreen;
                return;
            }
            _ => {}
        }

        let next_file = match action {
            Action::CycleFile => self.next_visible_file(),
            Action::SwitchFile(kind) if !self.visible_files().contains(&kind) => {
                self.notice(
                    "No such file",
                    &format!("This case has no {} file.", kind.label()),
                );
                return;
            }
            _ => None,
        };
        let Some(game) = self.game.as_mut() else {
            return;
        };
        let rebuilds_editor = matches!(
            action,
            Action::Reset | Action::Next | Action::Prev | Action::SwitchFile(_) | Action::CycleFile
        );
        if rebuilds_editor && game.session().is_editable(game.session().current_file()) {
            self.code_cursor = self.editor.cursor();
        }

        let result = match action {
            Action::Submit => game.submit().map(|_| ()),
            Action::Hint => {
                game.show_hint();
                Ok(())
            }
            Action::Reset => {
                game.reset();
                self.code_cursor = (0, 0);
                Ok(())
            }
            Action::Next | Action::Prev => {
                let direction = if action == Action::Next {
                    Direction::Next
                } else {
                    Direction::Prev
                };
                game.navigate(direction).map(|nav| {
                    if let Navigation::Moved(_) = nav {
                        self.code_cursor = (0, 0);
                    }
                })
            }
            Action::SwitchFile(kind) => {
                game.switch_file(kind);
                Ok(())
            }
            Action::CycleFile => {
                if let Some(kind) = next_file {
                    game.switch_file(kind);
                }
                Ok(())
            }
            Action::Menu | Action::Quit => Ok(()),
        };

        if let Err(err) = result {
            self.report(err);
        }
        if rebuilds_editor {
            self.sync_editor();
        }
    }

    fn next_visible_file(&self) -> Option<Language> {
        let files = self.visible_files();
        let current = self.game.as_ref()?.session().current_file();
        let pos = files.iter().position(|&kind| kind == current).unwrap_or(0);
        files.get((pos + 1) % files.len().max(1)).copied()
    }

    fn report(&mut self, err: GameError) {
        match err {
            // Already on the results panel.
            GameError::EmptySubmission => {}
            other => {
                warn!(err = %other, "recovered from game error");
                if let Some(game) = self.game.as_mut() {
                    game.sink_mut()
                        .emit(Feedback::new(FeedbackKind::Error, "Error", other.to_string()));
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.state {
            GameState::TitleScreen => self.handle_title_key(key),
            GameState::Instructions => self.state = GameState::TitleScreen,
            GameState::LanguageSelect => self.handle_language_key(key),
            GameState::Playing if self.command_mode => self.handle_command_key(key),
            GameState::Playing => self.handle_game_key(key),
        }
    }

    fn handle_title_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.menu_selection = self.menu_selection.next(),
            KeyCode::Up | KeyCode::Char('k') => self.menu_selection = self.menu_selection.prev(),
            KeyCode::Enter => match self.menu_selection {
                MenuOption::NewGame => self.state = GameState::LanguageSelect,
                MenuOption::Instructions => self.state = GameState::Instructions,
                MenuOption::Quit => self.should_quit = true,
            },
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_language_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.language_selection = self.language_selection.next()
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.language_selection = self.language_selection.prev()
            }
            KeyCode::Enter => self.start_game(self.language_selection),
            KeyCode::Esc => self.state = GameState::TitleScreen,
            _ => {}
        }
    }

    // Esc opens the command line; ':' has to stay typeable for CSS.
    fn handle_command_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.command_mode = false;
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                let command = std::mem::take(&mut self.command_buffer);
                self.command_mode = false;
                self.run_command(command.trim());
            }
            KeyCode::Backspace => {
                if self.command_buffer.pop().is_none() {
                    self.command_mode = false;
                }
            }
            KeyCode::Char(c) => self.command_buffer.push(c),
            _ => {}
        }
    }

    fn run_command(&mut self, command: &str) {
        let action = match command {
            "q" | "quit" => Action::Quit,
            "menu" | "exit" => Action::Menu,
            "s" | "submit" => Action::Submit,
            "hint" => Action::Hint,
            "reset" => Action::Reset,
            "n" | "next" => Action::Next,
            "p" | "prev" => Action::Prev,
            "html" => Action::SwitchFile(Language::Html),
            "css" => Action::SwitchFile(Language::Css),
            "js" => Action::SwitchFile(Language::Js),
            "" => return,
            "w" => {
                self.notice("Nothing to save", "There is no save... only evidence.");
                return;
            }
            "help" => {
                self.notice(
                    "Commands",
                    ":submit :hint :reset :next :prev :html :css :js :menu :q",
                );
                return;
            }
            other => {
                self.notice("Unknown command", other);
                return;
            }
        };
        self.perform(action);
    }

    fn notice(&mut self, title: &str, body: &str) {
        if let Some(game) = self.game.as_mut() {
            game.sink_mut()
                .emit(Feedback::new(FeedbackKind::Notice, title, body));
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => {
                self.command_mode = true;
                self.command_buffer.clear();
            }
            (KeyCode::F(5), _) | (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
                self.perform(Action::Submit)
            }
            (KeyCode::F(1), _) => self.perform(Action::Hint),
            (KeyCode::F(2), _) => self.perform(Action::Reset),
            (KeyCode::F(3), _) => self.perform(Action::Prev),
            (KeyCode::F(4), _) => self.perform(Action::Next),
            (KeyCode::F(6), _) => self.perform(Action::CycleFile),
            (KeyCode::PageDown, _) => {
                let lines = self.message_lines() as u16;
                if self.message_scroll < lines.saturating_sub(5) {
                    self.message_scroll += 3;
                }
            }
            (KeyCode::PageUp, _) => {
                self.message_scroll = self.message_scroll.saturating_sub(3);
            }
            _ => self.edit(key),
        }
    }

    fn edit(&mut self, key: KeyEvent) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        let session = game.session();
        let kind = session.current_file();
        let is_destructive = matches!(
            key.code,
            KeyCode::Char(_) | KeyCode::Backspace | KeyCode::Delete | KeyCode::Enter | KeyCode::Tab
        );

        if is_destructive && !session.is_editable(kind) {
            let body = format!(
                "The {} file is evidence. Only the {} file can be changed.",
                kind.label(),
                session.language().label()
            );
            game.sink_mut()
                .emit(Feedback::new(FeedbackKind::Notice, "Locked", body));
        } else if self.editor.input(key) {
            game.edit_buffer(self.editor.lines().join("\n"));
        }
    }

    fn message_lines(&self) -> usize {
        self.game
            .as_ref()
            .and_then(|game| game.sink().results.as_ref())
            .map(|feedback| feedback.body.lines().count())
            .unwrap_or(0)
    }
}
