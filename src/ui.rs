use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::{App, GameState, MenuOption, Panel};
use crate::case::Language;
use crate::game::{Controller, FeedbackKind};

pub fn draw_ui(f: &mut Frame, app: &App) {
    match app.state {
        GameState::TitleScreen => draw_title_screen(f, app),
        GameState::Instructions => draw_instructions(f),
        GameState::LanguageSelect => draw_language_select(f, app),
        GameState::Playing => {
            if let Some(game) = &app.game {
                draw_game(f, app, game);
            }
        }
    }
}

fn kind_style(kind: FeedbackKind) -> Style {
    match kind {
        FeedbackKind::Success => Style::default().fg(Color::Black).bg(Color::Green),
        FeedbackKind::Error => Style::default().fg(Color::Red),
        FeedbackKind::Hint => Style::default().fg(Color::Cyan),
        FeedbackKind::Notice => Style::default().fg(Color::Yellow),
    }
}

fn draw_game(f: &mut Frame, app: &App, game: &Controller<Panel>) {
    let session = game.session();
    let case = game.case();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(8),
        ])
        .split(f.area());

    // Status bar
    let mut status = vec![
        Span::styled(
            " DEBUG DETECTIVE ",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", case.title),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" Case {}/{} ", session.case_index() + 1, game.case_count()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", session.language().label()),
            Style::default().fg(Color::Magenta),
        ),
    ];
    if session.solved() {
        status.push(Span::raw("  "));
        status.push(Span::styled(
            " SOLVED ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }
    let status_block =
        Paragraph::new(Line::from(status)).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(status_block, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[1]);

    // Case file on the left, hint underneath when shown
    let hint = game
        .sink()
        .hint
        .as_ref()
        .filter(|_| session.hint_visible());
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if hint.is_some() {
            [Constraint::Min(5), Constraint::Length(6)]
        } else {
            [Constraint::Min(5), Constraint::Length(0)]
        })
        .split(main_chunks[0]);

    let description = Paragraph::new(case.description.as_str())
        .block(Block::default().borders(Borders::ALL).title(" The Case "))
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White));
    f.render_widget(description, left[0]);

    if let Some(hint) = hint {
        let hint_widget = Paragraph::new(hint.body.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", hint.title)),
            )
            .wrap(Wrap { trim: false })
            .style(kind_style(hint.kind));
        f.render_widget(hint_widget, left[1]);
    }

    // File tabs above the editor
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(main_chunks[1]);

    let files = app.visible_files();
    let selected = files
        .iter()
        .position(|&kind| kind == session.current_file())
        .unwrap_or(0);
    let tabs = Tabs::new(files.iter().map(|kind| tab_title(*kind, session.language())))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, right[0]);
    f.render_widget(&app.editor, right[1]);

    // Message area
    let (content, style, title) = if app.command_mode {
        (
            format!(":{}", app.command_buffer),
            Style::default().fg(Color::White).bg(Color::DarkGray),
            " Command ".to_string(),
        )
    } else if let Some(feedback) = &game.sink().results {
        (
            feedback.body.clone(),
            kind_style(feedback.kind),
            format!(" {} ", feedback.title),
        )
    } else {
        (
            "Study the case, fix the code, then submit it (F5).".to_string(),
            Style::default().fg(Color::Yellow),
            " Results ".to_string(),
        )
    };
    let message = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .style(style)
        .scroll((app.message_scroll, 0));
    f.render_widget(message, chunks[2]);
}

fn tab_title(kind: Language, language: Language) -> String {
    if kind == language {
        format!(" {} ", kind.as_str().to_uppercase())
    } else {
        format!(" {} (ro) ", kind.as_str().to_uppercase())
    }
}

fn draw_title_screen(f: &mut Frame, app: &App) {
    let area = f.area();

    let title_art = r#"
    ╔═══════════════════════════════════════════════════════╗
    ║                                                       ║
    ║      ██████╗ ███████╗██████╗ ██╗   ██╗ ██████╗        ║
    ║      ██╔══██╗██╔════╝██╔══██╗██║   ██║██╔════╝        ║
    ║      ██║  ██║█████╗  ██████╔╝██║   ██║██║  ███╗       ║
    ║      ██║  ██║██╔══╝  ██╔══██╗██║   ██║██║   ██║       ║
    ║      ██████╔╝███████╗██████╔╝╚██████╔╝╚██████╔╝       ║
    ║      ╚═════╝ ╚══════╝╚═════╝  ╚═════╝  ╚═════╝        ║
    ║                                                       ║
    ║                 D E T E C T I V E                     ║
    ║                                                       ║
    ║          "Every bug leaves a trail of clues"          ║
    ║                                                       ║
    ╚═══════════════════════════════════════════════════════╝
"#;

    let mut constraints = vec![Constraint::Length(17)];
    constraints.extend(MenuOption::ALL.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Min(1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let title = Paragraph::new(title_art)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    for (i, option) in MenuOption::ALL.iter().enumerate() {
        let style = if *option == app.menu_selection {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let item = Paragraph::new(option.label())
            .style(style)
            .alignment(Alignment::Center);
        f.render_widget(item, chunks[i + 1]);
    }

    let help = Paragraph::new("↑/↓ to select  •  ENTER to confirm  •  q to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[MenuOption::ALL.len() + 1]);
}

fn draw_language_select(f: &mut Frame, app: &App) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Choose your language",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for language in Language::ALL {
        let style = if language == app.language_selection {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(format!("  {}  ", language.label()), style)));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "↑/↓ to select  •  ENTER to start  •  ESC to go back",
        Style::default().fg(Color::DarkGray),
    )));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(25), Constraint::Min(10)])
        .split(f.area());
    let list = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(list, chunks[1]);
}

fn draw_instructions(f: &mut Frame) {
    let text = "\
Each case is a small piece of HTML, CSS or JavaScript that needs fixing.

Read the case on the left, write your fix in the editor, then submit it.
Other files of the case are shown as read-only evidence.

  F5 / Ctrl+R   submit your fix
  F1            show or hide the hint
  F2            reset the case to its starting code
  F3 / F4       previous / next case
  F6            switch between files
  PgUp / PgDn   scroll the results
  Esc           command line (:submit :hint :reset :next :prev
                :html :css :js :menu :help :q)

Press any key to return.";

    let instructions = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(" How to play "))
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White));
    f.render_widget(instructions, f.area());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::load_builtin;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw_ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_title_screen_lists_every_option() {
        let app = App::new(load_builtin().unwrap(), 0);
        let screen = render(&app, 100, 40);
        assert!(screen.contains("NEW GAME"));
        assert!(screen.contains("INSTRUCTIONS"));
        assert!(screen.contains("QUIT"));
        assert!(screen.contains("ENTER to confirm"));
    }

    #[test]
    fn test_solved_case_with_hint() {
        let mut app = App::new(load_builtin().unwrap(), 0);
        app.start_game(Language::Html);
        for c in "<p>Hello World</p>".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::F(5));
        press(&mut app, KeyCode::F(1));

        let screen = render(&app, 120, 40);
        assert!(screen.contains("DEBUG DETECTIVE"));
        assert!(screen.contains("Case 1: Hello World"));
        assert!(screen.contains("Case 1/3"));
        assert!(screen.contains("SOLVED"));
        assert!(screen.contains(" Hint "));
        assert!(screen.contains("HTML Error"));
        assert!(screen.contains("Correct!"));
    }

    #[test]
    fn test_context_tab_and_read_only_title() {
        let mut app = App::new(load_builtin().unwrap(), 0);
        app.start_game(Language::Css);
        press(&mut app, KeyCode::F(6));

        let screen = render(&app, 120, 40);
        assert!(screen.contains("HTML (ro)"));
        assert!(screen.contains("HTML (read-only)"));
        assert!(!screen.contains(" JS "));
    }

    #[test]
    fn test_short_terminal_does_not_panic() {
        let mut app = App::new(load_builtin().unwrap(), 0);
        render(&app, 60, 20);
        press(&mut app, KeyCode::Enter);
        render(&app, 60, 20);
        press(&mut app, KeyCode::Enter);
        render(&app, 60, 20);
        press(&mut app, KeyCode::F(1));
        render(&app, 60, 20);
    }
}
