//! TUI rendering with ratatui
//!
//! Board grid, on-screen keyboard, messages and a status bar.

use super::app::{App, MessageStyle};
use crate::core::{KEY_ROWS, KeyboardState, LetterStatus, WORD_LENGTH, key_label};
use crate::game::{Session, Status};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and messages
            Constraint::Length(5), // Keyboard
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("ПЯТЬ БУКВ")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Background color for a scored tile
const fn status_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Present => Color::Yellow,
        LetterStatus::Absent => Color::DarkGray,
    }
}

fn tile(letter: char, status: Option<LetterStatus>) -> Span<'static> {
    let style = status.map_or_else(
        || Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        |s| {
            Style::default()
                .fg(Color::Black)
                .bg(status_color(s))
                .add_modifier(Modifier::BOLD)
        },
    );
    Span::styled(format!(" {letter} "), style)
}

/// One line per board row: scored rows, the draft and empty rows
fn board_lines(session: &Session, rejected_row: Option<usize>) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(session.max_attempts() * 2);

    for row in session.rows() {
        lines.push(Line::from(
            row.cells()
                .map(|(letter, status)| tile(letter, Some(status)))
                .collect::<Vec<_>>(),
        ));
        lines.push(Line::default());
    }

    if !session.is_over() {
        let row = session.rows().len();
        let shaken = rejected_row == Some(row);
        let draft = session.draft();
        let spans = (0..WORD_LENGTH)
            .map(|i| match draft.get(i) {
                Some(&letter) if shaken => Span::styled(
                    format!(" {letter} "),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Some(&letter) => tile(letter, None),
                None => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    for _ in lines.len() / 2..session.max_attempts() {
        lines.push(Line::from(Span::styled(
            " · ".repeat(WORD_LENGTH),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::default());
    }

    lines
}

fn render_board<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (title, lines) = match app.game.session() {
        Some(session) => {
            let title = match session.status() {
                Status::Playing => format!(
                    " Попытка {}/{} ",
                    session.current_row() + 1,
                    session.max_attempts()
                ),
                Status::Won { attempts } => format!(" Победа за {attempts} "),
                Status::Lost => format!(" Слово: {} ", session.target()),
            };
            (title, board_lines(session, app.rejected_row))
        }
        None => (
            " Нет игры ".to_string(),
            vec![Line::from("Словарь пуст")],
        ),
    };

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn keyboard_lines(keyboard: &KeyboardState) -> Vec<Line<'static>> {
    KEY_ROWS
        .iter()
        .map(|keys| {
            Line::from(
                keys.iter()
                    .map(|key| {
                        let mut chars = key.chars();
                        match (chars.next(), chars.next()) {
                            (Some(letter), None) => tile(letter, keyboard.status_of(letter)),
                            _ => Span::styled(
                                format!(" {} ", key_label(key)),
                                Style::default().fg(Color::Cyan),
                            ),
                        }
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

fn render_keyboard<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let lines = app
        .game
        .session()
        .map(|s| keyboard_lines(s.keyboard()))
        .unwrap_or_else(|| keyboard_lines(&KeyboardState::new()));

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Сообщения ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats_text = format!(
        "Игр: {} | Побед: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let distribution = Paragraph::new(app.stats.distribution_line())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green));
    f.render_widget(distribution, chunks[1]);

    let help = Paragraph::new("Enter: проверить | Ctrl-N: новая игра | Esc: выход")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Key;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn board_has_two_lines_per_row() {
        let session = Session::new(Word::new("слово").unwrap(), 6);
        let lines = board_lines(&session, None);
        assert_eq!(lines.len(), 12);
        assert_eq!(text(&lines[0]), " ·  ·  ·  ·  · ");
    }

    #[test]
    fn board_shows_scored_row_then_draft() {
        let mut session = Session::new(Word::new("слово").unwrap(), 6);
        for ch in "ВОЛНА".chars() {
            session.handle_key(Key::Letter(ch));
        }
        session.handle_key(Key::Enter);
        session.handle_key(Key::Letter('С'));

        let lines = board_lines(&session, None);
        assert_eq!(lines.len(), 12);
        assert_eq!(text(&lines[0]), " В  О  Л  Н  А ");
        assert_eq!(lines[0].spans[0].style.bg, Some(Color::Yellow));
        assert_eq!(lines[0].spans[3].style.bg, Some(Color::DarkGray));
        assert_eq!(text(&lines[2]), " С  ·  ·  ·  · ");
    }

    #[test]
    fn rejected_draft_is_red() {
        let mut session = Session::new(Word::new("слово").unwrap(), 6);
        session.handle_key(Key::Letter('С'));
        let lines = board_lines(&session, Some(0));
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Red));
    }

    #[test]
    fn keyboard_colors_follow_state() {
        let mut keyboard = KeyboardState::new();
        let row = crate::core::GuessRow::score(
            Word::new("волна").unwrap(),
            &Word::new("слово").unwrap(),
        );
        keyboard.record(&row);

        let lines = keyboard_lines(&keyboard);
        assert_eq!(lines.len(), 3);
        let o_key = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .find(|s| s.content.trim() == "О")
            .unwrap();
        assert_eq!(o_key.style.bg, Some(Color::Yellow));
        let enter_key = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .find(|s| s.content.trim() == "ВВОД");
        assert!(enter_key.is_some());
    }
}
