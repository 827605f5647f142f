pub mod screen;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
    Frame,
};
use speedkey::{
    round::{Feedback, Round},
    score::{AccuracyTier, Rank, Score},
    Catalog,
};

use crate::App;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;
/// How many catalog keys the start screen previews
const PREVIEW_KEYS: usize = 10;
/// Countdown turns urgent at or below this many seconds
const URGENT_SECS: u32 = 10;
const CARD_WIDTH: u16 = 24;
const CARD_HEIGHT: u16 = 9;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        screen::current_screen(self.session.phase()).render(self, area, buf);
    }
}

pub fn draw(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

fn italic() -> Style {
    Style::default().add_modifier(Modifier::ITALIC)
}

/// A `width` x `height` rect centered in `area`, clipped to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

pub(crate) fn render_start(app: &App, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(2), // title + tagline
            Constraint::Length(1),
            Constraint::Length(5), // feature blurbs
            Constraint::Length(1),
            Constraint::Length(2), // training keys
            Constraint::Length(1),
            Constraint::Length(1), // legend
            Constraint::Length(1), // terminal warning
            Constraint::Min(0),
        ])
        .split(area);

    Paragraph::new(vec![
        Line::from(vec![
            Span::styled("SpeedKey", bold().fg(Color::Cyan)),
            Span::styled(" Trainer", bold()),
        ]),
        Line::from(Span::styled(
            "Master your keystrokes. Improve your reflexes.",
            dim(),
        )),
    ])
    .alignment(Alignment::Center)
    .render(chunks[1], buf);

    let blurbs = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[3]);
    let features = [
        ("Reaction", "Instant feedback on every keystroke", Color::Yellow),
        ("60 Seconds", "Race against the clock", Color::Cyan),
        ("Accuracy", "Precision over speed", Color::Green),
    ];
    for ((title, text, color), slot) in features.into_iter().zip(blurbs.iter()) {
        Paragraph::new(vec![
            Line::from(Span::styled(title, bold().fg(color))),
            Line::from(Span::styled(text, dim())),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded))
        .render(*slot, buf);
    }

    Paragraph::new(vec![
        Line::from(Span::styled("TRAINING KEYS", dim())),
        key_preview(app.session.catalog()),
    ])
    .alignment(Alignment::Center)
    .render(chunks[5], buf);

    Paragraph::new(Span::styled("(enter) start / (esc)ape", italic()))
        .alignment(Alignment::Center)
        .render(chunks[7], buf);

    if !app.keyboard_enhanced {
        Paragraph::new(Span::styled(
            "this terminal does not report lone SHIFT/CTRL/ALT presses",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center)
        .render(chunks[8], buf);
    }
}

fn key_preview(catalog: &Catalog) -> Line<'static> {
    let key_style = bold().fg(Color::Gray);
    let mut spans: Vec<Span> = Vec::new();
    for key in catalog.keys().iter().take(PREVIEW_KEYS) {
        spans.push(Span::styled(format!("[{key}]"), key_style));
        spans.push(Span::raw(" "));
    }
    if catalog.len() > PREVIEW_KEYS {
        spans.push(Span::styled("...", dim()));
    } else {
        spans.pop();
    }
    Line::from(spans)
}

pub(crate) fn render_playing(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(round) = app.session.round() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(3), // timer + live score
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(1), // hint
        ])
        .split(area);

    render_status_bar(round, chunks[0], buf);
    render_card(round, chunks[1], buf);

    Paragraph::new(Span::styled("Press the key to continue", dim()))
        .alignment(Alignment::Center)
        .render(chunks[2], buf);
}

fn render_status_bar(round: &Round, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    block.render(area, buf);

    let timer_style = if round.countdown() <= URGENT_SECS {
        bold().fg(Color::Red).add_modifier(Modifier::SLOW_BLINK)
    } else {
        bold().fg(Color::LightBlue)
    };

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    Paragraph::new(Span::styled(format!(" {}s", round.countdown()), timer_style))
        .alignment(Alignment::Left)
        .render(halves[0], buf);

    let score = round.score();
    Paragraph::new(Line::from(vec![
        Span::styled(format!("✓ {}", score.correct), bold().fg(Color::Green)),
        Span::raw("   "),
        Span::styled(format!("✗ {} ", score.wrong), bold().fg(Color::Red)),
    ]))
    .alignment(Alignment::Right)
    .render(halves[1], buf);
}

fn card_style(feedback: Feedback) -> (Style, Style) {
    match feedback {
        Feedback::Correct => (
            Style::default().fg(Color::LightGreen).bg(Color::Green),
            bold().fg(Color::White).bg(Color::Green),
        ),
        Feedback::Wrong => (
            Style::default().fg(Color::LightRed).bg(Color::Red),
            bold().fg(Color::White).bg(Color::Red),
        ),
        Feedback::Idle => (Style::default().fg(Color::DarkGray), bold().fg(Color::White)),
    }
}

fn render_card(round: &Round, area: Rect, buf: &mut Buffer) {
    let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, area);
    let (border_style, text_style) = card_style(round.feedback());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(border_style)
        .style(text_style);
    let inner = block.inner(card);
    block.render(card, buf);

    let label = centered_rect(inner.width, 1, inner);
    Paragraph::new(Span::styled(round.target().label(), text_style))
        .alignment(Alignment::Center)
        .render(label, buf);
}

fn rank_color(rank: Rank) -> Color {
    match rank {
        Rank::Grandmaster => Color::Yellow,
        Rank::ProTypist => Color::Magenta,
        Rank::FastFingers => Color::Blue,
        Rank::Apprentice => Color::Gray,
    }
}

fn accuracy_color(tier: AccuracyTier) -> Color {
    match tier {
        AccuracyTier::High => Color::Green,
        AccuracyTier::Medium => Color::Yellow,
        AccuracyTier::Low => Color::Red,
    }
}

pub(crate) fn render_game_over(app: &App, area: Rect, buf: &mut Buffer) {
    let score: Score = app.session.final_score();
    let rank = score.rank();

    let panel = centered_rect(44, 14, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Results ");
    let inner = block.inner(panel);
    block.render(panel, buf);

    let row = |label: &'static str, value: String, value_style: Style| {
        Line::from(vec![
            Span::styled(format!("{label:<18}"), dim()),
            Span::styled(format!("{value:>8}"), value_style),
        ])
    };

    let lines = vec![
        Line::from(Span::styled("Time's Up!", bold())),
        Line::from(Span::styled(
            format!("Rank: {rank}"),
            bold().fg(rank_color(rank)),
        )),
        Line::raw(""),
        row(
            "Accuracy",
            format!("{}%", score.accuracy()),
            bold().fg(accuracy_color(score.accuracy_tier())),
        ),
        row("Correct", score.correct.to_string(), bold()),
        Line::raw(""),
        row("Total Keystrokes", score.total().to_string(), Style::default()),
        row("Errors", score.wrong.to_string(), Style::default().fg(Color::Red)),
        Line::raw(""),
        Line::from(Span::styled("(enter) play again / (esc)ape", italic())),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(inner, buf);
}
