//! TUI rendering: one gauge per voice plus the simulated preview.

use manotone::engine::{AudioBackend, CpalBackend};
use manotone::instrument::{DualVoiceInstrument, Voice};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::sim::SimHands;

pub fn render(frame: &mut Frame, instrument: &DualVoiceInstrument<CpalBackend>, hands: &SimHands) {
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // preview strip
            Constraint::Length(3), // left voice
            Constraint::Length(3), // right voice
            Constraint::Length(3), // help
            Constraint::Min(0),
        ])
        .split(frame.area());

    render_preview(frame, areas[0], hands);
    render_voice(frame, areas[1], instrument.left(), Color::Cyan);
    render_voice(frame, areas[2], instrument.right(), Color::Magenta);
    render_help(frame, areas[3]);
}

/// The virtual camera preview: hand markers on a horizontal strip, with
/// the midline that decides the left/right split.
fn render_preview(frame: &mut Frame, area: Rect, hands: &SimHands) {
    let width = area.width.saturating_sub(2).max(1) as usize;
    let mut strip: Vec<char> = vec!['·'; width];
    strip[width / 2] = '|';

    for (i, hand) in hands.hands.iter().enumerate() {
        if hand.is_present() {
            let col = ((hand.x() * (width - 1) as f32) as usize).min(width - 1);
            strip[col] = char::from_digit(i as u32 + 1, 10).unwrap_or('?');
        }
    }

    let paragraph = Paragraph::new(Line::from(strip.into_iter().collect::<String>()))
        .block(Block::default().title(" preview ").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_voice<B: AudioBackend>(frame: &mut Frame, area: Rect, voice: &Voice<B>, color: Color) {
    let range = voice.range();
    let hz = voice.target_frequency();
    let ratio = if voice.is_active() {
        ((hz - range.min_hz()) / (range.max_hz() - range.min_hz())).clamp(0.0, 1.0) as f64
    } else {
        0.0
    };

    let label = if voice.is_active() {
        format!("{hz:.0} Hz")
    } else {
        "silent".to_string()
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(
                    " {} voice  [{:.0}-{:.0} Hz] ",
                    voice.label(),
                    range.min_hz(),
                    range.max_hz()
                ))
                .borders(Borders::ALL),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(label);
    frame.render_widget(gauge, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("a/d", Style::default().fg(Color::Yellow)),
        Span::raw(" move hand 1   "),
        Span::styled("←/→", Style::default().fg(Color::Yellow)),
        Span::raw(" move hand 2   "),
        Span::styled("1/2", Style::default().fg(Color::Yellow)),
        Span::raw(" show/hide hands   "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" quit"),
    ]);
    let paragraph =
        Paragraph::new(line).block(Block::default().title(" keys ").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
