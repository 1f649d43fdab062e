//! Control loop: drain frames, steer the instrument, handle keys.

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use manotone::engine::CpalBackend;
use manotone::instrument::{DualVoiceInstrument, HandsListener};
use manotone::perception::{FrameResult, FrameSource};
use ratatui::DefaultTerminal;
use std::sync::Arc;
use std::time::Duration;

use crate::sim::SimHands;
use crate::ui;

/// Horizontal step per key press, in normalized preview widths.
const HAND_STEP: f32 = 0.02;

pub struct App {
    instrument: DualVoiceInstrument<CpalBackend>,
    hands: Arc<SimHands>,
    frame_rx: rtrb::Consumer<FrameResult>,
    should_quit: bool,
}

impl App {
    pub fn new(
        instrument: DualVoiceInstrument<CpalBackend>,
        hands: Arc<SimHands>,
        frame_rx: rtrb::Consumer<FrameResult>,
    ) -> Self {
        Self {
            instrument,
            hands,
            frame_rx,
            should_quit: false,
        }
    }

    pub fn run(mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.apply_pending_frames()?;

            terminal.draw(|frame| ui::render(frame, &self.instrument, &self.hands))?;

            // Non-blocking key handling at ~60fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        self.instrument.silence();
        Ok(())
    }

    /// Apply every pending frame in arrival order. Each frame fully
    /// determines which voices sound, so replaying a backlog is cheap
    /// and ends at the newest state.
    fn apply_pending_frames(&mut self) -> EyreResult<()> {
        while let Some(frame) = self.frame_rx.poll() {
            self.instrument.on_hands_updated(&frame)?;
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            // First hand
            KeyCode::Char('a') => self.hands.hands[0].nudge(-HAND_STEP),
            KeyCode::Char('d') => self.hands.hands[0].nudge(HAND_STEP),
            KeyCode::Char('1') => self.hands.hands[0].toggle_present(),
            // Second hand
            KeyCode::Left => self.hands.hands[1].nudge(-HAND_STEP),
            KeyCode::Right => self.hands.hands[1].nudge(HAND_STEP),
            KeyCode::Char('2') => self.hands.hands[1].toggle_present(),
            _ => {}
        }
    }
}
