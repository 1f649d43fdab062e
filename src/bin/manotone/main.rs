//! manotone - play the theremin without a camera
//!
//! An interactive simulation of the instrument: two "hands" move across
//! a virtual preview under keyboard control, flow through the same
//! capture-thread → bridge → instrument path a camera deployment would
//! use, and drive real audio output.
//!
//! Run with: cargo run

mod app;
mod sim;
mod ui;

use app::App;
use color_eyre::eyre::Result as EyreResult;
use manotone::engine::CpalBackend;
use manotone::instrument::DualVoiceInstrument;
use manotone::perception::FrameResult;
use std::sync::Arc;

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    env_logger::init();

    // Capture thread → control loop hand-off, one slot per frame.
    let (frame_tx, frame_rx) = rtrb::RingBuffer::<FrameResult>::new(8);

    let hands = Arc::new(sim::SimHands::default());
    sim::spawn_capture(Arc::clone(&hands), frame_tx);

    let instrument = DualVoiceInstrument::new(CpalBackend);

    let mut terminal = ratatui::init();
    let result = App::new(instrument, hands, frame_rx).run(&mut terminal);
    ratatui::restore();
    result
}
