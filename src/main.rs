//! Terminal 2048 runner (default binary).
//!
//! Blocks on the next key event, applies it, redraws. There is no clock:
//! the board only changes in response to input.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_2048::config::{init_logging, Args};
use tui_2048::core::{GameSnapshot, RandomSource};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::session::GameSession;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    // Validate before touching the terminal so errors print normally.
    let mut session = args.build_session()?;
    info!("starting with {:?}", args);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    session: &mut GameSession<Box<dyn RandomSource>>,
) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!("quit with score {}", session.engine().score());
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    session.handle(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
