//! Court Pong entry point
//!
//! Terminal front end: raw mode plus mouse capture, one simulation step and
//! one presented frame per driver call at the fixed cadence.

use std::io::{Stdout, stdout};
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    cursor::{Hide, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
};
use rand::Rng;

use court_pong::Config;
use court_pong::consts::TICK_HZ;
use court_pong::driver;
use court_pong::input::Pointer;
use court_pong::renderer::{TermSink, draw_frame};
use court_pong::sim::{GameState, TickInput, tick};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::default();
    config.validate().context("invalid game configuration")?;

    let seed: u64 = rand::rng().random();
    let mut state = GameState::new(config.clone(), seed);
    log::info!("court-pong starting (seed {seed})");

    let (cols, rows) = crossterm::terminal::size().context("query terminal size")?;
    let mut sink = TermSink::new(cols, rows, config.field_width, config.field_height);

    enable_raw_mode().context("enable raw mode")?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, EnableMouseCapture, Hide)?;

    let result = run(&mut state, &mut sink, &mut out);

    // Always restore the terminal, even when the loop failed
    let _ = execute!(out, Show, DisableMouseCapture, LeaveAlternateScreen);
    let _ = disable_raw_mode();
    result
}

fn run(state: &mut GameState, sink: &mut TermSink, out: &mut Stdout) -> anyhow::Result<()> {
    let mut pointer = Pointer::default();
    let mut failure: Option<std::io::Error> = None;

    driver::run_loop(TICK_HZ, || {
        // Drain pending terminal events; the pointer is last-value-wins
        while event::poll(Duration::ZERO).unwrap_or(false) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        return false;
                    }
                }
                Ok(Event::Mouse(mouse)) => {
                    if matches!(
                        mouse.kind,
                        MouseEventKind::Moved | MouseEventKind::Drag(_)
                    ) {
                        pointer.sample(sink.field_y(mouse.row));
                    }
                }
                Ok(Event::Resize(cols, rows)) => sink.resize(cols, rows),
                Ok(_) => {}
                Err(err) => {
                    failure = Some(err);
                    return false;
                }
            }
        }

        let input = TickInput {
            target_y: pointer.target_y(&state.config),
        };
        tick(state, &input);

        draw_frame(state, sink);
        if let Err(err) = sink.present(out) {
            failure = Some(err);
            return false;
        }
        true
    });

    match failure {
        Some(err) => Err(err).context("terminal front end failed"),
        None => Ok(()),
    }
}
