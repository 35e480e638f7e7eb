//! SRS sandbox (default binary).
//!
//! An interactive terminal driver for the rotation core: move, rotate and
//! drop pieces by hand and watch kicks and spin detection. No gravity.
//!
//! Keys: arrows / hjkl move, up / x / k rotate CW, z rotate CCW, a rotate
//! 180, space hard drop, r restart, q quit.
//!
//! Board size and rotation system come from `SRS_BOARD_WIDTH`,
//! `SRS_BOARD_HEIGHT` and `SRS_ROTATION_SYSTEM`. Logs go to stderr, filtered
//! by `RUST_LOG` (default `warn`); redirect stderr to keep them off the board.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::{cursor, terminal, QueueableCommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use srs_tetris::core::CoreConfig;
use srs_tetris::input::{handle_key_event, should_quit};
use srs_tetris::sandbox::Sandbox;
use srs_tetris::types::PieceKind;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = CoreConfig::from_env();
    let mut sandbox = Sandbox::new(&config)?;
    info!(
        rotation_system = %config.rotation_system,
        width = config.width,
        height = config.height,
        "sandbox started"
    );

    let mut stdout = io::stdout();
    enter(&mut stdout)?;

    let result = run(&mut stdout, &mut sandbox);

    // Always try to restore terminal state.
    let _ = exit(&mut stdout);
    result
}

fn enter(out: &mut io::Stdout) -> Result<()> {
    terminal::enable_raw_mode()?;
    out.queue(terminal::EnterAlternateScreen)?;
    out.queue(cursor::Hide)?;
    out.flush()?;
    Ok(())
}

fn exit(out: &mut io::Stdout) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    out.flush()?;
    terminal::disable_raw_mode()?;
    Ok(())
}

fn run(out: &mut io::Stdout, sandbox: &mut Sandbox) -> Result<()> {
    loop {
        draw(out, sandbox)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }
        if let Some(action) = handle_key_event(key) {
            sandbox.apply(action)?;
        }
    }
}

fn color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::T => Color::Magenta,
        PieceKind::S => Color::Green,
        PieceKind::Z => Color::Red,
        PieceKind::L => Color::DarkYellow,
        PieceKind::J => Color::Blue,
        PieceKind::O => Color::Yellow,
        PieceKind::I => Color::Cyan,
    }
}

fn draw(out: &mut io::Stdout, sandbox: &Sandbox) -> Result<()> {
    let matrix = sandbox.matrix();
    let active = sandbox.active();
    let cells = active.cells();

    out.queue(terminal::Clear(terminal::ClearType::All))?;
    for y in 0..matrix.height() as i32 {
        out.queue(cursor::MoveTo(0, y as u16))?;
        out.queue(Print(if y == 0 { "  " } else { "<!" }))?;
        for x in 0..matrix.width() as i32 {
            let here = cells.iter().any(|c| c.x == x && c.y == y);
            match (here, matrix.get(x, y), matrix.ghost(x, y)) {
                (true, _, _) => {
                    out.queue(SetForegroundColor(color(active.kind())))?;
                    out.queue(Print("[]"))?;
                }
                (false, Some(Some(kind)), _) => {
                    out.queue(SetForegroundColor(color(kind)))?;
                    out.queue(Print("##"))?;
                }
                (false, _, Some(Some(_))) => {
                    out.queue(SetForegroundColor(Color::DarkGrey))?;
                    out.queue(Print("::"))?;
                }
                _ => {
                    out.queue(ResetColor)?;
                    out.queue(Print(if y == 0 { "  " } else { " ." }))?;
                }
            }
        }
        out.queue(ResetColor)?;
        out.queue(Print(if y == 0 { "  " } else { "!>" }))?;
    }

    let side = matrix.width() as u16 * 2 + 6;
    let spin = sandbox.last_spin().map_or("-", |s| s.as_str());
    let status = if sandbox.game_over() { "GAME OVER (r)" } else { "" };
    let lines = [
        format!("piece    {}", active.kind()),
        format!("state    {}", active.rotation()),
        format!("position {}", active.position()),
        format!("ghost    {}", active.ghost_position()),
        format!("next     {}", sandbox.next_kind()),
        format!("spin     {}", spin),
        format!("lines    {}", sandbox.lines()),
        status.to_string(),
    ];
    for (row, text) in lines.iter().enumerate() {
        out.queue(cursor::MoveTo(side, row as u16 + 1))?;
        out.queue(Print(text))?;
    }
    out.flush()?;
    Ok(())
}
