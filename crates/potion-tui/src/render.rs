use crate::app::App;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use potion_core::{Feedback, SessionState};
use std::io::{self, Write};

const POTION: &str = "●";
const PROGRESS_WIDTH: usize = 30;

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(stdout, Hide, SetBackgroundColor(app.theme.bg), Clear(ClearType::All))?;

    let x = 2;
    let mut y = 1;
    render_header(stdout, app, x, y)?;
    y += 3;

    // Room left for history after the draft, rack and controls
    let reserved = 9;
    let visible = term_height.saturating_sub(y + reserved) as usize;
    y = render_history(stdout, app, x, y, visible)?;
    y += 1;

    render_draft(stdout, app, x, y)?;
    y += 2;
    render_rack(stdout, app, x, y)?;
    y += 3;
    render_controls(stdout, app, x, y)?;

    if let Some(ref msg) = app.message {
        render_message(stdout, app, msg, term_width, y + 2)?;
    }

    queue!(stdout, ResetColor, Show)?;
    stdout.flush()
}

fn render_header(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let session = &app.session;
    let view = session.level_view();

    queue!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.key),
        Print("POTION FORMULA"),
        SetForegroundColor(theme.fg),
        Print(format!(
            "   Level {:>2}   Coins {:>5}   Attempts {:>2}/{}",
            view.level_id,
            session.score(),
            session.attempts_remaining(),
            view.max_attempts
        ))
    )?;

    let progress = session.progress_snapshot();
    let filled = ((progress.percent / 100.0) * PROGRESS_WIDTH as f64).round() as usize;
    queue!(
        stdout,
        MoveTo(x, y + 1),
        SetForegroundColor(theme.info),
        Print("Progress ["),
        SetForegroundColor(theme.success),
        Print("#".repeat(filled)),
        SetForegroundColor(theme.border),
        Print(".".repeat(PROGRESS_WIDTH - filled)),
        SetForegroundColor(theme.info),
        Print(format!(
            "] {:>3.0}%  ({}/{})",
            progress.percent, progress.completed, progress.total
        ))
    )?;
    Ok(())
}

/// Newest attempt on top; returns the next free row
fn render_history(
    stdout: &mut io::Stdout,
    app: &App,
    x: u16,
    y: u16,
    visible: usize,
) -> io::Result<u16> {
    let theme = &app.theme;
    let mut row_y = y;

    for row in app.history.iter().rev().take(visible.max(1)) {
        queue!(
            stdout,
            MoveTo(x, row_y),
            SetForegroundColor(theme.info),
            Print(format!("#{:<3}", row.attempt_index))
        )?;
        for (slot, color) in row.guess.iter().enumerate() {
            // Locked and correct slots keep their potion; misses show a marker
            let (fg, glyph, bg) = match row.feedback.get(slot).copied().flatten() {
                None | Some(Feedback::Correct) => (theme.potion(*color), POTION, theme.locked_bg),
                Some(Feedback::WrongPosition) => (theme.warning, "~", theme.bg),
                Some(Feedback::WrongColor) => (theme.error, "x", theme.bg),
            };
            queue!(
                stdout,
                SetBackgroundColor(bg),
                SetForegroundColor(fg),
                Print(format!(" {} ", glyph)),
                SetBackgroundColor(theme.bg),
                Print(" ")
            )?;
        }

        // Splashed potions stay visible next to their markers
        queue!(stdout, Print("  "))?;
        for (slot, color) in row.guess.iter().enumerate() {
            let wrong = matches!(
                row.feedback.get(slot).copied().flatten(),
                Some(Feedback::WrongPosition | Feedback::WrongColor)
            );
            let fg = if wrong { theme.potion(*color) } else { theme.border };
            queue!(stdout, SetForegroundColor(fg), Print(POTION))?;
        }
        row_y += 1;
    }

    Ok(row_y)
}

fn render_draft(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let session = &app.session;

    queue!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.info),
        Print(format!("#{:<3}", session.attempt_index()))
    )?;

    for (slot, entry) in session.draft().iter().enumerate() {
        let locked = session.locked_positions()[slot].is_some();
        let bg = if locked { theme.locked_bg } else { theme.bg };
        let (fg, glyph) = match entry {
            Some(color) => (theme.potion(*color), POTION),
            None => (theme.border, "_"),
        };
        queue!(
            stdout,
            SetBackgroundColor(bg),
            SetForegroundColor(theme.border),
            Print("["),
            SetForegroundColor(fg),
            Print(glyph),
            SetForegroundColor(theme.border),
            Print("]"),
            SetBackgroundColor(theme.bg),
            Print(" ")
        )?;
    }

    if session.state() == SessionState::AttemptInFlight {
        queue!(stdout, SetForegroundColor(theme.key), Print("  checking..."))?;
    }
    Ok(())
}

fn render_rack(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    queue!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.info),
        Print("Rack ")
    )?;

    for (index, color) in app.session.rack().iter().enumerate() {
        let bg: Color = if index == app.cursor && app.session.state() == SessionState::Playing {
            theme.selected_bg
        } else {
            theme.bg
        };
        queue!(
            stdout,
            SetBackgroundColor(bg),
            SetForegroundColor(theme.key),
            Print(format!("{}", index + 1)),
            SetForegroundColor(theme.potion(*color)),
            Print(format!("{} ", POTION)),
            SetBackgroundColor(theme.bg),
            Print(" ")
        )?;
    }

    if let Some(color) = app.session.rack().get(app.cursor) {
        queue!(
            stdout,
            MoveTo(x + 5, y + 1),
            SetForegroundColor(theme.info),
            Print(color.to_string())
        )?;
    }
    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let keys: &[(&str, &str)] = if app.session.is_level_complete() {
        &[("Enter/n", "next level"), ("q", "quit")]
    } else {
        &[
            ("←/→", "move"),
            ("Enter", "pour"),
            ("1-9", "pick"),
            ("Bksp", "undo"),
            ("q", "quit"),
        ]
    };

    queue!(stdout, MoveTo(x, y))?;
    for (key, label) in keys {
        queue!(
            stdout,
            SetForegroundColor(theme.key),
            Print(*key),
            SetForegroundColor(theme.info),
            Print(format!(" {}   ", label))
        )?;
    }
    Ok(())
}

fn render_message(
    stdout: &mut io::Stdout,
    app: &App,
    msg: &str,
    term_width: u16,
    y: u16,
) -> io::Result<()> {
    let width = msg.chars().count() as u16;
    let x = term_width.saturating_sub(width) / 2;
    let fg = if app.session.is_level_complete() {
        app.theme.success
    } else {
        app.theme.fg
    };
    queue!(stdout, MoveTo(x, y), SetForegroundColor(fg), Print(msg))?;
    Ok(())
}
