use crate::app::{App, CELL_WIDTH};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io;
use wordsearch_core::Position;

/// Width of the word list / info panel
const PANEL_WIDTH: u16 = 26;

pub fn render(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(stdout, Hide, SetBackgroundColor(app.theme.bg), Clear(ClearType::All))?;
    render_game_screen(stdout, app, term_width, term_height)?;
    execute!(stdout, Show, SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn render_game_screen(
    stdout: &mut io::Stdout,
    app: &mut App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let size = app.session.grid().size() as u16;

    // "+---...---+" around size cells of " X "
    let grid_width = size * CELL_WIDTH + 2;
    let grid_height = size + 2;

    let total_width = grid_width + 3 + PANEL_WIDTH;
    let start_x = if term_width > total_width {
        (term_width - total_width) / 2
    } else {
        1
    };
    let start_y = if term_height > grid_height + 6 { 2 } else { 1 };

    // Remember where the grid went so mouse clicks can be mapped back
    app.grid_origin = (start_x, start_y);

    render_grid(stdout, app, start_x, start_y)?;

    let panel_x = start_x + grid_width + 3;
    let words_y = render_info_panel(stdout, app, panel_x, start_y)?;
    render_word_list(stdout, app, panel_x, words_y + 1)?;

    let controls_y = start_y + grid_height + 1;
    render_controls(stdout, app, start_x, controls_y)?;

    if let Some(ref msg) = app.message {
        render_message(stdout, app, msg, term_width, term_height)?;
    }

    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let size = app.session.grid().size();
    let border = format!("+{}+", "-".repeat(size * CELL_WIDTH as usize));

    execute!(
        stdout,
        MoveTo(x, y),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.border),
        Print(&border)
    )?;

    for row in 0..size {
        let cell_y = y + 1 + row as u16;
        execute!(
            stdout,
            MoveTo(x, cell_y),
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.border),
            Print("|")
        )?;
        for col in 0..size {
            render_cell(stdout, app, Position::new(row, col))?;
        }
        execute!(
            stdout,
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.border),
            Print("|")
        )?;
    }

    execute!(
        stdout,
        MoveTo(x, y + 1 + size as u16),
        SetForegroundColor(theme.border),
        Print(&border)
    )?;
    Ok(())
}

fn render_cell(stdout: &mut io::Stdout, app: &App, pos: Position) -> io::Result<()> {
    let theme = &app.theme;
    let session = &app.session;
    let letter = session.grid().get(pos).unwrap_or(' ');

    let in_hint = app
        .hint
        .as_ref()
        .is_some_and(|hint| hint.start == pos);

    let fg = if in_hint {
        theme.hint
    } else if session.is_confirmed(pos) {
        theme.confirmed
    } else {
        theme.letter
    };

    let bg = if pos == app.cursor {
        theme.cursor_bg
    } else if session.is_selected(pos) {
        theme.chain_bg
    } else {
        theme.bg
    };

    let bold = session.is_selected(pos) || session.is_confirmed(pos);
    execute!(
        stdout,
        SetBackgroundColor(bg),
        SetForegroundColor(fg),
        SetAttribute(if bold { Attribute::Bold } else { Attribute::NormalIntensity }),
        Print(format!(" {} ", letter)),
        SetAttribute(Attribute::NormalIntensity)
    )?;
    Ok(())
}

/// Draw level, progress and the current selection; returns the next free row
fn render_info_panel(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<u16> {
    let theme = &app.theme;
    let session = &app.session;
    let mut y = y;

    execute!(
        stdout,
        MoveTo(x, y),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.fg),
        SetAttribute(Attribute::Bold),
        Print(format!(
            "Level {} of {}",
            session.level() + 1,
            session.level_count()
        )),
        SetAttribute(Attribute::NormalIntensity)
    )?;
    y += 1;

    let found = session.found_words().len();
    let total = session.words().len();
    let progress_color = if session.is_round_ended() {
        theme.success
    } else {
        theme.info
    };
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(progress_color),
        Print(format!("Found {} / {}", found, total))
    )?;
    y += 1;

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.info),
        Print(format!("Hints: {}", session.hints_used()))
    )?;
    y += 1;

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.info),
        Print(format!("Seed: {}", app.seed))
    )?;
    y += 1;

    if session.rules().lookahead {
        execute!(
            stdout,
            MoveTo(x, y),
            SetForegroundColor(theme.info),
            Print("Look-ahead on")
        )?;
        y += 1;
    }

    y += 1;
    let candidate = session.candidate();
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.info),
        Print("Selected: "),
        SetForegroundColor(theme.key),
        Print(if candidate.is_empty() { "-".to_string() } else { candidate })
    )?;
    y += 1;

    if session.is_round_ended() {
        y += 1;
        execute!(
            stdout,
            MoveTo(x, y),
            SetForegroundColor(theme.success),
            SetAttribute(Attribute::Bold),
            Print("LEVEL COMPLETE!"),
            SetAttribute(Attribute::NormalIntensity)
        )?;
        y += 1;
    }

    Ok(y)
}

fn render_word_list(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let session = &app.session;

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.fg),
        Print("Words:")
    )?;

    for (i, word) in session.words().iter().enumerate() {
        let found = session.is_found(word);
        let (color, attr) = if found {
            (theme.confirmed, Attribute::CrossedOut)
        } else {
            (theme.letter, Attribute::NotCrossedOut)
        };
        execute!(
            stdout,
            MoveTo(x + 2, y + 1 + i as u16),
            SetForegroundColor(color),
            SetAttribute(attr),
            Print(word),
            SetAttribute(Attribute::NotCrossedOut)
        )?;
    }
    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let controls: &[(&str, &str)] = &[
        ("click/Space", "select"),
        ("arrows/hjkl", "move"),
        ("Esc", "clear"),
        ("?", "hint"),
        ("n", "next level"),
        ("r", "new grid"),
        ("t", "theme"),
        ("q", "quit"),
    ];

    execute!(stdout, MoveTo(x, y))?;
    for (i, (key, action)) in controls.iter().enumerate() {
        if i == 4 {
            execute!(stdout, MoveTo(x, y + 1))?;
        }
        execute!(
            stdout,
            SetForegroundColor(theme.key),
            Print(key),
            SetForegroundColor(theme.info),
            Print(format!(" {}  ", action))
        )?;
    }
    Ok(())
}

fn render_message(
    stdout: &mut io::Stdout,
    app: &App,
    msg: &str,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let width = msg.chars().count() as u16 + 4;
    let x = term_width.saturating_sub(width) / 2;
    let y = term_height.saturating_sub(2);

    execute!(
        stdout,
        MoveTo(x, y),
        SetBackgroundColor(app.theme.cursor_bg),
        SetForegroundColor(app.theme.fg),
        Print(format!("  {}  ", msg)),
        SetBackgroundColor(app.theme.bg)
    )?;
    Ok(())
}
