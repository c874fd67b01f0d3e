use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, bail};
use clap::Parser;
use smartfold::{
    COMMAND_NAME, DEFAULT_DOUBLE_TAP_WINDOW_MS, Document, Editor, ManualClock, Position, Settings,
    SmartFold, TextBuffer,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    version,
    about = "Toggle structure-aware folds in a Markdown document and print what stays visible"
)]
struct Cli {
    /// Cursor position as LINE or LINE:COLUMN, both starting at 1
    #[arg(long, value_parser = parse_cursor)]
    cursor: Position,
    /// Number of times to run the toggle
    #[arg(long, default_value_t = 1)]
    taps: usize,
    /// Simulated delay between consecutive taps in milliseconds
    #[arg(long = "interval-ms", default_value_t = 1000)]
    interval_ms: u64,
    #[command(flatten)]
    settings: SettingsOpts,
    /// Markdown file to read; standard input when omitted
    file: Option<PathBuf>,
}

#[derive(clap::Args, Clone, Copy)]
struct SettingsOpts {
    /// Double-tap window in milliseconds, clamped to 120..=1500
    #[arg(long = "window-ms", default_value_t = DEFAULT_DOUBLE_TAP_WINDOW_MS)]
    window_ms: u64,
    /// Do not escalate a fast repeat to the parent block
    #[arg(long = "no-parent-escalation")]
    no_parent_escalation: bool,
}

impl From<SettingsOpts> for Settings {
    fn from(opts: SettingsOpts) -> Self {
        Settings::new(!opts.no_parent_escalation, opts.window_ms)
    }
}

fn parse_cursor(arg: &str) -> Result<Position, String> {
    let (line, col) = arg.split_once(':').unwrap_or((arg, "1"));
    let parse = |s: &str, what: &str| {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(|| format!("{what} must be a positive integer, got `{s}`"))
    };
    Ok(Position::new(parse(line, "line")?, parse(col, "column")?))
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("SMARTFOLD_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Run "Toggle Smart Fold" against a document and print the folded view.
///
/// Taps are spaced by `--interval-ms` on a simulated clock, so a short
/// interval exercises the double-tap escalation deterministically. Toggles
/// that find nothing to fold are skipped silently.
///
/// # Examples
///
/// ```sh
/// # Fold the block around line 4
/// smartfold notes.md --cursor 4
///
/// # Double tap: fold the child, then its parent
/// smartfold notes.md --cursor 4 --taps 2 --interval-ms 100
/// ```
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let text = read_input(cli.file.as_ref())?;
    let mut view = TextBuffer::from_text(&text);
    if cli.cursor.line >= view.line_count() {
        bail!(
            "cursor line {} is past the end of the document ({} lines)",
            cli.cursor.line + 1,
            view.line_count()
        );
    }
    view.set_cursor(cli.cursor);

    let clock = ManualClock::new();
    let mut fold = SmartFold::with_clock(cli.settings.into(), &clock);
    for tap in 0..cli.taps {
        if tap > 0 {
            clock.advance_ms(cli.interval_ms);
        }
        match fold.toggle(Some(&mut view)) {
            Ok(toggled) => debug!(command = COMMAND_NAME, ?toggled, "tap {}", tap + 1),
            Err(err) => debug!(command = COMMAND_NAME, %err, "tap {} skipped", tap + 1),
        }
    }

    for line in view.visible_lines() {
        println!("{line}");
    }
    let cursor = view.cursor();
    println!("cursor: {}:{}", cursor.line + 1, cursor.ch + 1);
    Ok(())
}
