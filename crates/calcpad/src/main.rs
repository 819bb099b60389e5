//! calcpad: a keypad calculator for the terminal.
//!
//! ```bash
//! calcpad                   # 2 decimal places (default)
//! calcpad --precision 4     # the classic 4-place rounding
//! calcpad --log calcpad=debug
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
            MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing_subscriber::EnvFilter;

use calcpad::core::state::DEFAULT_PRECISION;
use calcpad::tui::{keypad_area, render, CalculatorApp, InputHandler};

#[derive(Debug, Parser)]
#[command(
    name = "calcpad",
    version,
    about = "Keypad calculator with a two-line expression display"
)]
struct Cli {
    /// Decimal places shown for fractional results
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: u32,

    /// Log filter directive (e.g. "calcpad=debug"); logs go to stderr
    #[arg(long, env = "CALCPAD_LOG")]
    log: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(filter: Option<&str>) {
    // Logging is off unless asked for: the alternate screen owns stdout
    // and stray stderr lines would scribble over it.
    let filter = filter.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
        EnvFilter::new,
    );
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, CalculatorApp::with_precision(cli.precision));

    // Restore the terminal even when the loop failed.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = InputHandler::new();

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.handle_key(input.handle_key(key));
            }
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    let size = terminal.size()?;
                    let frame_area = Rect::new(0, 0, size.width, size.height);
                    let keypad = keypad_area(frame_area);
                    if let Some(index) =
                        app.keypad().hit_test(keypad, mouse.column, mouse.row)
                    {
                        app.press_at(index);
                    }
                }
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
