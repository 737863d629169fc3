use cardform::app::App;
use cardform::cli::Cli;
use cardform::config::Config;
use cardform::error::Result;
use cardform::logging::{self, LogTarget};
use cardform::snapshot::snapshot;
use cardform::state::Outcome;
use cardform::terminal::{Terminal, TerminalEvent};
use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?;
    let log_file = cli.log_file.as_deref().or(config.logging.file.as_deref());

    if cli.snapshot {
        let target = log_file.map_or(LogTarget::Stderr, LogTarget::File);
        logging::init(&config.logging, target)?;
        let json = snapshot(&config, &cli.assignments, cli.submit)?;
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(ExitCode::SUCCESS);
    }

    logging::init(&config.logging, LogTarget::interactive(log_file))?;

    let mut terminal = Terminal::new();
    terminal.enter()?;
    let result = event_loop(&mut terminal, App::new(&config));
    terminal.leave()?;

    match result? {
        Some(Outcome::Completed) => {
            println!("Card details added.");
            Ok(ExitCode::SUCCESS)
        }
        Some(Outcome::Cancelled) | None => Ok(ExitCode::from(130)),
    }
}

fn event_loop(terminal: &mut Terminal, mut app: App) -> Result<Option<Outcome>> {
    let mut render_requested = true;

    loop {
        if render_requested {
            terminal.draw(&app.render())?;
            render_requested = false;
        }

        if terminal.poll(Duration::from_millis(100))? {
            match terminal.read_event()? {
                TerminalEvent::Key(key_event) => {
                    app.handle_key(key_event);
                    render_requested = true;
                }
                TerminalEvent::Resize { .. } => {
                    render_requested = true;
                }
            }
        }

        if app.should_exit() {
            break;
        }
    }

    Ok(app.outcome())
}
