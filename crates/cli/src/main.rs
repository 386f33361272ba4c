// Tutor CLI - grammar correction against a tutor backend service

mod exit_codes;
mod session;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use tutor_client::{HealthStatus, TutorClient};
use tutor_config::Settings;
use tutor_render::{render_result_html, render_result_text, troubleshooting_message};

use exit_codes::{tutor_exit_code, EXIT_ERROR, EXIT_SERVICE, EXIT_SUCCESS};
use session::{CorrectionSession, UiBindings};

#[derive(Parser)]
#[command(name = "tutor")]
#[command(about = "Grammar correction against a tutor backend service")]
#[command(version)]
struct Cli {
    /// Backend base URL (overrides the settings file)
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a sentence for correction
    #[command(after_help = "\
Examples:
  tutor correct 'I is happy'
  tutor correct 'She go home' --difficulty advanced
  tutor correct 'I is happy' --html -o result.html")]
    Correct {
        /// Text to check
        text: String,

        /// Difficulty level sent to the backend (easy, intermediate, advanced)
        #[arg(long, short = 'd')]
        difficulty: Option<String>,

        /// Emit an HTML fragment instead of plain text
        #[arg(long)]
        html: bool,

        /// Output file (omit for stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Suppress progress output on stderr
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Probe the backend's /health endpoint
    Health,

    /// Interactive loop: one sentence per line, blank line or EOF exits
    Repl {
        /// Difficulty level sent to the backend
        #[arg(long, short = 'd')]
        difficulty: Option<String>,

        /// Suppress the health indicator and progress output
        #[arg(long, short = 'q')]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = Settings::load();
    let server = cli.server.unwrap_or(settings.server_url);

    let result = match cli.command {
        Commands::Correct {
            text,
            difficulty,
            html,
            output,
            quiet,
        } => {
            let difficulty = difficulty.unwrap_or(settings.default_difficulty);
            cmd_correct(&server, &text, &difficulty, html, output, quiet)
        }
        Commands::Health => cmd_health(&server),
        Commands::Repl { difficulty, quiet } => {
            let difficulty = difficulty.unwrap_or(settings.default_difficulty);
            cmd_repl(&server, &difficulty, quiet)
        }
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn io(msg: impl Into<String>) -> Self {
        Self {
            code: EXIT_ERROR,
            message: msg.into(),
            hint: None,
        }
    }

    /// Build from a failed correction attempt. Validation failures
    /// stay inline; everything else gets the troubleshooting guidance
    /// wrapped around the raw detail.
    fn correction(err: tutor_client::TutorError) -> Self {
        let code = tutor_exit_code(&err);
        let message = match &err {
            tutor_client::TutorError::Validation(_) => err.to_string(),
            _ => troubleshooting_message(&err.to_string()),
        };
        Self {
            code,
            message,
            hint: None,
        }
    }
}

// ── correct ─────────────────────────────────────────────────────────

fn cmd_correct(
    server: &str,
    text: &str,
    difficulty: &str,
    html: bool,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    let stderr_tty = atty::is(atty::Stream::Stderr);
    let show_progress = !quiet && stderr_tty;

    if show_progress {
        eprintln!("Checking your sentence...");
    }

    let client = TutorClient::new(server);
    let resp = client
        .correct(text, difficulty)
        .map_err(CliError::correction)?;

    let rendered = if html {
        render_result_html(&resp)
    } else {
        render_result_text(&resp)
    };

    match output {
        Some(path) => std::fs::write(&path, rendered)
            .map_err(|e| CliError::io(format!("cannot write {}: {}", path.display(), e)))?,
        None => {
            print!("{}", rendered);
            io::stdout()
                .flush()
                .map_err(|e| CliError::io(e.to_string()))?;
        }
    }

    Ok(())
}

// ── health ──────────────────────────────────────────────────────────

fn cmd_health(server: &str) -> Result<(), CliError> {
    let client = TutorClient::new(server);
    let status = client.health();
    match status {
        HealthStatus::Connected => {
            println!("{}", status.label());
            Ok(())
        }
        HealthStatus::Unreachable(ref detail) => {
            // Detail is developer-facing; the label is the indicator.
            eprintln!("{}", detail);
            Err(CliError {
                code: EXIT_SERVICE,
                message: format!("{} ({})", status.label(), server),
                hint: Some("is the tutor backend running?".into()),
            })
        }
    }
}

// ── repl ────────────────────────────────────────────────────────────

/// The interactive rendition of the form-handler loop: probe once at
/// startup, then submit each line through the session state machine.
fn cmd_repl(server: &str, difficulty: &str, quiet: bool) -> Result<(), CliError> {
    let stderr_tty = atty::is(atty::Stream::Stderr);
    let show_progress = !quiet && stderr_tty;

    let ui = UiBindings {
        set_loading: Box::new(move |on| {
            if show_progress && on {
                eprintln!("Checking your sentence...");
            }
        }),
        show_result: Box::new(|resp| {
            print!("{}", render_result_text(resp));
        }),
        show_error: Box::new(|message| {
            for line in message.lines() {
                eprintln!("{}", line);
            }
        }),
        set_health: Box::new(move |status| {
            if !quiet {
                eprintln!("[{}]", status.label());
            }
            if let HealthStatus::Unreachable(detail) = status {
                if show_progress {
                    eprintln!("health probe: {}", detail);
                }
            }
        }),
    };

    let mut session = CorrectionSession::new(TutorClient::new(server), difficulty, ui);

    // Advisory only; the loop runs regardless of the probe result.
    session.probe_health();

    let stdin = io::stdin();
    loop {
        if show_progress {
            eprint!("> ");
        }
        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| CliError::io(e.to_string()))?;
        if read == 0 || line.trim().is_empty() {
            break;
        }
        session.submit(&line);
    }

    Ok(())
}
