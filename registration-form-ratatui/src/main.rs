//! # student-registration
//!
//! Fill in a student registration in the terminal and send it to the
//! registration endpoint.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use registration::{DEFAULT_ENDPOINT, HttpSubmitter, RegistrationConfig};
use registration_form_ratatui::{FormView, run};
use tracing_subscriber::EnvFilter;

/// Student registration form.
#[derive(Parser, Debug)]
#[command(name = "student-registration", version, about, long_about = None)]
struct Cli {
    /// URL the registration is POSTed to.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Heading shown above the form.
    #[arg(long)]
    title: Option<String>,

    /// Write logs to this file. Without it logs are discarded, since the
    /// terminal is taken by the form.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable verbose logging. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    match &cli.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .init();
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let config = RegistrationConfig::new(&cli.endpoint)?;
    let submitter = HttpSubmitter::new(&config)?;
    tracing::info!(endpoint = %config.endpoint, "student registration starting");

    let mut view = FormView::new();
    if let Some(title) = cli.title {
        view = view.with_title(title);
    }

    run(&mut view, &submitter).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_production_endpoint() {
        let cli = Cli::try_parse_from(["student-registration"]).unwrap();
        assert_eq!(cli.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cli.verbose, 0);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "student-registration",
            "--endpoint",
            "http://127.0.0.1:8000/api/students/",
            "--title",
            "Spring Intake",
            "--log-file",
            "registration.log",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.endpoint, "http://127.0.0.1:8000/api/students/");
        assert_eq!(cli.title.as_deref(), Some("Spring Intake"));
        assert_eq!(cli.log_file, Some(PathBuf::from("registration.log")));
        assert_eq!(cli.verbose, 2);
    }
}
