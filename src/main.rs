use anyhow::Context;
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use studymate_lib::{
    commands::{generate_study_material, CommandError, StudyEvent, StudyRequest},
    config::Config,
    orchestrator_from_config,
    postprocessing::display_lines,
    session_log::SessionLog,
    preprocessing::Cleaner,
    ModeSelection, ResultSource,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "studymate", version, about = "Learn any topic: explain, simplify, examples or quiz")]
struct Cli {
    /// Topics, comma or newline separated. Read from stdin when omitted.
    topics: Vec<String>,

    /// explain, simplify, examples, quiz or all
    #[arg(short, long, default_value = "explain")]
    mode: String,

    /// TOML configuration file (defaults to $STUDYMATE_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Append the session to this file
    #[arg(long, conflicts_with = "no_log")]
    log: Option<PathBuf>,

    /// Do not write a session log even if the config names one
    #[arg(long)]
    no_log: bool,

    /// Emit diagnostics as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("studymate=info,studymate_lib=info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn read_topics(cli: &Cli) -> anyhow::Result<String> {
    if !cli.topics.is_empty() {
        return Ok(cli.topics.join("\n"));
    }
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read topics from stdin")?;
    Ok(input)
}

fn render(event: StudyEvent<'_>) {
    match event {
        StudyEvent::Topic(topic) => println!("\nTopic: {}", topic),
        StudyEvent::Entry(entry) => {
            println!("{}:", entry.mode);
            if entry.result.source == ResultSource::ConfigurationError {
                eprintln!("! {}", entry.result.text);
                return;
            }
            for (idx, line) in display_lines(&entry.result.text).iter().enumerate() {
                println!("   {}. {}", idx + 1, line);
            }
        }
    }
}

const EXIT_EMPTY_INPUT: u8 = 2;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.json_logs);
    run(cli).await
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let request = StudyRequest {
        raw_topics: read_topics(&cli)?,
        selection: ModeSelection::parse(&cli.mode),
    };

    // Blank input wins over a broken config
    if let Err(e) = Cleaner::split_topics(&request.raw_topics) {
        eprintln!("{}", e);
        return Ok(ExitCode::from(EXIT_EMPTY_INPUT));
    }

    let config = Config::resolve(cli.config.as_deref()).context("failed to load configuration")?;
    let orchestrator = orchestrator_from_config(&config).context("failed to configure backends")?;
    info!(backends = ?orchestrator.backend_names(), "StudyMate ready");

    let log_path = if cli.no_log {
        None
    } else {
        cli.log.clone().or_else(|| config.session_log.clone())
    };
    let mut log = match &log_path {
        Some(path) => Some(SessionLog::open(path).await?),
        None => None,
    };

    let outcome = generate_study_material(
        &request,
        &orchestrator,
        config.pause_between_calls(),
        log.as_mut(),
        render,
    )
    .await;

    match outcome {
        Ok(entries) => {
            if let Some(log) = log {
                let path = log.finish().await?;
                eprintln!("Session saved to {}", path.display());
            }
            let offline = entries
                .iter()
                .filter(|e| e.result.source == ResultSource::Fallback)
                .count();
            if offline > 0 {
                eprintln!("{} of {} answers used offline study sheets", offline, entries.len());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(CommandError::Input(e)) => {
            eprintln!("{}", e);
            Ok(ExitCode::from(EXIT_EMPTY_INPUT))
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn broken_config() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "min_output_chars = \"not a number\"").unwrap();
        file
    }

    #[tokio::test]
    async fn blank_topics_exit_with_input_code_even_with_broken_config() {
        let config = broken_config();
        let cli = Cli::parse_from([
            "studymate",
            "--config",
            config.path().to_str().unwrap(),
            "--no-log",
            " , ",
        ]);

        let code = run(cli).await.unwrap();
        assert_eq!(code, ExitCode::from(2));
    }

    #[tokio::test]
    async fn broken_config_fails_once_topics_are_valid() {
        let config = broken_config();
        let cli = Cli::parse_from([
            "studymate",
            "--config",
            config.path().to_str().unwrap(),
            "--no-log",
            "Photosynthesis",
        ]);

        let err = run(cli).await.unwrap_err();
        assert!(err.to_string().contains("failed to load configuration"));
    }
}
