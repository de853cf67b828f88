//! Parlance — interactive natural-language command interpreter.
//!
//! Reads one command per line from stdin, interprets it with a freshly built
//! automaton and drives the console actuator.

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use pl_actuators::ConsoleActuator;
use pl_agent::config::{AgentConfig, LogFormat};
use pl_agent::interpreter::CommandInterpreter;
use pl_agent::repl::{self, ReplInput};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── Load config ─────────────────────────────────────────────
    let config_path = std::env::args().nth(1);
    let config = AgentConfig::load(config_path.as_deref())?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.init(),
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = config_path.as_deref().unwrap_or("<defaults>"),
        threshold = config.threshold,
        keywords = config.vocabulary.len(),
        synonyms = config.synonyms.len(),
        "parlance starting"
    );

    let interpreter = CommandInterpreter::from_config(&config);
    let mut console = ConsoleActuator::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("end of input");
                    break;
                };
                match repl::parse_line(&line) {
                    ReplInput::Quit => break,
                    ReplInput::Reset => {
                        console.reset();
                        println!("lighting: {}", console.lighting());
                    }
                    ReplInput::Command(command) => {
                        let report = interpreter.interpret(&command, &mut console);
                        println!("{}", repl::render(&report, config.report_json)?);
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutdown signal received");
                break;
            }
        }
    }

    tracing::info!("parlance stopped");
    Ok(())
}
