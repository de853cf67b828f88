//! Line-oriented front end helpers: meta-commands and report rendering.

use pl_protocol::CommandReport;

/// Meta-command that quits the front end.
pub const QUIT: &str = ":quit";
/// Meta-command that restores the default lighting.
pub const RESET: &str = ":default";

/// What one input line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    Quit,
    Reset,
    /// Anything else, including an empty line, is interpreted as a command.
    Command(String),
}

pub fn parse_line(line: &str) -> ReplInput {
    match line.trim() {
        QUIT => ReplInput::Quit,
        RESET => ReplInput::Reset,
        _ => ReplInput::Command(line.to_string()),
    }
}

/// Render a report for the operator.
pub fn render(report: &CommandReport, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string(report)?);
    }

    let verdict = if report.accepted { "accepted" } else { "rejected" };
    Ok(format!(
        "{} {} {{{}}}: {}",
        report.model,
        verdict,
        report.alphabet.join(", "),
        report.outcome.message()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pl_protocol::{DispatchStatus, Intent, ModelKind};

    fn report(outcome: DispatchStatus) -> CommandReport {
        CommandReport::new(
            "turn on light",
            vec!["turn".into(), "on".into(), "light".into()],
            ModelKind::Dfa,
            true,
            vec!["light".into(), "on".into(), "turn".into()],
            outcome,
        )
    }

    #[test]
    fn parses_meta_commands() {
        assert_eq!(parse_line(":quit"), ReplInput::Quit);
        assert_eq!(parse_line("  :default \n"), ReplInput::Reset);
        assert_eq!(
            parse_line("turn on light"),
            ReplInput::Command("turn on light".into())
        );
        assert_eq!(parse_line(""), ReplInput::Command(String::new()));
    }

    #[test]
    fn renders_summary_line() {
        let line = render(
            &report(DispatchStatus::Performed {
                intent: Intent::LightsOn,
            }),
            false,
        )
        .unwrap();
        assert_eq!(line, "DFA accepted {light, on, turn}: action performed: lights on");
    }

    #[test]
    fn renders_json() {
        let line = render(&report(DispatchStatus::NotRecognized), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["outcome"]["status"], "not_recognized");
        assert_eq!(value["model"], "dfa");
    }
}
