//! Command interpreter — raw text in, `CommandReport` out.
//!
//! Pipeline: normalize -> select model -> build + simulate -> dispatch.
//! Nothing is kept between commands; each automaton is dropped after its run.

use std::time::Instant;

use pl_actuators::Actuator;
use pl_automata::{Selector, Vocabulary};
use pl_protocol::CommandReport;

use crate::config::AgentConfig;
use crate::dispatcher;
use crate::normalizer::Normalizer;

/// Interprets commands against an injected actuator.
#[derive(Debug, Clone, Default)]
pub struct CommandInterpreter {
    normalizer: Normalizer,
    vocabulary: Vocabulary,
    selector: Selector,
}

impl CommandInterpreter {
    pub fn new(normalizer: Normalizer, vocabulary: Vocabulary, selector: Selector) -> Self {
        Self {
            normalizer,
            vocabulary,
            selector,
        }
    }

    pub fn from_config(config: &AgentConfig) -> Self {
        Self::new(
            Normalizer::new(config.synonyms.clone()),
            Vocabulary::from_words(config.vocabulary.iter().cloned()),
            Selector::new(config.threshold),
        )
    }

    /// Interpret one raw command. Always produces a report; failures are
    /// carried in its `outcome`.
    pub fn interpret(&self, raw: &str, actuator: &mut dyn Actuator) -> CommandReport {
        let start = Instant::now();

        let tokens = self.normalizer.tokenize(raw);
        let run = pl_automata::run(&tokens, &self.vocabulary, &self.selector);
        let outcome = dispatcher::dispatch(run.accepted, &run.alphabet, actuator);

        let report = CommandReport::new(
            raw,
            tokens,
            run.model,
            run.accepted,
            run.alphabet_strings(),
            outcome,
        )
        .with_latency_us(elapsed_micros(start));

        tracing::info!(
            command_id = %report.id,
            model = %report.model,
            accepted = report.accepted,
            outcome = %report.outcome.message(),
            latency_us = report.latency_us,
            "command interpreted"
        );
        report
    }
}

/// Microseconds since `start`, saturating at `u64::MAX`.
fn elapsed_micros(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX)
}
