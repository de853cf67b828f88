use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::intent::{Intent, ModelKind};

/// What happened after the automaton run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DispatchStatus {
    /// The automaton accepted and the actuator applied the intent.
    Performed { intent: Intent },
    /// The automaton accepted but its alphabet matched no known intent.
    NotRecognized,
    /// The automaton rejected the token sequence; the intent table was not consulted.
    NotValid,
    /// The intent matched but the actuator refused it. No state was changed.
    Rejected { intent: Intent, reason: String },
}

impl DispatchStatus {
    /// Whether an actuator call actually took effect.
    pub fn is_performed(&self) -> bool {
        matches!(self, DispatchStatus::Performed { .. })
    }

    /// One-line operator message for the front end.
    pub fn message(&self) -> String {
        match self {
            DispatchStatus::Performed { intent } => format!("action performed: {intent}"),
            DispatchStatus::NotRecognized => "command not recognized".to_string(),
            DispatchStatus::NotValid => "command not valid".to_string(),
            DispatchStatus::Rejected { intent, reason } => {
                format!("{intent} rejected: {reason}")
            }
        }
    }
}

/// Full record of one interpreted command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandReport {
    /// Unique command ID (UUIDv7 for time-sortability).
    pub id: Uuid,
    /// Raw command text as typed by the operator.
    pub command: String,
    /// Normalized tokens the automaton was built from.
    pub tokens: Vec<String>,
    /// Automaton model chosen by the selector.
    pub model: ModelKind,
    /// Whether the automaton accepted the token sequence.
    pub accepted: bool,
    /// Distinct symbols of the automaton, in sorted order (`ε` for epsilon).
    pub alphabet: Vec<String>,
    /// Dispatch outcome.
    pub outcome: DispatchStatus,
    /// Processing latency in microseconds.
    pub latency_us: u64,
    /// When the command finished processing.
    pub processed_at: DateTime<Utc>,
}

impl CommandReport {
    pub fn new(
        command: impl Into<String>,
        tokens: Vec<String>,
        model: ModelKind,
        accepted: bool,
        alphabet: Vec<String>,
        outcome: DispatchStatus,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            command: command.into(),
            tokens,
            model,
            accepted,
            alphabet,
            outcome,
            latency_us: 0,
            processed_at: Utc::now(),
        }
    }

    pub fn with_latency_us(mut self, latency_us: u64) -> Self {
        self.latency_us = latency_us;
        self
    }
}
