//! Action dispatcher — maps an accepted automaton alphabet to an actuator call.
//!
//! Matching is exact set equality against a static table: no partial or
//! fuzzy matching, no ordering. DFA alphabets never contain epsilon, so the
//! DFA and NFA entries share one table without overlapping.
//!
//! Out-of-vocabulary tokens fold into a single `ε` on the NFA path, so the
//! NFA volume entry (which still names `50`) can never match. Filler words on
//! the DFA path stay in the alphabet and likewise defeat a match.

use pl_actuators::{Actuator, ActuatorResult};
use pl_automata::{Alphabet, Symbol};
use pl_protocol::{DispatchStatus, Intent};

/// One row of the intent table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentPattern {
    /// Literal symbols the alphabet must contain, and nothing else.
    pub symbols: &'static [&'static str],
    /// Whether the alphabet must also contain epsilon.
    pub epsilon: bool,
    pub intent: Intent,
}

impl IntentPattern {
    /// The exact alphabet this pattern stands for.
    pub fn alphabet(&self) -> Alphabet {
        let mut alphabet: Alphabet = self.symbols.iter().map(|s| Symbol::literal(*s)).collect();
        if self.epsilon {
            alphabet.insert(Symbol::Epsilon);
        }
        alphabet
    }

    pub fn matches(&self, alphabet: &Alphabet) -> bool {
        self.alphabet() == *alphabet
    }
}

/// Recognized alphabets, DFA entries first.
pub const INTENT_TABLE: &[IntentPattern] = &[
    IntentPattern {
        symbols: &["turn", "on", "light"],
        epsilon: false,
        intent: Intent::LightsOn,
    },
    IntentPattern {
        symbols: &["turn", "off", "light"],
        epsilon: false,
        intent: Intent::LightsOff,
    },
    IntentPattern {
        symbols: &["change", "volume", "50"],
        epsilon: false,
        intent: Intent::SetVolume(50),
    },
    IntentPattern {
        symbols: &["turn", "on", "light"],
        epsilon: true,
        intent: Intent::LightsOn,
    },
    IntentPattern {
        symbols: &["turn", "off", "light"],
        epsilon: true,
        intent: Intent::LightsOff,
    },
    IntentPattern {
        symbols: &["change", "volume", "50"],
        epsilon: true,
        intent: Intent::SetVolume(50),
    },
];

/// Look up the intent whose pattern equals `alphabet` exactly.
pub fn match_intent(alphabet: &Alphabet) -> Option<Intent> {
    INTENT_TABLE
        .iter()
        .find(|pattern| pattern.matches(alphabet))
        .map(|pattern| pattern.intent)
}

/// Invoke the actuator operation an intent stands for.
pub fn apply(intent: Intent, actuator: &mut dyn Actuator) -> ActuatorResult<()> {
    match intent {
        Intent::LightsOn => actuator.set_lighting(true),
        Intent::LightsOff => actuator.set_lighting(false),
        Intent::SetVolume(percent) => actuator.set_volume(i32::from(percent)),
    }
}

/// Dispatch an automaton run.
///
/// A rejected run short-circuits to `NotValid` without consulting the table.
pub fn dispatch(accepted: bool, alphabet: &Alphabet, actuator: &mut dyn Actuator) -> DispatchStatus {
    if !accepted {
        return DispatchStatus::NotValid;
    }

    let Some(intent) = match_intent(alphabet) else {
        tracing::debug!(alphabet_len = alphabet.len(), "no intent matches alphabet");
        return DispatchStatus::NotRecognized;
    };

    match apply(intent, actuator) {
        Ok(()) => DispatchStatus::Performed { intent },
        Err(e) => {
            tracing::warn!(intent = %intent, error = %e, "actuator rejected intent");
            DispatchStatus::Rejected {
                intent,
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pl_actuators::{ActuatorCall, MockActuator};

    fn alphabet(symbols: &[&str], epsilon: bool) -> Alphabet {
        let mut alphabet: Alphabet = symbols.iter().map(|s| Symbol::literal(*s)).collect();
        if epsilon {
            alphabet.insert(Symbol::Epsilon);
        }
        alphabet
    }

    #[test]
    fn exact_dfa_alphabets_match() {
        assert_eq!(
            match_intent(&alphabet(&["light", "on", "turn"], false)),
            Some(Intent::LightsOn)
        );
        assert_eq!(
            match_intent(&alphabet(&["turn", "off", "light"], false)),
            Some(Intent::LightsOff)
        );
        assert_eq!(
            match_intent(&alphabet(&["change", "volume", "50"], false)),
            Some(Intent::SetVolume(50))
        );
    }

    #[test]
    fn epsilon_augmented_alphabets_match() {
        assert_eq!(
            match_intent(&alphabet(&["turn", "on", "light"], true)),
            Some(Intent::LightsOn)
        );
        assert_eq!(
            match_intent(&alphabet(&["turn", "off", "light"], true)),
            Some(Intent::LightsOff)
        );
    }

    #[test]
    fn supersets_and_subsets_do_not_match() {
        assert_eq!(match_intent(&alphabet(&["turn", "on", "the", "light"], false)), None);
        assert_eq!(match_intent(&alphabet(&["turn", "on"], false)), None);
        assert_eq!(match_intent(&alphabet(&["change", "volume"], true)), None);
        assert_eq!(match_intent(&Alphabet::new()), None);
    }

    #[test]
    fn typed_epsilon_is_not_epsilon() {
        let mut typed = alphabet(&["turn", "on", "light"], false);
        typed.insert(Symbol::literal("ε"));
        assert_eq!(match_intent(&typed), None);
    }

    #[test]
    fn rejected_run_is_not_valid() {
        let mut mock = MockActuator::new();
        let status = dispatch(false, &alphabet(&["turn", "on", "light"], false), &mut mock);
        assert_eq!(status, DispatchStatus::NotValid);
        assert!(mock.calls().is_empty());
    }

    #[test]
    fn unmatched_alphabet_is_not_recognized() {
        let mut mock = MockActuator::new();
        let status = dispatch(true, &alphabet(&["turn", "on", "the", "light"], false), &mut mock);
        assert_eq!(status, DispatchStatus::NotRecognized);
        assert!(mock.calls().is_empty());
    }

    #[test]
    fn matched_alphabet_calls_actuator() {
        let mut mock = MockActuator::new();
        let status = dispatch(true, &alphabet(&["change", "volume", "50"], false), &mut mock);
        assert_eq!(
            status,
            DispatchStatus::Performed {
                intent: Intent::SetVolume(50)
            }
        );
        assert_eq!(mock.calls(), [ActuatorCall::Volume(50)]);
    }

    #[test]
    fn actuator_failure_is_reported() {
        let mut mock = MockActuator::failing("display unavailable");
        let status = dispatch(true, &alphabet(&["turn", "off", "light"], false), &mut mock);
        match status {
            DispatchStatus::Rejected { intent, reason } => {
                assert_eq!(intent, Intent::LightsOff);
                assert!(reason.contains("display unavailable"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn apply_out_of_range_volume_is_rejected() {
        let mut mock = MockActuator::new();
        assert!(apply(Intent::SetVolume(150), &mut mock).is_err());
        assert!(mock.volume().is_none());
    }
}
