//! Flow stages and the three-step progress indicator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of a lookup flow. Exactly one is current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowStage {
    /// Typing the CNPJ
    IdentifierEntry,
    /// Reviewing the company data returned by the registry
    DetailsConfirmation,
    /// Typing phone and e-mail
    ContactEntry,
    /// Contact captured
    Completed,
}

impl FlowStage {
    /// Progress-indicator step this stage belongs to (1-based).
    #[must_use]
    pub fn step_number(self) -> u8 {
        match self {
            Self::IdentifierEntry => 1,
            Self::DetailsConfirmation => 2,
            Self::ContactEntry | Self::Completed => 3,
        }
    }

    /// Heading shown above the form; the completed view has none.
    #[must_use]
    pub fn title(self) -> Option<&'static str> {
        match self {
            Self::Completed => None,
            other => Some(STEPS[usize::from(other.step_number()) - 1].title),
        }
    }

    /// State of each step of the progress indicator.
    #[must_use]
    pub fn progress(self) -> [StepState; 3] {
        let current = self.step_number();
        STEPS.map(|step| {
            if step.number < current {
                StepState::Complete
            } else if step.number == current {
                StepState::Active
            } else {
                StepState::Pending
            }
        })
    }
}

impl fmt::Display for FlowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::IdentifierEntry => "identifier entry",
            Self::DetailsConfirmation => "details confirmation",
            Self::ContactEntry => "contact entry",
            Self::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// One step of the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// 1-based position
    pub number: u8,
    /// Heading
    pub title: &'static str,
}

/// The three steps shown above the contact-section form.
pub const STEPS: [Step; 3] = [
    Step {
        number: 1,
        title: "Digite o CNPJ",
    },
    Step {
        number: 2,
        title: "Dados confirmados",
    },
    Step {
        number: 3,
        title: "Seu contato",
    },
];

/// Rendering state of a progress step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    /// Not reached yet
    Pending,
    /// The step being worked on
    Active,
    /// Passed
    Complete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers() {
        assert_eq!(FlowStage::IdentifierEntry.step_number(), 1);
        assert_eq!(FlowStage::DetailsConfirmation.step_number(), 2);
        assert_eq!(FlowStage::ContactEntry.step_number(), 3);
        assert_eq!(FlowStage::Completed.step_number(), 3);
    }

    #[test]
    fn test_titles() {
        assert_eq!(FlowStage::IdentifierEntry.title(), Some("Digite o CNPJ"));
        assert_eq!(FlowStage::ContactEntry.title(), Some("Seu contato"));
        assert_eq!(FlowStage::Completed.title(), None);
    }

    #[test]
    fn test_progress() {
        use StepState::{Active, Complete, Pending};
        assert_eq!(FlowStage::IdentifierEntry.progress(), [Active, Pending, Pending]);
        assert_eq!(FlowStage::DetailsConfirmation.progress(), [Complete, Active, Pending]);
        assert_eq!(FlowStage::Completed.progress(), [Complete, Complete, Active]);
    }
}
