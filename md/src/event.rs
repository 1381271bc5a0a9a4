//! Event identifiers passed from components to the mediator

use serde::{Deserialize, Serialize};

/// Tag a component sends to its mediator after finishing an operation
///
/// Every operation is named after the identifier it emits: `do_a` emits `A`,
/// `do_d` emits `D`. The client uses the same tags to pick which operation to
/// trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventId {
    A,
    B,
    C,
    D,
}

impl EventId {
    pub const ALL: [EventId; 4] = [Self::A, Self::B, Self::C, Self::D];

    pub fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl std::str::FromStr for EventId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(format!("Unknown event: {} (expected one of A, B, C, D)", s)),
        }
    }
}
