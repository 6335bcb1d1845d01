use crate::DelayMs;

/// Whether a settlement counts as a success or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Success,
    Failure,
}

/// The two competitors in a race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Defuse,
    Bomb,
}

impl OperationKind {
    #[must_use]
    pub const fn polarity(self) -> Polarity {
        match self {
            OperationKind::Defuse => Polarity::Success,
            OperationKind::Bomb => Polarity::Failure,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            OperationKind::Defuse => "defuse",
            OperationKind::Bomb => "bomb",
        }
    }
}

/// The outcome of the operation that settled first in a race.
///
/// The value is the operation's own delay, carried through as its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub kind: OperationKind,
    pub value: DelayMs,
}

impl Settlement {
    #[must_use]
    pub const fn new(kind: OperationKind, value: DelayMs) -> Self {
        Self { kind, value }
    }

    #[must_use]
    pub const fn polarity(self) -> Polarity {
        self.kind.polarity()
    }

    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self.polarity(), Polarity::Failure)
    }
}
