//! Tri-state acceptance and provenance tags stored on cache nodes.

use core::fmt;

/// Classification of a word: accepted, rejected, or not (yet) known.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Acceptance {
    /// The word is accepted.
    Accept,
    /// The word is rejected.
    Reject,
    /// Nothing has been committed for the word.
    #[default]
    Unknown,
}

impl Acceptance {
    /// Committed acceptance for a boolean classification.
    pub const fn from_bool(accept: bool) -> Self {
        if accept {
            Self::Accept
        } else {
            Self::Reject
        }
    }

    /// Boolean projection. `Unknown` projects to `false`.
    pub const fn to_bool(self) -> bool {
        matches!(self, Self::Accept)
    }

    /// `Some(bool)` for a committed value, `None` for `Unknown`.
    pub const fn committed(self) -> Option<bool> {
        match self {
            Self::Accept => Some(true),
            Self::Reject => Some(false),
            Self::Unknown => None,
        }
    }

    /// `true` if a value has been committed.
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// `true` iff this is a committed value that differs from `accept`.
    ///
    /// `Unknown` never conflicts.
    pub const fn conflicts(self, accept: bool) -> bool {
        match self {
            Self::Accept => !accept,
            Self::Reject => accept,
            Self::Unknown => false,
        }
    }
}

impl From<bool> for Acceptance {
    fn from(accept: bool) -> Self {
        Self::from_bool(accept)
    }
}

impl From<Option<bool>> for Acceptance {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Unknown, Self::from_bool)
    }
}

impl fmt::Display for Acceptance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Accept => "accept",
            Self::Reject => "reject",
            Self::Unknown => "unknown",
        })
    }
}

/// Who asserted a committed value.
///
/// A `User` fact outranks an `Oracle` fact: only another `User` insert may
/// overwrite it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Origin {
    /// Automatically observed, e.g. answered by the system under learning.
    #[default]
    Oracle,
    /// Asserted by a user, e.g. a hand-supplied counterexample.
    User,
}

impl Origin {
    /// Whether a committed value tagged `self` may be replaced by one tagged `incoming`.
    pub const fn yields_to(self, incoming: Origin) -> bool {
        matches!(incoming, Origin::User) || matches!(self, Origin::Oracle)
    }
}
