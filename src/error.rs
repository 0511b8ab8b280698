//! Error types for cache construction.
//!
//! Adaptive overwrites are not errors; they are reported through the
//! boolean returned by [`AdaptiveConstruction::insert`].
//!
//! [`AdaptiveConstruction::insert`]: crate::construction::AdaptiveConstruction::insert

use crate::acceptance::Acceptance;
use crate::word::Word;

/// A strict insert contradicted an already-committed classification.
///
/// The affected node keeps `existing`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("conflicting acceptance for word {word:?}: {existing} vs {attempted}")]
pub struct ConflictError<I: core::fmt::Debug> {
    /// The word whose classification was contradicted.
    pub word: Word<I>,
    /// Classification already stored for `word`.
    pub existing: Acceptance,
    /// Classification the rejected insert asserted.
    pub attempted: Acceptance,
}

/// Errors surfaced by cache builders.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CacheError<I: core::fmt::Debug> {
    /// Strict builder only: the observation source is inconsistent.
    #[error(transparent)]
    Conflict(#[from] ConflictError<I>),

    /// The word uses a symbol outside the builder's alphabet.
    #[error("symbol {symbol:?} is not part of the input alphabet")]
    UnknownSymbol {
        /// The offending symbol.
        symbol: I,
    },

    /// The builder does not offer the requested capability.
    #[error("builder does not support {capability}")]
    Unsupported {
        /// Name of the missing capability.
        capability: &'static str,
    },
}

impl<I: core::fmt::Debug> CacheError<I> {
    /// `true` for [`CacheError::Conflict`].
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}
