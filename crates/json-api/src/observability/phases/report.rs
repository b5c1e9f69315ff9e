//! Phase reports and failure classes.

use std::{
    any::type_name,
    fmt::{Display, Formatter, Result as FmtResult},
};

use super::handler::{HandlerIdentity, short_type_name};

/// Marker written for an absent handler or failure.
pub(crate) const NONE_MARKER: &str = "-";

/// What, if anything, made a request fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum FailureClass {
    #[default]
    None,

    /// The handler was entered but never returned.
    Panic,

    /// Short type name of the error the handler returned.
    Error(&'static str),
}

impl FailureClass {
    pub(crate) fn of<E: ?Sized>() -> Self {
        Self::Error(short_type_name(type_name::<E>()))
    }

    pub(crate) fn of_val<E: ?Sized>(_error: &E) -> Self {
        Self::of::<E>()
    }

    pub(crate) fn is_failure(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl Display for FailureClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::None => f.write_str(NONE_MARKER),
            Self::Panic => f.write_str("Panic"),
            Self::Error(name) => f.write_str(name),
        }
    }
}

/// Timing summary of one completed request.
///
/// Renders as a single `;` separated line:
/// `path;handler;status;failure;{total}ms;{processing}ms;{last}ms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PhaseReport {
    pub(crate) path: String,
    pub(crate) handler: HandlerIdentity,
    pub(crate) status: u16,
    pub(crate) failure: FailureClass,
    pub(crate) total_ms: u64,
    pub(crate) processing_ms: u64,
    pub(crate) last_phase_ms: u64,
}

impl Display for PhaseReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{};{};{};{};{}ms;{}ms;{}ms",
            self.path,
            self.handler,
            self.status,
            self.failure,
            self.total_ms,
            self.processing_ms,
            self.last_phase_ms
        )
    }
}
