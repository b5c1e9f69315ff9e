//! Order State

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle state of an order.
///
/// Persisted and serialized by symbolic name, never by position, so members
/// may be added or reordered without corrupting stored orders. Which
/// transitions are legal is decided by the ordering workflow, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    Init,
    Paid,
    Brewing,
    Brewed,
    Taken,
    Cancelled,
}

impl OrderState {
    /// Every member, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Init,
        Self::Paid,
        Self::Brewing,
        Self::Brewed,
        Self::Taken,
        Self::Cancelled,
    ];

    /// Symbolic name used for persistence.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Init => "INIT",
            Self::Paid => "PAID",
            Self::Brewing => "BREWING",
            Self::Brewed => "BREWED",
            Self::Taken => "TAKEN",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl Display for OrderState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A persisted state name that is not a member of [`OrderState`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order state {0:?}")]
pub struct UnknownOrderState(pub String);

impl FromStr for OrderState {
    type Err = UnknownOrderState;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == name)
            .ok_or_else(|| UnknownOrderState(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn paid_encodes_by_name() {
        assert_eq!(OrderState::Paid.as_str(), "PAID");
        assert_eq!(OrderState::Paid.to_string(), "PAID");
    }

    #[test]
    fn every_state_round_trips_through_its_name() -> TestResult {
        for state in OrderState::ALL {
            assert_eq!(state.as_str().parse::<OrderState>()?, state);
        }

        Ok(())
    }

    #[test]
    fn names_do_not_depend_on_declaration_position() -> TestResult {
        // A stored value is resolved by name alone, whatever position the
        // member holds in `ALL`.
        let mut reordered = OrderState::ALL;
        reordered.reverse();

        for state in reordered {
            assert_eq!(state.as_str().parse::<OrderState>()?, state);
        }

        assert_eq!("PAID".parse::<OrderState>()?, OrderState::Paid);

        Ok(())
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "1".parse::<OrderState>(),
            Err(UnknownOrderState("1".to_string()))
        );
        assert_eq!(
            "paid".parse::<OrderState>(),
            Err(UnknownOrderState("paid".to_string()))
        );
    }

    #[test]
    fn json_uses_symbolic_names() -> TestResult {
        assert_eq!(serde_json::to_string(&OrderState::Brewing)?, "\"BREWING\"");
        assert_eq!(
            serde_json::from_str::<OrderState>("\"CANCELLED\"")?,
            OrderState::Cancelled
        );

        Ok(())
    }
}
