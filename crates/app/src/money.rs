//! Money Codec
//!
//! Converts between in-memory [`Amount`] values and the [`PersistedMoney`]
//! pair stored in the database and exchanged over JSON. Amounts are exact
//! decimals end to end; nothing passes through binary floating point.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Findable, Money, iso::Currency};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Monetary value with an ISO 4217 currency.
pub type Amount = Money<'static, Currency>;

/// Persisted representation of an [`Amount`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedMoney {
    /// Decimal text, e.g. `"12.50"`.
    pub amount: String,

    /// ISO 4217 alphabetic code, e.g. `"GBP"`.
    pub currency: String,
}

impl PersistedMoney {
    pub fn new(amount: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency: currency.into(),
        }
    }
}

/// Errors raised when a persisted money value cannot be decoded.
///
/// Text that parses but is not in canonical form (`"12.5"`, `"+1.00"`,
/// `"1.005"`) is not an error. It decodes to its exact value.
#[derive(Debug, Error, PartialEq)]
pub enum MalformedMoneyError {
    #[error("unrecognised currency code {0:?}")]
    UnknownCurrency(String),

    #[error("amount {amount:?} is not an exact decimal")]
    InvalidAmount {
        amount: String,
        #[source]
        source: rust_decimal::Error,
    },
}

/// Encodes and decodes money for persistence.
pub trait MoneyCodec: Send + Sync {
    /// Encode a value, rounding it to the currency's minor unit.
    fn encode(&self, value: &Amount) -> PersistedMoney;

    /// Decode a persisted value. Never rounds.
    ///
    /// Any exact decimal is accepted, not only the canonical text `encode`
    /// produces. `encode(decode(x)) == x` therefore holds for canonical `x`
    /// only: `"12.5"` and `"+12.50"` both re-encode as `"12.50"`, and an
    /// amount finer than the currency's minor unit is rounded by `encode`.
    ///
    /// # Errors
    ///
    /// - [`MalformedMoneyError::UnknownCurrency`]: the currency code is not an ISO 4217 code.
    /// - [`MalformedMoneyError::InvalidAmount`]: the amount is not an exact decimal.
    fn decode(&self, persisted: &PersistedMoney) -> Result<Amount, MalformedMoneyError>;
}

/// Decimal text codec using banker's rounding (round half to even) at encode time.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalMoneyCodec;

impl DecimalMoneyCodec {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MoneyCodec for DecimalMoneyCodec {
    fn encode(&self, value: &Amount) -> PersistedMoney {
        let currency = value.currency();

        let mut amount = value
            .amount()
            .round_dp_with_strategy(currency.exponent, RoundingStrategy::MidpointNearestEven);

        // Already rounded, so this only pads trailing zeros.
        amount.rescale(currency.exponent);

        PersistedMoney::new(amount.to_string(), currency.iso_alpha_code)
    }

    fn decode(&self, persisted: &PersistedMoney) -> Result<Amount, MalformedMoneyError> {
        let Some(currency) = Currency::find(&persisted.currency) else {
            return Err(MalformedMoneyError::UnknownCurrency(
                persisted.currency.clone(),
            ));
        };

        let amount = Decimal::from_str_exact(&persisted.amount).map_err(|source| {
            MalformedMoneyError::InvalidAmount {
                amount: persisted.amount.clone(),
                source,
            }
        })?;

        Ok(Money::from_decimal(amount, currency))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::iso::{GBP, JPY, USD};
    use testresult::TestResult;

    use super::*;

    const CODEC: DecimalMoneyCodec = DecimalMoneyCodec::new();

    #[test]
    fn encode_renders_minor_unit_scale() {
        let persisted = CODEC.encode(&Money::from_decimal(Decimal::new(125, 1), GBP));

        assert_eq!(persisted, PersistedMoney::new("12.50", "GBP"));
    }

    #[test]
    fn encode_zero_exponent_currency_has_no_fraction() {
        let persisted = CODEC.encode(&Money::from_decimal(Decimal::new(1500, 0), JPY));

        assert_eq!(persisted, PersistedMoney::new("1500", "JPY"));
    }

    #[test]
    fn encode_rounds_half_to_even() {
        let down = CODEC.encode(&Money::from_decimal(Decimal::new(10_125, 3), USD));
        let up = CODEC.encode(&Money::from_decimal(Decimal::new(10_135, 3), USD));
        let above_half = CODEC.encode(&Money::from_decimal(Decimal::new(101_251, 4), USD));

        assert_eq!(down.amount, "10.12");
        assert_eq!(up.amount, "10.14");
        assert_eq!(above_half.amount, "10.13");
    }

    #[test]
    fn decode_then_encode_preserves_canonical_form() -> TestResult {
        for persisted in [
            PersistedMoney::new("0.00", "GBP"),
            PersistedMoney::new("12.50", "GBP"),
            PersistedMoney::new("-3.07", "USD"),
            PersistedMoney::new("99999999.99", "EUR"),
            PersistedMoney::new("1500", "JPY"),
        ] {
            let decoded = CODEC.decode(&persisted)?;

            assert_eq!(CODEC.encode(&decoded), persisted);
        }

        Ok(())
    }

    #[test]
    fn encode_then_decode_preserves_value() -> TestResult {
        let value = Money::from_decimal(Decimal::new(3_99, 2), GBP);

        assert_eq!(CODEC.decode(&CODEC.encode(&value))?, value);

        Ok(())
    }

    #[test]
    fn decode_does_not_round_extra_precision() -> TestResult {
        let decoded = CODEC.decode(&PersistedMoney::new("1.005", "GBP"))?;

        assert_eq!(*decoded.amount(), Decimal::new(1005, 3));

        Ok(())
    }

    #[test]
    fn non_canonical_text_decodes_exactly_and_encodes_canonically() -> TestResult {
        for (text, canonical) in [("12.5", "12.50"), ("+1.00", "1.00"), ("007", "7.00")] {
            let decoded = CODEC.decode(&PersistedMoney::new(text, "GBP"))?;
            let reencoded = CODEC.encode(&decoded);

            assert_eq!(
                decoded,
                CODEC.decode(&PersistedMoney::new(canonical, "GBP"))?,
                "{text:?} should decode to the same value as {canonical:?}"
            );
            assert_eq!(reencoded.amount, canonical, "re-encoding {text:?}");
        }

        Ok(())
    }

    #[test]
    fn decode_unknown_currency_fails() {
        let result = CODEC.decode(&PersistedMoney::new("1.00", "XYZ"));

        assert_eq!(
            result,
            Err(MalformedMoneyError::UnknownCurrency("XYZ".to_string()))
        );
    }

    #[test]
    fn decode_unparsable_amount_fails() {
        for amount in ["", "abc", "1,50", "1.5e2", "NaN"] {
            let result = CODEC.decode(&PersistedMoney::new(amount, "GBP"));

            assert!(
                matches!(result, Err(MalformedMoneyError::InvalidAmount { .. })),
                "expected InvalidAmount for {amount:?}, got {result:?}"
            );
        }
    }
}
