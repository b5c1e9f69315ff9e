//! Column decoding helpers shared by repositories.

use sqlx::{Row, postgres::PgRow};

use crate::money::{Amount, DecimalMoneyCodec, MoneyCodec, PersistedMoney};

/// Decode a money value stored as an amount/currency column pair.
///
/// Codec failures are reported as [`sqlx::Error::ColumnDecode`] with the
/// [`crate::money::MalformedMoneyError`] as the source.
pub(crate) fn try_get_money(
    row: &PgRow,
    amount_col: &str,
    currency_col: &str,
) -> sqlx::Result<Amount> {
    let persisted = PersistedMoney {
        amount: row.try_get(amount_col)?,
        currency: row.try_get(currency_col)?,
    };

    DecimalMoneyCodec::new()
        .decode(&persisted)
        .map_err(|source| sqlx::Error::ColumnDecode {
            index: amount_col.to_string(),
            source: Box::new(source),
        })
}

/// Recover a typed decode failure raised by one of the helpers above.
///
/// Returns the original error untouched when it is not a column decode
/// failure of type `E`.
pub(crate) fn take_decode_error<E>(error: sqlx::Error) -> Result<E, sqlx::Error>
where
    E: std::error::Error + 'static,
{
    match error {
        sqlx::Error::ColumnDecode { index, source } => match source.downcast::<E>() {
            Ok(decoded) => Ok(*decoded),
            Err(source) => Err(sqlx::Error::ColumnDecode { index, source }),
        },
        other => Err(other),
    }
}
