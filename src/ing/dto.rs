use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::ConvertError;
use crate::normalize::signed_amount;
use crate::types::Direction;

/// One row of the ING export, exactly as named in the CSV header.
///
/// A missing column surfaces as a deserialize error from the `csv` crate,
/// which fails the whole run.
#[derive(Debug, Deserialize)]
pub struct IngRowRaw {
    #[serde(rename = "Rekening")]
    pub account: String,
    #[serde(rename = "Tegenrekening")]
    pub counter_account: String,
    #[serde(rename = "Datum")]
    pub date: String,
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Af Bij")]
    pub direction: String,
    #[serde(rename = "Bedrag (EUR)")]
    pub amount: String,
    #[serde(rename = "Naam / Omschrijving")]
    pub description: String,
    #[serde(rename = "Mededelingen")]
    pub memo: String,
}

/// Typed ING row, validated at the parse boundary.
///
/// Date and amount are real types here; rows that cannot be represented are
/// rejected up front instead of failing somewhere deep in the pipeline.
#[derive(Debug, Clone)]
pub struct IngRow {
    pub account: String,
    pub counter_account: String,
    pub posted: NaiveDate,
    pub code: String,
    pub direction: Direction,
    pub amount: Decimal,
    pub description: String,
    pub memo: String,
}

impl TryFrom<IngRowRaw> for IngRow {
    type Error = ConvertError;

    fn try_from(raw: IngRowRaw) -> Result<Self, Self::Error> {
        let posted = NaiveDate::parse_from_str(raw.date.trim(), "%Y%m%d")
            .map_err(|_| ConvertError::InvalidDate(raw.date.clone()))?;

        let direction = match raw.direction.trim() {
            "Af" => Direction::Debit,
            "Bij" => Direction::Credit,
            other => return Err(ConvertError::UnknownDirection(other.to_string())),
        };

        let amount = signed_amount(&raw.amount, direction)?;

        Ok(IngRow {
            // ING pads account numbers with spaces
            account: raw.account.replace(' ', ""),
            counter_account: raw.counter_account.trim().to_string(),
            posted,
            code: raw.code.trim().to_string(),
            direction,
            amount,
            description: raw.description,
            memo: raw.memo,
        })
    }
}
