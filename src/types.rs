use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::fitid::FitIdRegistry;
use crate::ing::IngRow;
use crate::normalize::{extract_time, sanitize_text};

/// Booking direction from the `Af Bij` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    /// `Af`: money left the account
    Debit,
    /// `Bij`: money came in
    Credit,
}

/// OFX transaction type, derived from the ING mutation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrnType {
    Credit,
    Debit,
    Payment,
    Pos,
    Atm,
    DirectDebit,
    DirectDep,
    Other,
}

impl TrnType {
    /// Classify an ING mutation code.
    ///
    /// The domestic transfer codes (`DV`, `OV`, `VZ`) say nothing about the
    /// direction, so for those the `Af Bij` column decides. Every other code
    /// either maps to a semantic category or falls through to `Other`;
    /// classification never fails.
    pub fn classify(code: &str, direction: Direction) -> Self {
        match code {
            "DV" | "OV" | "VZ" => match direction {
                Direction::Debit => TrnType::Debit,
                Direction::Credit => TrnType::Credit,
            },
            "GT" => TrnType::Payment,
            "BA" => TrnType::Pos,
            "GM" => TrnType::Atm,
            "IC" => TrnType::DirectDebit,
            "ST" => TrnType::DirectDep,
            _ => TrnType::Other,
        }
    }
}

impl fmt::Display for TrnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            TrnType::Credit => "CREDIT",
            TrnType::Debit => "DEBIT",
            TrnType::Payment => "PAYMENT",
            TrnType::Pos => "POS",
            TrnType::Atm => "ATM",
            TrnType::DirectDebit => "DIRECTDEBIT",
            TrnType::DirectDep => "DIRECTDEP",
            TrnType::Other => "OTHER",
        };
        f.write_str(tag)
    }
}

/// A normalized statement transaction, immutable once built.
///
/// `name` and `memo` are already sanitized for OFX output; `amount` is
/// negative exactly when the source row was a debit; `fitid` is unique
/// within the run that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub account: String,
    pub counter_account: String,
    pub trn_type: TrnType,
    pub posted: NaiveDate,
    pub amount: Decimal,
    pub name: String,
    pub memo: String,
    pub fitid: String,
}

impl Transaction {
    /// Build a transaction from a typed ING row, drawing a fresh FITID
    /// from the run's registry.
    pub fn from_row(row: IngRow, ids: &mut FitIdRegistry) -> Self {
        let trn_type = TrnType::classify(&row.code, row.direction);
        let name = sanitize_text(&row.description);
        let memo = sanitize_text(&row.memo);
        let time = extract_time(&memo);

        let fitid = ids.assign(&row.counter_account, row.posted, time.as_deref(), row.amount);

        Transaction {
            account: row.account,
            counter_account: row.counter_account,
            trn_type,
            posted: row.posted,
            amount: row.amount,
            name,
            memo,
            fitid,
        }
    }
}
