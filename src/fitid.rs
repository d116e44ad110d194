//! Per-run FITID assignment.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Tracks the FITIDs handed out during one conversion run.
///
/// The fingerprint is deterministic for identical inputs; only the collision
/// suffix depends on the order rows are processed in. Scope one registry to
/// one run — uniqueness is not promised across runs.
#[derive(Debug, Default)]
pub struct FitIdRegistry {
    used: HashSet<String>,
}

impl FitIdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a FITID from the counter account, posted date, booking time
    /// and amount, appending a counter until it is unique within this run.
    pub fn assign(
        &mut self,
        counter_account: &str,
        posted: NaiveDate,
        time: Option<&str>,
        amount: Decimal,
    ) -> String {
        let digits = amount.abs().to_string().replace('.', "");
        let fingerprint = format!(
            "{}{}{}{}",
            counter_account,
            posted.format("%Y%m%d"),
            time.unwrap_or(""),
            digits
        );

        let mut candidate = fingerprint.clone();
        let mut suffix = 0u32;
        while self.used.contains(&candidate) {
            suffix += 1;
            candidate = format!("{}{}", fingerprint, suffix);
        }

        self.used.insert(candidate.clone());
        candidate
    }

    /// Number of IDs handed out so far.
    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
