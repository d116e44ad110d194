//! The conversion pipeline: CSV content in, grouped transactions out.

use std::fs;
use std::path::Path;

use crate::batch::Batch;
use crate::errors::ConvertResult;
use crate::fitid::FitIdRegistry;
use crate::ing;
use crate::types::Transaction;

/// Convert ING CSV content into batches of normalized transactions.
///
/// Single pass in file order: each row is typed, normalized, classified and
/// given a FITID before the next row is touched, so collision suffixes
/// follow the source order. The FITID registry lives and dies with this
/// call.
pub fn convert(content: &str, split_by_month: bool) -> ConvertResult<Batch> {
    let rows = ing::read_rows(content)?;

    let mut ids = FitIdRegistry::new();
    let transactions: Vec<Transaction> = rows
        .into_iter()
        .map(|row| Transaction::from_row(row, &mut ids))
        .collect();

    Ok(Batch::from_transactions(transactions, split_by_month))
}

/// Like [`convert`], reading the CSV content from disk first.
pub fn convert_file(path: &Path, split_by_month: bool) -> ConvertResult<Batch> {
    let content = fs::read_to_string(path)?;
    convert(&content, split_by_month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TrnType;

    const SAMPLE_CSV: &str = "\
\"Datum\",\"Naam / Omschrijving\",\"Rekening\",\"Tegenrekening\",\"Code\",\"Af Bij\",\"Bedrag (EUR)\",\"Mededelingen\"
\"20170101\",\"Salary\",\"NL20INGB0001234567\",\"NL91ABNA0417164300\",\"ST\",\"Bij\",\"10,00\",\"January salary\"
\"20170102\",\"Coffee Bar\",\"NL20INGB0001234567\",\"NL91ABNA0417164300\",\"BA\",\"Af\",\"5,00\",\"Pasvolgnr:008 02-01-17 08:15\"
";

    #[test]
    fn test_convert_single_group() {
        let batch = convert(SAMPLE_CSV, false).unwrap();
        assert_eq!(batch.total(), 2);

        let (key, txns) = batch.iter().next().unwrap();
        assert_eq!(key, "");
        assert_eq!(txns[0].trn_type, TrnType::DirectDep);
        assert_eq!(txns[0].amount.to_string(), "10.00");
        assert_eq!(txns[1].trn_type, TrnType::Pos);
        assert_eq!(txns[1].amount.to_string(), "-5.00");
    }

    #[test]
    fn test_convert_split_by_month() {
        let csv = SAMPLE_CSV.replace("20170102", "20170215");
        let batch = convert(&csv, true).unwrap();

        let keys: Vec<&str> = batch.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["201701", "201702"]);
    }

    #[test]
    fn test_fitids_unique_for_identical_rows() {
        // same counter account, date, time and amount twice over
        let duplicate = "\
\"Datum\",\"Naam / Omschrijving\",\"Rekening\",\"Tegenrekening\",\"Code\",\"Af Bij\",\"Bedrag (EUR)\",\"Mededelingen\"
\"20170101\",\"Shop\",\"NL20INGB0001234567\",\"NL91ABNA0417164300\",\"BA\",\"Af\",\"5,00\",\"Pasvolgnr:008 01-01-17 08:15\"
\"20170101\",\"Shop\",\"NL20INGB0001234567\",\"NL91ABNA0417164300\",\"BA\",\"Af\",\"5,00\",\"Pasvolgnr:008 01-01-17 08:15\"
";
        let batch = convert(duplicate, false).unwrap();
        let (_, txns) = batch.iter().next().unwrap();

        assert_ne!(txns[0].fitid, txns[1].fitid);
        assert_eq!(txns[1].fitid, format!("{}1", txns[0].fitid));
    }

    #[test]
    fn test_convert_then_render() {
        let batch = convert(SAMPLE_CSV, false).unwrap();
        let (_, txns) = batch.iter().next().unwrap();

        let as_of = chrono::NaiveDate::from_ymd_opt(2017, 6, 1).unwrap();
        let doc = crate::ofx::render(txns, as_of);

        assert!(doc.contains("<DTSTART>20170101</DTSTART>"));
        assert!(doc.contains("<DTEND>20170102</DTEND>"));
        assert!(doc.contains("<TRNAMT>10.00</TRNAMT>"));
        assert!(doc.contains("<TRNAMT>-5.00</TRNAMT>"));
        assert_eq!(doc.matches("<STMTTRN>").count(), 2);
        assert_eq!(doc.matches("<STMTRS>").count(), 1);
    }

    #[test]
    fn test_sanitized_fields() {
        let csv = SAMPLE_CSV.replace("Coffee Bar", "Coffee  &  Bar");
        let batch = convert(&csv, false).unwrap();
        let (_, txns) = batch.iter().next().unwrap();

        assert_eq!(txns[1].name, "Coffee &amp; Bar");
    }
}
