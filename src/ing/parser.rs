use csv::ReaderBuilder;

use super::dto::{IngRow, IngRowRaw};
use crate::errors::ConvertResult;

/// Read every row of an ING CSV export into typed rows, in file order.
pub fn read_rows(content: &str) -> ConvertResult<Vec<IngRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in reader.deserialize::<IngRowRaw>() {
        let raw = result?;
        rows.push(raw.try_into()?);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConvertError;
    use crate::types::Direction;

    const SAMPLE_CSV: &str = "\
\"Datum\",\"Naam / Omschrijving\",\"Rekening\",\"Tegenrekening\",\"Code\",\"Af Bij\",\"Bedrag (EUR)\",\"MutatieSoort\",\"Mededelingen\"
\"20170101\",\"Salary\",\"NL20INGB0001234567\",\"NL91ABNA0417164300\",\"ST\",\"Bij\",\"10,00\",\"Storting\",\"January salary\"
\"20170102\",\"Coffee Bar\",\"NL20INGB0001234567\",\"\",\"BA\",\"Af\",\"5,00\",\"Betaalautomaat\",\"Pasvolgnr:008 02-01-17 08:15\"
";

    #[test]
    fn test_read_rows() {
        let rows = read_rows(SAMPLE_CSV).unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].direction, Direction::Credit);
        assert_eq!(rows[0].amount.to_string(), "10.00");
        assert_eq!(rows[1].direction, Direction::Debit);
        assert_eq!(rows[1].counter_account, "");
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        // MutatieSoort is present in real exports but unused here
        let rows = read_rows(SAMPLE_CSV).unwrap();
        assert_eq!(rows[1].code, "BA");
    }

    #[test]
    fn test_missing_column_fails_the_run() {
        let truncated = "\"Datum\",\"Code\"\n\"20170101\",\"BA\"\n";
        let result = read_rows(truncated);
        assert!(matches!(result, Err(ConvertError::Csv(_))));
    }

    #[test]
    fn test_malformed_row_fails_the_run() {
        let bad = SAMPLE_CSV.replace("\"Bij\"", "\"Onbekend\"");
        let result = read_rows(&bad);
        assert!(matches!(result, Err(ConvertError::UnknownDirection(_))));
    }
}
