//! Transaction CSV input
//!
//! Reads expense records exported by the surrounding tooling:
//! `date,category,amount[,description]` with an ISO date column. This is
//! the input side only — report export stays with external collaborators.

use std::io::Read;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Transaction;

/// Parse transactions from CSV data.
///
/// The header must start with `date,category,amount`; a trailing
/// `description` column is optional. Rows with unparseable dates or
/// amounts are an error, not silently skipped.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(Error::Csv)?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    if headers.len() < 3
        || headers[0] != "date"
        || headers[1] != "category"
        || headers[2] != "amount"
    {
        return Err(Error::Import(format!(
            "expected header `date,category,amount[,description]`, got {:?}",
            headers.join(",")
        )));
    }

    let mut transactions = Vec::new();
    for (row_no, record) in csv_reader.records().enumerate() {
        let record = record?;
        let line = row_no + 2; // header is line 1

        let date_field = record
            .get(0)
            .ok_or_else(|| Error::Import(format!("line {}: missing date", line)))?;
        let date = NaiveDate::parse_from_str(date_field.trim(), "%Y-%m-%d").map_err(|e| {
            Error::Import(format!("line {}: bad date {:?}: {}", line, date_field, e))
        })?;

        let category = record
            .get(1)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| Error::Import(format!("line {}: missing category", line)))?
            .to_string();

        let amount_field = record
            .get(2)
            .ok_or_else(|| Error::Import(format!("line {}: missing amount", line)))?;
        let amount: f64 = amount_field.trim().parse().map_err(|e| {
            Error::Import(format!(
                "line {}: bad amount {:?}: {}",
                line, amount_field, e
            ))
        })?;

        let description = record
            .get(3)
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(String::from);

        transactions.push(Transaction {
            date,
            category,
            amount,
            description,
        });
    }

    debug!("parsed {} transactions", transactions.len());
    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_csv() {
        let data = "date,category,amount,description\n\
                    2026-08-01,кафе,120.50,обід з колегами\n\
                    2026-08-02,продукти,540,\n";
        let transactions = parse_csv(data.as_bytes()).unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].category, "кафе");
        assert!((transactions[0].amount - 120.50).abs() < 1e-9);
        assert_eq!(
            transactions[0].description.as_deref(),
            Some("обід з колегами")
        );
        assert_eq!(transactions[1].description, None);
    }

    #[test]
    fn test_description_column_is_optional() {
        let data = "date,category,amount\n2026-08-01,таксі,85\n";
        let transactions = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].description, None);
    }

    #[test]
    fn test_rejects_wrong_header() {
        let data = "Transaction Date,Post Date,Description\n";
        let err = parse_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Import(_)));
    }

    #[test]
    fn test_rejects_bad_date() {
        let data = "date,category,amount\n08/01/2026,кафе,120\n";
        let err = parse_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_rejects_bad_amount() {
        let data = "date,category,amount\n2026-08-01,кафе,сто\n";
        let err = parse_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("bad amount"));
    }

    #[test]
    fn test_rejects_empty_category() {
        let data = "date,category,amount\n2026-08-01,,120\n";
        let err = parse_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing category"));
    }

    #[test]
    fn test_empty_file_has_no_transactions() {
        let data = "date,category,amount\n";
        let transactions = parse_csv(data.as_bytes()).unwrap();
        assert!(transactions.is_empty());
    }
}
