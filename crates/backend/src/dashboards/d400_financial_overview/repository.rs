use contracts::dashboards::d400_financial_overview::{ExpenseRecord, SaleRecord};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;

use super::error::DashboardError;
use crate::shared::date_utils::parse_date;

// ============================================================================
// Raw CSV rows
// ============================================================================

/// Raw sales row. The Portuguese headers of the original export are accepted too.
#[derive(Debug, Deserialize)]
struct SaleRow {
    #[serde(alias = "data_venda")]
    date: String,
    #[serde(alias = "categoria")]
    category: String,
    #[serde(alias = "valor_total")]
    total_value: f64,
    nps_score: u8,
}

#[derive(Debug, Deserialize)]
struct ExpenseRow {
    #[serde(alias = "data_gasto")]
    date: String,
    #[serde(alias = "categoria_gasto")]
    category: String,
    #[serde(alias = "valor")]
    amount: f64,
}

// ============================================================================
// Loading
// ============================================================================

/// Both sources must exist before either is read.
pub fn ensure_sources_exist(sales: &Path, expenses: &Path) -> Result<(), DashboardError> {
    for path in [sales, expenses] {
        if !path.is_file() {
            return Err(DashboardError::SourceNotFound(path.to_path_buf()));
        }
    }
    Ok(())
}

pub fn load_sales(path: &Path) -> Result<Vec<SaleRecord>, DashboardError> {
    let text = read_source(path)?;
    parse_sales(&text, path)
}

pub fn load_expenses(path: &Path) -> Result<Vec<ExpenseRecord>, DashboardError> {
    let text = read_source(path)?;
    parse_expenses(&text, path)
}

/// Parse sales CSV text. `path` is only used in error messages.
pub fn parse_sales(csv_text: &str, path: &Path) -> Result<Vec<SaleRecord>, DashboardError> {
    parse_rows(csv_text, path, |row: SaleRow, line| {
        Ok(SaleRecord {
            date: cell_date(&row.date, path, line)?,
            category: row.category,
            total_value: row.total_value,
            nps_score: row.nps_score,
        })
    })
}

/// Parse expenses CSV text. `path` is only used in error messages.
pub fn parse_expenses(csv_text: &str, path: &Path) -> Result<Vec<ExpenseRecord>, DashboardError> {
    parse_rows(csv_text, path, |row: ExpenseRow, line| {
        Ok(ExpenseRecord {
            date: cell_date(&row.date, path, line)?,
            category: row.category,
            amount: row.amount,
        })
    })
}

fn read_source(path: &Path) -> Result<String, DashboardError> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            DashboardError::SourceNotFound(path.to_path_buf())
        } else {
            DashboardError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

// ============================================================================
// CSV helpers
// ============================================================================

fn parse_rows<Row, Record, F>(
    csv_text: &str,
    path: &Path,
    convert: F,
) -> Result<Vec<Record>, DashboardError>
where
    Row: DeserializeOwned,
    F: Fn(Row, u64) -> Result<Record, DashboardError>,
{
    let csv_error = |source: csv::Error| DashboardError::Csv {
        path: path.to_path_buf(),
        source,
    };

    // Strip UTF-8 BOM if present
    let text = csv_text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    // Header aliases are matched by name, so column order does not matter
    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut records = Vec::new();
    let mut raw = csv::StringRecord::new();
    while reader.read_record(&mut raw).map_err(csv_error)? {
        let line = raw.position().map(|p| p.line()).unwrap_or_default();
        let row: Row = raw.deserialize(Some(&headers)).map_err(csv_error)?;
        records.push(convert(row, line)?);
    }

    tracing::debug!("Parsed {} rows from {}", records.len(), path.display());
    Ok(records)
}

fn cell_date(value: &str, path: &Path, line: u64) -> Result<chrono::NaiveDate, DashboardError> {
    parse_date(value).ok_or_else(|| DashboardError::InvalidDate {
        path: path.to_path_buf(),
        line,
        value: value.to_string(),
    })
}
