// src/db/columns.rs
//
// Money lives in TEXT columns so amounts come back exactly as stored.

use rusqlite::types::Type;
use rusqlite::Row;
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn decimal_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<Decimal>> {
    let raw: Option<String> = row.get(idx)?;
    raw.filter(|text| !text.trim().is_empty())
        .map(|text| {
            Decimal::from_str(text.trim()).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
            })
        })
        .transpose()
}

pub fn decimal_param(value: Option<Decimal>) -> Option<String> {
    value.map(|d| d.to_string())
}
