// src/db/income_reports.rs
use crate::domain::{IncomeReportRecord, MonthlySchedule};
use crate::errors::ServerError;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_REPORTS: &str = r#"
    SELECT
        id, property_ref, landlord_name, tenant_name, contract_date,
        period_start, period_end, monthly_data
    FROM income_reports
"#;

pub fn insert_income_report(
    conn: &Connection,
    report: &IncomeReportRecord,
) -> Result<i64, ServerError> {
    let monthly_data = serde_json::to_string(&report.months)
        .map_err(|e| ServerError::DbError(format!("encode monthly data failed: {e}")))?;

    conn.execute(
        r#"
        INSERT INTO income_reports (
            property_ref, landlord_name, tenant_name, contract_date,
            period_start, period_end, monthly_data
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
        params![
            &report.property_ref,
            &report.landlord_name,
            &report.tenant_name,
            &report.contract_date,
            &report.period_start,
            &report.period_end,
            monthly_data,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert income report failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

pub fn get_income_report(
    conn: &Connection,
    id: i64,
) -> Result<Option<IncomeReportRecord>, ServerError> {
    conn.query_row(
        &format!("{SELECT_REPORTS} WHERE id = ?1"),
        params![id],
        report_from_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("load income report {id} failed: {e}")))
}

pub fn list_income_reports(conn: &Connection) -> Result<Vec<IncomeReportRecord>, ServerError> {
    let mut stmt = conn
        .prepare(&format!("{SELECT_REPORTS} ORDER BY id DESC"))
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], report_from_row)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

fn report_from_row(row: &Row<'_>) -> rusqlite::Result<IncomeReportRecord> {
    let raw_months: String = row.get(7)?;
    let months: MonthlySchedule = serde_json::from_str(&raw_months)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e)))?;

    Ok(IncomeReportRecord {
        id: row.get(0)?,
        property_ref: row.get(1)?,
        landlord_name: row.get(2)?,
        tenant_name: row.get(3)?,
        contract_date: row.get(4)?,
        period_start: row.get(5)?,
        period_end: row.get(6)?,
        months,
    })
}
