// src/db/leases.rs
use crate::db::columns::{decimal_column, decimal_param};
use crate::domain::{CondoVariation, LeaseRecord, LeaseStatus, WarrantyType};
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_LEASES: &str = r#"
    SELECT
        id, tenant_name, tenant_tax_id, landlord_name, landlord_tax_id, property_ref,
        start_date, end_date, duration_months, monthly_value, payment_due_day,
        warranty_type, property_condition, condo_variation, residents, status
    FROM leases
"#;

pub fn insert_lease(conn: &Connection, lease: &LeaseRecord) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        INSERT INTO leases (
            tenant_name, tenant_tax_id, landlord_name, landlord_tax_id, property_ref,
            start_date, end_date, duration_months, monthly_value, payment_due_day,
            warranty_type, property_condition, condo_variation, residents, status
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
        "#,
        params![
            &lease.tenant_name,
            &lease.tenant_tax_id,
            &lease.landlord_name,
            &lease.landlord_tax_id,
            &lease.property_ref,
            &lease.start_date,
            &lease.end_date,
            lease.duration_months,
            decimal_param(lease.monthly_value),
            lease.payment_due_day,
            lease.warranty_type.as_db_str(),
            &lease.property_condition,
            lease.condo_variation.map(CondoVariation::as_db_str),
            &lease.residents,
            lease.status.as_db_str(),
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert lease failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

pub fn get_lease(conn: &Connection, id: i64) -> Result<Option<LeaseRecord>, ServerError> {
    conn.query_row(
        &format!("{SELECT_LEASES} WHERE id = ?1"),
        params![id],
        lease_from_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("load lease {id} failed: {e}")))
}

/// Newest first, for the document index.
pub fn list_leases(conn: &Connection) -> Result<Vec<LeaseRecord>, ServerError> {
    let mut stmt = conn
        .prepare(&format!("{SELECT_LEASES} ORDER BY id DESC"))
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], lease_from_row)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

fn lease_from_row(row: &Row<'_>) -> rusqlite::Result<LeaseRecord> {
    let warranty: Option<String> = row.get(11)?;
    let condo: Option<String> = row.get(13)?;
    let status: Option<String> = row.get(15)?;

    Ok(LeaseRecord {
        id: row.get(0)?,
        tenant_name: row.get(1)?,
        tenant_tax_id: row.get(2)?,
        landlord_name: row.get(3)?,
        landlord_tax_id: row.get(4)?,
        property_ref: row.get(5)?,
        start_date: row.get(6)?,
        end_date: row.get(7)?,
        duration_months: row.get(8)?,
        monthly_value: decimal_column(row, 9)?,
        payment_due_day: row.get(10)?,
        warranty_type: WarrantyType::from_db(warranty.as_deref()),
        property_condition: row.get(12)?,
        condo_variation: CondoVariation::from_db(condo.as_deref()),
        residents: row.get(14)?,
        status: LeaseStatus::from_db(status.as_deref()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(include_str!("../../sql/schema.sql")).unwrap();
        conn
    }

    #[test]
    fn lease_round_trips_through_sqlite() {
        let conn = conn();
        let lease = LeaseRecord {
            tenant_name: "Carlos".into(),
            property_ref: "Apto 12".into(),
            start_date: Some("2026-01-10".into()),
            duration_months: Some(30),
            monthly_value: Some(dec!(2300.50)),
            payment_due_day: Some(5),
            warranty_type: WarrantyType::InsuranceBacked,
            condo_variation: Some(CondoVariation::Variable),
            residents: Some("Ana\nBia".into()),
            status: LeaseStatus::Active,
            ..LeaseRecord::default()
        };

        let id = insert_lease(&conn, &lease).unwrap();
        let stored = get_lease(&conn, id).unwrap().unwrap();

        assert_eq!(stored, LeaseRecord { id, ..lease });
        assert!(get_lease(&conn, id + 1).unwrap().is_none());
        assert_eq!(list_leases(&conn).unwrap().len(), 1);
    }
}
