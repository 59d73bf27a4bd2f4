// src/db/properties.rs
use crate::db::columns::{decimal_column, decimal_param};
use crate::domain::{Address, PropertyRecord, PropertyType};
use crate::errors::ServerError;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};

const SELECT_PROPERTIES: &str = r#"
    SELECT
        id, title, property_type,
        street, number, complement, neighborhood, city, state, zip,
        price, condo_fee, fire_insurance_fee, iptu_fee, service_fee,
        owner_name, owner_tax_id
    FROM properties
"#;

/// Whole inventory, in title order. Documents resolve references against this list.
pub fn list_properties(conn: &Connection) -> Result<Vec<PropertyRecord>, ServerError> {
    let mut stmt = conn
        .prepare(&format!("{SELECT_PROPERTIES} ORDER BY title"))
        .map_err(|e| ServerError::DbError(format!("prepare properties failed: {e}")))?;

    let rows = stmt
        .query_map([], property_from_row)
        .map_err(|e| ServerError::DbError(format!("query properties failed: {e}")))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

/// Inserts the property, or replaces every column of an existing one with the same id.
pub fn upsert_property(conn: &Connection, property: &PropertyRecord) -> Result<(), ServerError> {
    let address = &property.address;
    conn.execute(
        r#"
        INSERT INTO properties (
            id, title, property_type,
            street, number, complement, neighborhood, city, state, zip,
            price, condo_fee, fire_insurance_fee, iptu_fee, service_fee,
            owner_name, owner_tax_id
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)
        ON CONFLICT(id) DO UPDATE SET
            title = excluded.title,
            property_type = excluded.property_type,
            street = excluded.street,
            number = excluded.number,
            complement = excluded.complement,
            neighborhood = excluded.neighborhood,
            city = excluded.city,
            state = excluded.state,
            zip = excluded.zip,
            price = excluded.price,
            condo_fee = excluded.condo_fee,
            fire_insurance_fee = excluded.fire_insurance_fee,
            iptu_fee = excluded.iptu_fee,
            service_fee = excluded.service_fee,
            owner_name = excluded.owner_name,
            owner_tax_id = excluded.owner_tax_id
        "#,
        params![
            &property.id,
            &property.title,
            property.property_type.label(),
            &address.street,
            &address.number,
            &address.complement,
            &address.neighborhood,
            &address.city,
            &address.state,
            &address.zip,
            decimal_param(property.price),
            decimal_param(property.condo_fee),
            decimal_param(property.fire_insurance_fee),
            decimal_param(property.iptu_fee),
            decimal_param(property.service_fee),
            &property.owner_name,
            &property.owner_tax_id,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("upsert property failed: {e}")))?;
    Ok(())
}

fn property_from_row(row: &Row<'_>) -> rusqlite::Result<PropertyRecord> {
    let raw_type: String = row.get(2)?;
    let property_type = PropertyType::from_label(&raw_type).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            Type::Text,
            format!("unknown property type '{raw_type}'").into(),
        )
    })?;

    Ok(PropertyRecord {
        id: row.get(0)?,
        title: row.get(1)?,
        property_type,
        address: Address {
            street: row.get(3)?,
            number: row.get(4)?,
            complement: row.get(5)?,
            neighborhood: row.get(6)?,
            city: row.get(7)?,
            state: row.get(8)?,
            zip: row.get(9)?,
        },
        price: decimal_column(row, 10)?,
        condo_fee: decimal_column(row, 11)?,
        fire_insurance_fee: decimal_column(row, 12)?,
        iptu_fee: decimal_column(row, 13)?,
        service_fee: decimal_column(row, 14)?,
        owner_name: row.get(15)?,
        owner_tax_id: row.get(16)?,
    })
}
