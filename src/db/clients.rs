use crate::domain::ClientRecord;
use crate::errors::ServerError;
use rusqlite::{params, Connection};

pub fn insert_client(conn: &Connection, client: &ClientRecord) -> Result<i64, ServerError> {
    conn.execute(
        "insert into clients (name, tax_id, phone, email, property_interest) values (?, ?, ?, ?, ?)",
        params![
            &client.name,
            &client.tax_id,
            &client.phone,
            &client.email,
            &client.property_interest,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert client failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

/// All clients in id order; the tenant lookup applies its own tie-break.
pub fn list_clients(conn: &Connection) -> Result<Vec<ClientRecord>, ServerError> {
    let mut stmt = conn
        .prepare("select id, name, tax_id, phone, email, property_interest from clients order by id")
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(ClientRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                tax_id: row.get(2)?,
                phone: row.get(3)?,
                email: row.get(4)?,
                property_interest: row.get(5)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}
