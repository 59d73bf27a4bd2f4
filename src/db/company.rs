use crate::domain::CompanySettings;
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

/// The single settings row, if it was ever saved.
pub fn get_company_settings(conn: &Connection) -> Result<Option<CompanySettings>, ServerError> {
    conn.query_row(
        "select name, address, number, city, state, zip, phone, email from company_settings where id = 1",
        [],
        |row| {
            Ok(CompanySettings {
                name: row.get(0)?,
                address: row.get(1)?,
                number: row.get(2)?,
                city: row.get(3)?,
                state: row.get(4)?,
                zip: row.get(5)?,
                phone: row.get(6)?,
                email: row.get(7)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("load company settings failed: {e}")))
}

pub fn save_company_settings(
    conn: &Connection,
    settings: &CompanySettings,
) -> Result<(), ServerError> {
    conn.execute(
        r#"
        insert into company_settings (id, name, address, number, city, state, zip, phone, email)
        values (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        on conflict(id) do update set
            name = excluded.name,
            address = excluded.address,
            number = excluded.number,
            city = excluded.city,
            state = excluded.state,
            zip = excluded.zip,
            phone = excluded.phone,
            email = excluded.email
        "#,
        params![
            &settings.name,
            &settings.address,
            &settings.number,
            &settings.city,
            &settings.state,
            &settings.zip,
            &settings.phone,
            &settings.email,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("save company settings failed: {e}")))?;
    Ok(())
}
