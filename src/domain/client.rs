use serde::{Deserialize, Serialize};

/// A tenant or lead, as stored by the back office.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientRecord {
    pub id: i64,
    pub name: String,
    pub tax_id: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Property id or title the client is attached to.
    pub property_interest: Option<String>,
}
