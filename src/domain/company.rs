use serde::{Deserialize, Serialize};

use crate::domain::Address;

/// Brokerage contact details printed as the issuer of income statements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanySettings {
    pub name: Option<String>,
    pub address: Option<String>,
    pub number: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl CompanySettings {
    pub fn address_display(&self) -> String {
        Address {
            street: self.address.clone(),
            number: self.number.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip: self.zip.clone(),
            ..Address::default()
        }
        .display()
    }
}
