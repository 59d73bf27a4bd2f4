// src/domain/property.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::format_zip;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "Casa", alias = "house")]
    House,
    #[serde(rename = "Apartamento", alias = "apartment")]
    Apartment,
    #[serde(rename = "Terreno", alias = "land")]
    Land,
    #[serde(rename = "Comercial", alias = "commercial")]
    Commercial,
}

impl PropertyType {
    /// Label printed in documents and stored in the `properties.property_type` column.
    pub fn label(self) -> &'static str {
        match self {
            PropertyType::House => "Casa",
            PropertyType::Apartment => "Apartamento",
            PropertyType::Land => "Terreno",
            PropertyType::Commercial => "Comercial",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "casa" | "house" => Some(PropertyType::House),
            "apartamento" | "apartment" => Some(PropertyType::Apartment),
            "terreno" | "land" => Some(PropertyType::Land),
            "comercial" | "commercial" => Some(PropertyType::Commercial),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

impl Address {
    /// One-line postal address, skipping blank parts:
    /// `Rua das Flores, 120, Apto 31 - Centro, Curitiba/PR, CEP 80010-000`
    pub fn display(&self) -> String {
        let street_line = [&self.street, &self.number, &self.complement]
            .into_iter()
            .filter_map(|part| non_blank(part))
            .collect::<Vec<_>>()
            .join(", ");

        let city_line = match (non_blank(&self.city), non_blank(&self.state)) {
            (Some(city), Some(state)) => Some(format!("{city}/{state}")),
            (Some(city), None) => Some(city.to_string()),
            (None, Some(state)) => Some(state.to_string()),
            (None, None) => None,
        };

        let mut out = street_line;
        if let Some(neighborhood) = non_blank(&self.neighborhood) {
            if out.is_empty() {
                out.push_str(neighborhood);
            } else {
                out.push_str(" - ");
                out.push_str(neighborhood);
            }
        }
        for tail in [city_line, non_blank(&self.zip).map(|z| format!("CEP {}", format_zip(z)))]
            .into_iter()
            .flatten()
        {
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str(&tail);
        }
        out
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// A property from the inventory, read-only while documents are generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: String,
    pub title: String,
    pub property_type: PropertyType,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub condo_fee: Option<Decimal>,
    #[serde(default)]
    pub fire_insurance_fee: Option<Decimal>,
    #[serde(default)]
    pub iptu_fee: Option<Decimal>,
    #[serde(default)]
    pub service_fee: Option<Decimal>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub owner_tax_id: Option<String>,
}
