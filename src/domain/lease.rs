// src/domain/lease.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Security mechanism backing the lease.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarrantyType {
    /// Cash deposit (caução) of two monthly rents.
    #[default]
    #[serde(rename = "caucao", alias = "deposit")]
    Deposit,
    /// Third-party rent guarantee insurance (seguro fiança).
    #[serde(rename = "seguro_fianca", alias = "insurance_backed")]
    InsuranceBacked,
}

impl WarrantyType {
    pub fn as_db_str(self) -> &'static str {
        match self {
            WarrantyType::Deposit => "caucao",
            WarrantyType::InsuranceBacked => "seguro_fianca",
        }
    }

    /// Unknown or missing values are read as a deposit.
    pub fn from_db(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("seguro_fianca") | Some("insurance_backed") => WarrantyType::InsuranceBacked,
            _ => WarrantyType::Deposit,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CondoVariation {
    #[serde(rename = "variavel", alias = "variable")]
    Variable,
    #[default]
    #[serde(rename = "fixo", alias = "fixed")]
    Fixed,
}

impl CondoVariation {
    /// Bracketed tag printed next to the condominium fee.
    pub fn tag(self) -> &'static str {
        match self {
            CondoVariation::Variable => "[Com variação]",
            CondoVariation::Fixed => "[Sem variação]",
        }
    }

    pub fn as_db_str(self) -> &'static str {
        match self {
            CondoVariation::Variable => "variavel",
            CondoVariation::Fixed => "fixo",
        }
    }

    pub fn from_db(raw: Option<&str>) -> Option<Self> {
        match raw.map(str::trim)? {
            "variavel" | "variable" => Some(CondoVariation::Variable),
            "fixo" | "fixed" => Some(CondoVariation::Fixed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaseStatus {
    #[default]
    #[serde(rename = "em_analise", alias = "under_review")]
    UnderReview,
    #[serde(rename = "ativo", alias = "active")]
    Active,
}

impl LeaseStatus {
    pub fn label(self) -> &'static str {
        match self {
            LeaseStatus::UnderReview => "Em análise",
            LeaseStatus::Active => "Ativo",
        }
    }

    pub fn as_db_str(self) -> &'static str {
        match self {
            LeaseStatus::UnderReview => "em_analise",
            LeaseStatus::Active => "ativo",
        }
    }

    pub fn from_db(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("ativo") | Some("active") => LeaseStatus::Active,
            _ => LeaseStatus::UnderReview,
        }
    }
}

/// Tenancy agreement data used to generate the rental contract.
///
/// Every optional field has a default applied at generation time, never here,
/// so the record keeps exactly what the administrator typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseRecord {
    pub id: i64,
    pub tenant_name: String,
    pub tenant_tax_id: Option<String>,
    pub landlord_name: Option<String>,
    pub landlord_tax_id: Option<String>,
    /// Property id or title.
    pub property_ref: String,
    /// Raw ISO dates as stored.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub duration_months: Option<u32>,
    pub monthly_value: Option<Decimal>,
    pub payment_due_day: Option<u32>,
    pub warranty_type: WarrantyType,
    pub property_condition: Option<String>,
    pub condo_variation: Option<CondoVariation>,
    /// One resident per line.
    pub residents: Option<String>,
    pub status: LeaseStatus,
}

impl LeaseRecord {
    /// Non-empty, trimmed resident lines.
    pub fn resident_lines(&self) -> Vec<&str> {
        self.residents
            .as_deref()
            .unwrap_or_default()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}
