// src/documents/resolution.rs
//
// Matches free-text property references to inventory records and finds the
// tenant attached to a property.

use rust_decimal::Decimal;

use crate::domain::{ClientRecord, PropertyRecord};

/// Generic type label when the property cannot be resolved.
pub const UNRESOLVED_PROPERTY_LABEL: &str = "Imóvel";

/// First property whose id equals the reference, or whose title matches it
/// ignoring case and surrounding whitespace.
pub fn resolve_property<'a>(
    reference: &str,
    properties: &'a [PropertyRecord],
) -> Option<&'a PropertyRecord> {
    let wanted = reference.trim().to_lowercase();
    properties
        .iter()
        .find(|p| p.id == reference || p.title.trim().to_lowercase() == wanted)
}

/// Display values for a possibly unresolved property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyView {
    pub type_label: String,
    pub address: String,
    pub city: Option<String>,
}

impl PropertyView {
    pub fn new(reference: &str, property: Option<&PropertyRecord>) -> Self {
        match property {
            Some(p) => {
                let address = p.address.display();
                Self {
                    type_label: p.property_type.label().to_string(),
                    address: if address.is_empty() {
                        p.title.clone()
                    } else {
                        address
                    },
                    city: p
                        .address
                        .city
                        .as_deref()
                        .map(str::trim)
                        .filter(|c| !c.is_empty())
                        .map(str::to_string),
                }
            }
            None => Self {
                type_label: UNRESOLVED_PROPERTY_LABEL.to_string(),
                address: reference.trim().to_string(),
                city: None,
            },
        }
    }
}

/// Which client wins when several share the same property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TenantMatchPolicy {
    /// First match in the order the clients were supplied.
    First,
    /// Highest client id, i.e. the most recently registered tenant.
    #[default]
    MostRecent,
}

/// Client list plus the tie-break rule used to pick a tenant for a property.
#[derive(Debug, Clone, Default)]
pub struct TenantLookup {
    clients: Vec<ClientRecord>,
    policy: TenantMatchPolicy,
}

impl TenantLookup {
    pub fn new(clients: Vec<ClientRecord>, policy: TenantMatchPolicy) -> Self {
        Self { clients, policy }
    }

    /// Tenant whose `property_interest` names the property by id or title.
    /// Without a resolved property the raw reference is compared instead.
    pub fn resolve(
        &self,
        property: Option<&PropertyRecord>,
        reference: &str,
    ) -> Option<&ClientRecord> {
        let keys: Vec<&str> = match property {
            Some(p) => vec![p.id.trim(), p.title.trim()],
            None => vec![reference.trim()],
        };

        let mut candidates = self.clients.iter().filter(|client| {
            client
                .property_interest
                .as_deref()
                .map(str::trim)
                .is_some_and(|interest| !interest.is_empty() && keys.contains(&interest))
        });

        match self.policy {
            TenantMatchPolicy::First => candidates.next(),
            TenantMatchPolicy::MostRecent => candidates.max_by_key(|client| client.id),
        }
    }
}

/// Secondary monthly fees of a property; all zero when unresolved.
pub fn secondary_fees(property: Option<&PropertyRecord>) -> [Decimal; 4] {
    match property {
        Some(p) => [
            p.condo_fee.unwrap_or_default(),
            p.fire_insurance_fee.unwrap_or_default(),
            p.iptu_fee.unwrap_or_default(),
            p.service_fee.unwrap_or_default(),
        ],
        None => [Decimal::ZERO; 4],
    }
}
