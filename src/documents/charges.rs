use rust_decimal::Decimal;

use crate::documents::resolution::secondary_fees;
use crate::domain::{LeaseRecord, PropertyRecord};

/// Monthly figures of a lease. Missing inputs count as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaseCharges {
    pub monthly_rent: Decimal,
    pub condo: Decimal,
    pub fire_insurance: Decimal,
    pub property_tax: Decimal,
    pub service_fee: Decimal,
    pub total_monthly: Decimal,
    /// Two monthly rents, printed only for deposit-backed leases.
    pub deposit: Decimal,
}

impl LeaseCharges {
    pub fn compute(lease: &LeaseRecord, property: Option<&PropertyRecord>) -> Self {
        let monthly_rent = lease
            .monthly_value
            .or_else(|| property.and_then(|p| p.price))
            .unwrap_or_default();
        let [condo, fire_insurance, property_tax, service_fee] = secondary_fees(property);

        Self {
            monthly_rent,
            condo,
            fire_insurance,
            property_tax,
            service_fee,
            total_monthly: monthly_rent + condo + fire_insurance + property_tax + service_fee,
            deposit: monthly_rent * Decimal::TWO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PropertyType;
    use rust_decimal_macros::dec;

    fn property() -> PropertyRecord {
        PropertyRecord {
            id: "p1".into(),
            title: "Casa Verde".into(),
            property_type: PropertyType::House,
            address: Default::default(),
            price: Some(dec!(1800)),
            condo_fee: Some(dec!(350.25)),
            fire_insurance_fee: Some(dec!(30)),
            iptu_fee: Some(dec!(95.5)),
            service_fee: Some(dec!(20)),
            owner_name: None,
            owner_tax_id: None,
        }
    }

    #[test]
    fn lease_value_wins_over_listed_price() {
        let lease = LeaseRecord {
            monthly_value: Some(dec!(2300.5)),
            ..LeaseRecord::default()
        };
        let charges = LeaseCharges::compute(&lease, Some(&property()));

        assert_eq!(charges.monthly_rent, dec!(2300.5));
        assert_eq!(charges.total_monthly, dec!(2796.25));
        assert_eq!(charges.deposit, dec!(4601.0));
    }

    #[test]
    fn listed_price_is_the_fallback() {
        let charges = LeaseCharges::compute(&LeaseRecord::default(), Some(&property()));
        assert_eq!(charges.monthly_rent, dec!(1800));
        assert_eq!(charges.deposit, dec!(3600));
    }

    #[test]
    fn total_equals_rent_without_property() {
        let lease = LeaseRecord {
            monthly_value: Some(dec!(1500)),
            ..LeaseRecord::default()
        };
        let charges = LeaseCharges::compute(&lease, None);
        assert_eq!(charges.total_monthly, dec!(1500));
        assert_eq!(charges.condo + charges.fire_insurance, Decimal::ZERO);

        let empty = LeaseCharges::compute(&LeaseRecord::default(), None);
        assert_eq!(empty.total_monthly, Decimal::ZERO);
        assert_eq!(empty.deposit, Decimal::ZERO);
    }
}
