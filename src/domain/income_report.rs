// src/domain/income_report.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Month labels as printed on the statement, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// One month of rent collected on behalf of a landlord.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyIncomeEntry {
    pub month: String,
    pub due_day: Option<u32>,
    pub payment_date: Option<String>,
    #[serde(alias = "contract_value", deserialize_with = "null_as_zero")]
    pub contracted_value: Decimal,
    #[serde(deserialize_with = "null_as_zero")]
    pub paid_value: Decimal,
    #[serde(deserialize_with = "null_as_zero")]
    pub commission: Decimal,
    #[serde(deserialize_with = "null_as_zero")]
    pub irrf: Decimal,
}

/// Cleared amount inputs arrive as `null`; they count as zero.
fn null_as_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Decimal>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl MonthlyIncomeEntry {
    fn zero(index: usize) -> Self {
        Self {
            month: MONTH_LABELS[index].to_string(),
            ..Self::default()
        }
    }
}

/// Exactly twelve entries, January to December.
///
/// Missing months are zero entries so totals always cover the whole year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<MonthlyIncomeEntry>", into = "Vec<MonthlyIncomeEntry>")]
pub struct MonthlySchedule([MonthlyIncomeEntry; 12]);

impl MonthlySchedule {
    /// Places each entry by its month label (`Março`, `marco`, `3`).
    /// Entries with an unknown label are dropped; a repeated month keeps the last one.
    pub fn from_entries(entries: Vec<MonthlyIncomeEntry>) -> Self {
        let mut months: [MonthlyIncomeEntry; 12] = std::array::from_fn(MonthlyIncomeEntry::zero);

        for entry in entries {
            match month_index(&entry.month) {
                Some(index) => {
                    months[index] = MonthlyIncomeEntry {
                        month: MONTH_LABELS[index].to_string(),
                        ..entry
                    };
                }
                None => warn!(month = %entry.month, "dropping income entry with unknown month"),
            }
        }

        Self(months)
    }

    pub fn entries(&self) -> &[MonthlyIncomeEntry; 12] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonthlyIncomeEntry> {
        self.0.iter()
    }
}

impl Default for MonthlySchedule {
    fn default() -> Self {
        Self(std::array::from_fn(MonthlyIncomeEntry::zero))
    }
}

impl From<Vec<MonthlyIncomeEntry>> for MonthlySchedule {
    fn from(entries: Vec<MonthlyIncomeEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<MonthlySchedule> for Vec<MonthlyIncomeEntry> {
    fn from(schedule: MonthlySchedule) -> Self {
        schedule.0.into()
    }
}

fn month_index(label: &str) -> Option<usize> {
    let label = label.trim();
    if let Ok(number) = label.parse::<usize>() {
        return (1..=12).contains(&number).then(|| number - 1);
    }

    let folded = label.to_lowercase().replace('ç', "c");
    MONTH_LABELS
        .iter()
        .position(|m| m.to_lowercase().replace('ç', "c") == folded)
}

/// Annual rental-income statement data for one property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeReportRecord {
    pub id: i64,
    /// Property id or title.
    #[serde(alias = "property_id")]
    pub property_ref: String,
    #[serde(alias = "locator_name")]
    pub landlord_name: Option<String>,
    pub tenant_name: Option<String>,
    pub contract_date: Option<String>,
    #[serde(alias = "start_date")]
    pub period_start: Option<String>,
    #[serde(alias = "end_date")]
    pub period_end: Option<String>,
    #[serde(alias = "monthly_data")]
    pub months: MonthlySchedule,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entry(month: &str, paid: Decimal) -> MonthlyIncomeEntry {
        MonthlyIncomeEntry {
            month: month.to_string(),
            paid_value: paid,
            ..MonthlyIncomeEntry::default()
        }
    }

    #[test]
    fn sparse_entries_fill_to_twelve_months() {
        let schedule = MonthlySchedule::from_entries(vec![
            entry("Dezembro", dec!(900)),
            entry("marco", dec!(300)),
            entry("2", dec!(200)),
        ]);

        let months = schedule.entries();
        assert_eq!(months.len(), 12);
        assert_eq!(months[1].paid_value, dec!(200));
        assert_eq!(months[2].paid_value, dec!(300));
        assert_eq!(months[2].month, "Março");
        assert_eq!(months[11].paid_value, dec!(900));
        assert_eq!(months[0].paid_value, Decimal::ZERO);
        assert_eq!(months[0].month, "Janeiro");
    }

    #[test]
    fn unknown_months_are_dropped() {
        let schedule = MonthlySchedule::from_entries(vec![
            entry("Smarch", dec!(50)),
            entry("13", dec!(50)),
        ]);
        assert!(schedule.iter().all(|m| m.paid_value.is_zero()));
    }

    #[test]
    fn json_schedule_is_normalised() {
        let report: IncomeReportRecord = serde_json::from_str(
            r#"{
                "property_id": "p-1",
                "locator_name": "Maria",
                "monthly_data": [
                    {"month": "Janeiro", "contract_value": 2300, "paid_value": 2300, "commission": 230, "irrf": 0, "payment_date": ""}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(report.property_ref, "p-1");
        assert_eq!(report.landlord_name.as_deref(), Some("Maria"));
        assert_eq!(report.months.entries()[0].contracted_value, dec!(2300));
        assert_eq!(report.months.iter().count(), 12);

        let json = serde_json::to_value(&report.months).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(12));
    }

    #[test]
    fn null_amounts_read_as_zero() {
        let report: IncomeReportRecord = serde_json::from_str(
            r#"{
                "monthly_data": [
                    {"month": "Janeiro", "contract_value": 2300, "paid_value": null, "commission": null, "irrf": null},
                    {"month": "Fevereiro", "contract_value": null}
                ]
            }"#,
        )
        .unwrap();

        let months = report.months.entries();
        assert_eq!(months[0].contracted_value, dec!(2300));
        assert_eq!(months[0].paid_value, Decimal::ZERO);
        assert_eq!(months[0].commission, Decimal::ZERO);
        assert_eq!(months[0].irrf, Decimal::ZERO);
        assert_eq!(months[1].contracted_value, Decimal::ZERO);
    }
}
