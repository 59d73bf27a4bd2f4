pub mod client;
pub mod company;
pub mod income_report;
pub mod lease;
pub mod property;

pub use client::ClientRecord;
pub use company::CompanySettings;
pub use income_report::{IncomeReportRecord, MonthlySchedule};
pub use lease::{CondoVariation, LeaseRecord, LeaseStatus, WarrantyType};
pub use property::{Address, PropertyRecord, PropertyType};
