pub mod charges;
pub mod contract;
pub mod income_report;
pub mod model;
pub mod render;
pub mod resolution;

pub use contract::generate_lease_contract_document;
pub use income_report::generate_income_report_document;
pub use model::DocumentArtifact;
pub use render::printable_html;
pub use resolution::{TenantLookup, TenantMatchPolicy};
