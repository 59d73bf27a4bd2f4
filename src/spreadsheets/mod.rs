pub mod income_xlsx;

pub use income_xlsx::export_income_report_xlsx;
