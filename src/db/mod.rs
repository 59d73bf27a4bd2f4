pub mod clients;
pub mod columns;
pub mod company;
pub mod connection;
pub mod income_reports;
pub mod leases;
pub mod properties;

pub use connection::{init_db, Database};
