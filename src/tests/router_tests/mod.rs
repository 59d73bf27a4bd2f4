mod contract_tests;
mod income_report_tests;
mod intake_tests;
