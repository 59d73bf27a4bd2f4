// src/spreadsheets/income_xlsx.rs
use crate::documents::income_report::{reporting_year, IncomeTotals, MONTHLY_COLUMNS};
use crate::domain::IncomeReportRecord;
use crate::errors::ServerError;
use crate::format::format_date;
use crate::responses::attachment::attachment_filename;
use crate::responses::{xlsx_response, ResultResp};
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_xlsxwriter::{Format, Workbook};

const MONEY_FORMAT: &str = "\"R$\" #,##0.00";

/// Builds the monthly income workbook: a header row, twelve months and a totals row.
pub fn income_report_workbook(report: &IncomeReportRecord) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let money = Format::new().set_num_format(MONEY_FORMAT);
    let bold = Format::new().set_bold();
    let bold_money = Format::new().set_bold().set_num_format(MONEY_FORMAT);

    for (col, header) in MONTHLY_COLUMNS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, entry) in report.months.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &entry.month)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write month: {}", e)))?;

        match entry.due_day {
            Some(day) => worksheet.write_number(r, 1, day as f64),
            None => worksheet.write_string(r, 1, ""),
        }
        .map_err(|e| ServerError::XlsxError(format!("Failed to write due day: {}", e)))?;

        worksheet
            .write_string(r, 2, format_date(entry.payment_date.as_deref()))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write payment date: {}", e)))?;

        let amounts = [
            entry.contracted_value,
            entry.paid_value,
            entry.commission,
            entry.irrf,
        ];
        for (offset, amount) in amounts.into_iter().enumerate() {
            worksheet
                .write_number_with_format(r, 3 + offset as u16, to_cell(amount), &money)
                .map_err(|e| ServerError::XlsxError(format!("Failed to write amount: {}", e)))?;
        }
    }

    let totals = IncomeTotals::sum(&report.months);
    let total_row = (report.months.entries().len() + 1) as u32;
    worksheet
        .write_string_with_format(total_row, 0, "Total", &bold)
        .map_err(|e| ServerError::XlsxError(format!("Failed to write totals label: {}", e)))?;
    let sums = [
        totals.total_contracted,
        totals.total_paid,
        totals.total_commission,
        totals.total_withholding,
    ];
    for (offset, amount) in sums.into_iter().enumerate() {
        worksheet
            .write_number_with_format(total_row, 3 + offset as u16, to_cell(amount), &bold_money)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write total: {}", e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

pub fn export_income_report_xlsx(report: &IncomeReportRecord, today: NaiveDate) -> ResultResp {
    let buffer = income_report_workbook(report)?;
    let seed = format!(
        "{} {}",
        report.landlord_name.as_deref().unwrap_or_default(),
        reporting_year(report, today)
    );
    xlsx_response(buffer, &attachment_filename("Informe", &seed, "xlsx"))
}

fn to_cell(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::income_report::MonthlyIncomeEntry;
    use crate::domain::MonthlySchedule;
    use rust_decimal_macros::dec;

    #[test]
    fn workbook_is_a_zip_container() {
        let report = IncomeReportRecord {
            landlord_name: Some("Rita".into()),
            months: MonthlySchedule::from_entries(vec![MonthlyIncomeEntry {
                month: "Janeiro".into(),
                paid_value: dec!(1000),
                ..MonthlyIncomeEntry::default()
            }]),
            ..IncomeReportRecord::default()
        };

        let bytes = income_report_workbook(&report).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
