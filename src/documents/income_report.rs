// src/documents/income_report.rs
//
// Annual rental-income statement: twelve monthly rows, their totals and the
// parties involved.

use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::documents::model::{Document, DocumentArtifact, SummaryTable};
use crate::documents::render::render_document;
use crate::documents::resolution::{resolve_property, PropertyView, TenantLookup};
use crate::domain::{CompanySettings, IncomeReportRecord, MonthlySchedule, PropertyRecord};
use crate::format::{format_brl, format_date, long_date, or_placeholder, parse_iso_date};

pub const REPORT_TITLE: &str = "INFORME DE RENDIMENTOS DE ALUGUÉIS";

pub const ISSUER_CAPTION: &str = "Fonte informante";
pub const PARTIES_CAPTION: &str = "Beneficiário e fonte pagadora";
pub const PROPERTY_CAPTION: &str = "Imóvel";
pub const MONTHLY_CAPTION: &str = "Rendimentos mensais";
pub const SUMMARY_CAPTION: &str = "Resumo anual";

pub const MONTHLY_COLUMNS: [&str; 7] = [
    "Mês",
    "Vencimento",
    "Pagamento",
    "Valor contratado",
    "Valor pago",
    "Comissão",
    "IRRF",
];

const COMPANY_PLACEHOLDER: &str = "Não informado";

/// Field-wise sums over the twelve months.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IncomeTotals {
    pub total_paid: Decimal,
    pub total_commission: Decimal,
    pub total_withholding: Decimal,
    pub total_contracted: Decimal,
}

impl IncomeTotals {
    pub fn sum(months: &MonthlySchedule) -> Self {
        months.iter().fold(Self::default(), |acc, m| Self {
            total_paid: acc.total_paid + m.paid_value,
            total_commission: acc.total_commission + m.commission,
            total_withholding: acc.total_withholding + m.irrf,
            total_contracted: acc.total_contracted + m.contracted_value,
        })
    }
}

/// Calendar year of the contract date, else the current year.
pub fn reporting_year(report: &IncomeReportRecord, today: NaiveDate) -> i32 {
    report
        .contract_date
        .as_deref()
        .and_then(parse_iso_date)
        .map(|d| d.year())
        .unwrap_or_else(|| today.year())
}

pub fn generate_income_report_document(
    report: &IncomeReportRecord,
    properties: &[PropertyRecord],
    tenants: &TenantLookup,
    company: Option<&CompanySettings>,
) -> DocumentArtifact {
    generate_income_report_document_on(
        report,
        properties,
        tenants,
        company,
        Local::now().date_naive(),
    )
}

pub fn generate_income_report_document_on(
    report: &IncomeReportRecord,
    properties: &[PropertyRecord],
    tenants: &TenantLookup,
    company: Option<&CompanySettings>,
    today: NaiveDate,
) -> DocumentArtifact {
    let document = assemble_income_report(report, properties, tenants, company, today);
    DocumentArtifact {
        title: document.title.clone(),
        file_seed: report.landlord_name.clone().unwrap_or_default(),
        html: render_document(&document),
    }
}

pub fn assemble_income_report(
    report: &IncomeReportRecord,
    properties: &[PropertyRecord],
    tenants: &TenantLookup,
    company: Option<&CompanySettings>,
    today: NaiveDate,
) -> Document {
    let property = resolve_property(&report.property_ref, properties);
    let tenant = tenants.resolve(property, &report.property_ref);
    debug!(
        report_id = report.id,
        property_resolved = property.is_some(),
        tenant_resolved = tenant.is_some(),
        "assembling income report"
    );

    let view = PropertyView::new(&report.property_ref, property);
    let totals = IncomeTotals::sum(&report.months);
    let year = reporting_year(report, today);

    let tenant_name = report
        .tenant_name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .or_else(|| tenant.map(|t| t.name.as_str()));

    let tables = vec![
        issuer_table(company),
        SummaryTable::key_value(
            PARTIES_CAPTION,
            vec![
                (
                    "Beneficiário (locador)",
                    or_placeholder(report.landlord_name.as_deref()),
                ),
                ("Fonte pagadora (locatário)", or_placeholder(tenant_name)),
                (
                    "CPF da fonte pagadora",
                    or_placeholder(tenant.and_then(|t| t.tax_id.as_deref())),
                ),
            ],
        ),
        SummaryTable::key_value(
            PROPERTY_CAPTION,
            vec![
                ("Tipo", view.type_label.clone()),
                ("Endereço", view.address.clone()),
                ("Data do contrato", format_date(report.contract_date.as_deref())),
                (
                    "Período",
                    format!(
                        "{} a {}",
                        format_date(report.period_start.as_deref()),
                        format_date(report.period_end.as_deref())
                    ),
                ),
            ],
        ),
        monthly_table(&report.months, &totals),
        SummaryTable::key_value(
            SUMMARY_CAPTION,
            vec![
                ("Rendimento bruto recebido", format_brl(totals.total_paid)),
                ("Comissões de administração", format_brl(totals.total_commission)),
                ("Imposto retido na fonte (IRRF)", format_brl(totals.total_withholding)),
                ("Valor contratado no ano", format_brl(totals.total_contracted)),
            ],
        ),
    ];

    Document {
        title: REPORT_TITLE.to_string(),
        subtitle: Some(format!("Ano-calendário {year}")),
        tables,
        clauses: Vec::new(),
        closing: Some(format!("Emitido em {}.", long_date(today))),
        signatures: Vec::new(),
    }
}

fn issuer_table(company: Option<&CompanySettings>) -> SummaryTable {
    let text = |value: Option<&str>| {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(COMPANY_PLACEHOLDER)
            .to_string()
    };
    let address = company
        .map(CompanySettings::address_display)
        .filter(|a| !a.is_empty());

    SummaryTable::key_value(
        ISSUER_CAPTION,
        vec![
            ("Empresa", text(company.and_then(|c| c.name.as_deref()))),
            ("Endereço", text(address.as_deref())),
            ("Telefone", text(company.and_then(|c| c.phone.as_deref()))),
            ("E-mail", text(company.and_then(|c| c.email.as_deref()))),
        ],
    )
}

fn monthly_table(months: &MonthlySchedule, totals: &IncomeTotals) -> SummaryTable {
    let rows = months
        .iter()
        .map(|m| {
            vec![
                m.month.clone(),
                m.due_day
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| format_date(None)),
                format_date(m.payment_date.as_deref()),
                format_brl(m.contracted_value),
                format_brl(m.paid_value),
                format_brl(m.commission),
                format_brl(m.irrf),
            ]
        })
        .collect();

    SummaryTable {
        caption: MONTHLY_CAPTION.to_string(),
        columns: MONTHLY_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows,
        footer: Some(vec![
            "Total".to_string(),
            String::new(),
            String::new(),
            format_brl(totals.total_contracted),
            format_brl(totals.total_paid),
            format_brl(totals.total_commission),
            format_brl(totals.total_withholding),
        ]),
    }
}
