// src/tests/router_tests/income_report_tests.rs

use crate::db::Database;
use crate::tests::utils::{body_bytes, body_string, create, get, header, make_db, send_json};
use serde_json::{json, Value};

fn seed_report(db: &Database, months: Value) -> Value {
    create(
        db,
        "/properties",
        &json!({
            "id": "casa-12",
            "title": "Casa Jardim Botânico",
            "property_type": "Casa",
            "address": { "street": "Rua das Flores", "number": "12", "city": "Curitiba", "state": "PR" },
            "price": "3000"
        }),
    );
    create(
        db,
        "/clients",
        &json!({ "name": "Paulo Nunes", "tax_id": "111.222.333-44", "property_interest": "casa-12" }),
    );
    create(
        db,
        "/income-reports",
        &json!({
            "property_ref": "Casa Jardim Botânico",
            "landlord_name": "Helena Prado",
            "contract_date": "2025-02-01",
            "period_start": "2025-01-01",
            "period_end": "2025-12-31",
            "months": months
        }),
    )
}

fn two_months() -> Value {
    json!([
        { "month": "Março", "due_day": 10, "payment_date": "2025-03-10",
          "contracted_value": "3000", "paid_value": "3000", "commission": "300", "irrf": "45.25" },
        { "month": "Janeiro", "due_day": 10, "payment_date": "2025-01-09",
          "contracted_value": "3000", "paid_value": "2900.50", "commission": "290.05", "irrf": "0" }
    ])
}

#[test]
fn report_download_sums_the_year() {
    let db = make_db("report_download");
    let id = seed_report(&db, two_months());

    let resp = get(&db, &format!("/income-reports/{id}/report.doc"));
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), "application/msword; charset=utf-8");
    assert!(header(&resp, "Content-Disposition").contains("Informe_Helena_Prado.doc"));

    let html = String::from_utf8(body_bytes(resp)[3..].to_vec()).unwrap();
    assert!(html.contains("Ano-calendário 2025"));
    assert!(html.contains("Dezembro"), "all twelve months are listed");
    assert!(html.contains("R$ 5.900,50"), "gross income");
    assert!(html.contains("R$ 590,05"), "commissions");
    assert!(html.contains("R$ 45,25"), "withholding");
    assert!(html.contains("R$ 6.000,00"), "contracted total");
}

#[test]
fn report_resolves_tenant_and_property_from_records() {
    let db = make_db("report_tenant");
    let id = seed_report(&db, two_months());

    let html = body_string(get(&db, &format!("/income-reports/{id}/report/print")));
    assert!(html.contains("window.print()"));
    assert!(html.contains("Paulo Nunes"));
    assert!(html.contains("111.222.333-44"));
    assert!(html.contains("Rua das Flores, 12, Curitiba/PR"));
    assert!(html.contains("Não informado"), "company settings were never saved");
}

#[test]
fn company_settings_become_the_issuer() {
    let db = make_db("report_company");
    let id = seed_report(&db, json!([]));

    let resp = send_json(
        &db,
        "PUT",
        "/company",
        &json!({ "name": "Nascimento Imóveis", "phone": "(41) 3333-0000", "city": "Curitiba", "state": "PR" }),
    );
    assert_eq!(resp.status(), 200);

    let html = body_string(get(&db, &format!("/income-reports/{id}/report/print")));
    assert!(html.contains("Nascimento Imóveis"));
    assert!(html.contains("(41) 3333-0000"));
    assert!(html.contains("R$ 0,00"));
}

#[test]
fn report_exports_as_workbook() {
    let db = make_db("report_xlsx");
    let id = seed_report(&db, two_months());

    let resp = get(&db, &format!("/income-reports/{id}/report.xlsx"));
    assert_eq!(resp.status(), 200);
    assert_eq!(
        header(&resp, "Content-Type"),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert!(header(&resp, "Content-Disposition").contains("Informe_Helena_Prado_2025.xlsx"));
    assert_eq!(&body_bytes(resp)[..2], b"PK");
}

#[test]
fn missing_report_is_not_found() {
    let db = make_db("report_missing");

    assert_eq!(get(&db, "/income-reports/7/report.doc").status(), 404);
    assert_eq!(get(&db, "/income-reports/7/report.xlsx").status(), 404);
    assert_eq!(get(&db, "/income-reports/x/report/print").status(), 400);
}

#[test]
fn cleared_amounts_are_accepted_as_zero() {
    let db = make_db("report_null_amounts");
    let id = create(
        &db,
        "/income-reports",
        &json!({
            "property_id": "casa-12",
            "locator_name": "Helena Prado",
            "contract_date": "2025-02-01",
            "monthly_data": [
                { "month": "Janeiro", "contract_value": 2300, "paid_value": null, "commission": null, "irrf": null }
            ]
        }),
    );

    let resp = get(&db, &format!("/income-reports/{id}/report/print"));
    assert_eq!(resp.status(), 200);

    let html = body_string(resp);
    assert!(html.contains("R$ 2.300,00"), "contracted value kept");
    assert!(html.contains("R$ 0,00"), "paid value counted as zero");
}
