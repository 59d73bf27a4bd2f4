use crate::db::{clients, company, income_reports, leases, properties, Database};
use crate::documents::{
    generate_income_report_document, generate_lease_contract_document, DocumentArtifact,
    TenantLookup, TenantMatchPolicy,
};
use crate::domain::{ClientRecord, CompanySettings, IncomeReportRecord, LeaseRecord, PropertyRecord};
use crate::errors::ServerError;
use crate::responses::{
    html_response, json_response, print_response, word_download_response, ResultResp,
};
use crate::spreadsheets::export_income_report_xlsx;
use crate::templates::pages::{home_page, HomeVm};
use astra::Request;
use chrono::Local;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::info;

const CONTRACT_PREFIX: &str = "Contrato";
const REPORT_PREFIX: &str = "Informe";

/// How a generated document leaves the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delivery {
    Download,
    Print,
}

pub fn handle(req: Request, db: &Database, policy: TenantMatchPolicy) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    info!(%method, %path, "request");

    match (method.as_str(), segments.as_slice()) {
        ("GET", [""]) => home(db),

        ("GET", ["leases", id, "contract.doc"]) => lease_contract(db, id, Delivery::Download),
        ("GET", ["leases", id, "contract", "print"]) => lease_contract(db, id, Delivery::Print),

        ("GET", ["income-reports", id, "report.doc"]) => {
            income_report(db, policy, id, Delivery::Download)
        }
        ("GET", ["income-reports", id, "report", "print"]) => {
            income_report(db, policy, id, Delivery::Print)
        }
        ("GET", ["income-reports", id, "report.xlsx"]) => {
            let report = load_income_report(db, id)?;
            export_income_report_xlsx(&report, Local::now().date_naive())
        }

        ("POST", ["properties"]) => {
            let property: PropertyRecord = read_json(req)?;
            if property.id.trim().is_empty() {
                return Err(ServerError::BadRequest("property id is required".into()));
            }
            db.with_conn(|conn| properties::upsert_property(conn, &property))?;
            info!(property_id = %property.id, "property stored");
            json_response(201, &json!({ "id": property.id }))
        }
        ("POST", ["clients"]) => {
            let client: ClientRecord = read_json(req)?;
            let id = db.with_conn(|conn| clients::insert_client(conn, &client))?;
            info!(client_id = id, "client stored");
            json_response(201, &json!({ "id": id }))
        }
        ("POST", ["leases"]) => {
            let lease: LeaseRecord = read_json(req)?;
            if lease.property_ref.trim().is_empty() {
                return Err(ServerError::BadRequest("lease needs a property reference".into()));
            }
            let id = db.with_conn(|conn| leases::insert_lease(conn, &lease))?;
            info!(lease_id = id, "lease stored");
            json_response(201, &json!({ "id": id }))
        }
        ("POST", ["income-reports"]) => {
            let report: IncomeReportRecord = read_json(req)?;
            let id = db.with_conn(|conn| income_reports::insert_income_report(conn, &report))?;
            info!(report_id = id, "income report stored");
            json_response(201, &json!({ "id": id }))
        }
        ("PUT", ["company"]) => {
            let settings: CompanySettings = read_json(req)?;
            db.with_conn(|conn| company::save_company_settings(conn, &settings))?;
            json_response(200, &json!({ "saved": true }))
        }

        _ => Err(ServerError::NotFound),
    }
}

fn home(db: &Database) -> ResultResp {
    let vm = db.with_conn(|conn| {
        Ok(HomeVm {
            leases: leases::list_leases(conn)?,
            reports: income_reports::list_income_reports(conn)?,
        })
    })?;
    html_response(home_page(&vm))
}

fn lease_contract(db: &Database, raw_id: &str, delivery: Delivery) -> ResultResp {
    let id = parse_id(raw_id)?;
    let (lease, all_properties) = db.with_conn(|conn| {
        let lease = leases::get_lease(conn, id)?.ok_or(ServerError::NotFound)?;
        Ok((lease, properties::list_properties(conn)?))
    })?;

    let artifact = generate_lease_contract_document(&lease, &all_properties);
    info!(lease_id = id, ?delivery, "lease contract generated");
    deliver(&artifact, CONTRACT_PREFIX, delivery)
}

fn income_report(
    db: &Database,
    policy: TenantMatchPolicy,
    raw_id: &str,
    delivery: Delivery,
) -> ResultResp {
    let report = load_income_report(db, raw_id)?;
    let (all_properties, all_clients, settings) = db.with_conn(|conn| {
        Ok((
            properties::list_properties(conn)?,
            clients::list_clients(conn)?,
            company::get_company_settings(conn)?,
        ))
    })?;

    let tenants = TenantLookup::new(all_clients, policy);
    let artifact =
        generate_income_report_document(&report, &all_properties, &tenants, settings.as_ref());
    info!(report_id = report.id, ?delivery, "income report generated");
    deliver(&artifact, REPORT_PREFIX, delivery)
}

fn load_income_report(db: &Database, raw_id: &str) -> Result<IncomeReportRecord, ServerError> {
    let id = parse_id(raw_id)?;
    db.with_conn(|conn| income_reports::get_income_report(conn, id))?
        .ok_or(ServerError::NotFound)
}

fn deliver(artifact: &DocumentArtifact, prefix: &str, delivery: Delivery) -> ResultResp {
    match delivery {
        Delivery::Download => word_download_response(artifact, prefix),
        Delivery::Print => print_response(artifact),
    }
}

fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse::<i64>()
        .map_err(|_| ServerError::BadRequest(format!("invalid id '{raw}'")))
}

fn read_json<T: DeserializeOwned>(req: Request) -> Result<T, ServerError> {
    serde_json::from_reader(req.into_body().reader())
        .map_err(|e| ServerError::BadRequest(format!("invalid JSON body: {e}")))
}
