// src/tests/router_tests/intake_tests.rs

use crate::tests::utils::{body_string, create, get, make_db, send_json};
use serde_json::json;

#[test]
fn index_links_every_delivery_mode() {
    let db = make_db("intake_index");
    let lease_id = create(
        &db,
        "/leases",
        &json!({ "tenant_name": "Ana Costa", "property_ref": "ap-1", "monthly_value": "1500" }),
    );
    let report_id = create(
        &db,
        "/income-reports",
        &json!({ "property_ref": "ap-1", "landlord_name": "Helena Prado" }),
    );

    let resp = get(&db, "/");
    assert_eq!(resp.status(), 200);

    let html = body_string(resp);
    assert!(html.contains("Ana Costa"));
    assert!(html.contains("R$ 1.500,00"));
    assert!(html.contains("Em análise"));
    assert!(html.contains(&format!("/leases/{lease_id}/contract.doc")));
    assert!(html.contains(&format!("/leases/{lease_id}/contract/print")));
    assert!(html.contains(&format!("/income-reports/{report_id}/report.doc")));
    assert!(html.contains(&format!("/income-reports/{report_id}/report/print")));
    assert!(html.contains(&format!("/income-reports/{report_id}/report.xlsx")));
}

#[test]
fn empty_index_says_so() {
    let db = make_db("intake_empty");

    let html = body_string(get(&db, "/"));
    assert!(html.contains("Nenhum contrato cadastrado."));
    assert!(html.contains("Nenhum informe cadastrado."));
}

#[test]
fn property_upsert_replaces_by_id() {
    let db = make_db("intake_upsert");
    let property = |title: &str| {
        json!({ "id": "lote-3", "title": title, "property_type": "Terreno" })
    };

    assert_eq!(create(&db, "/properties", &property("Lote antigo")), json!("lote-3"));
    assert_eq!(create(&db, "/properties", &property("Lote novo")), json!("lote-3"));

    let titles: Vec<String> = db
        .with_conn(|conn| crate::db::properties::list_properties(conn))
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, vec!["Lote novo".to_string()]);
}

#[test]
fn malformed_bodies_are_bad_requests() {
    let db = make_db("intake_bad");

    let resp = send_json(&db, "POST", "/leases", &json!({ "tenant_name": "Sem imóvel" }));
    assert_eq!(resp.status(), 400);

    let resp = send_json(&db, "POST", "/properties", &json!({ "title": "Sem id", "property_type": "Casa" }));
    assert_eq!(resp.status(), 400);

    let resp = send_json(&db, "POST", "/clients", &json!("not an object"));
    assert_eq!(resp.status(), 400);
}

#[test]
fn unknown_routes_are_not_found() {
    let db = make_db("intake_unknown");

    assert_eq!(get(&db, "/login").status(), 404);
    assert_eq!(send_json(&db, "DELETE", "/company", &json!({})).status(), 404);
}
