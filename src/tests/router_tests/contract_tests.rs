// src/tests/router_tests/contract_tests.rs

use crate::documents::contract::{DEPOSIT_MARKER, INSURANCE_MARKER};
use crate::tests::utils::{body_bytes, body_string, create, get, header, make_db};
use crate::db::Database;
use serde_json::{json, Value};

fn seed_property(db: &Database) {
    create(
        db,
        "/properties",
        &json!({
            "id": "ap-204",
            "title": "Apartamento Batel",
            "property_type": "Apartamento",
            "address": {
                "street": "Rua Bispo Dom José",
                "number": "2110",
                "complement": "Apto 204",
                "neighborhood": "Batel",
                "city": "Curitiba",
                "state": "PR",
                "zip": "80440080"
            },
            "price": "2000",
            "condo_fee": "450.50",
            "fire_insurance_fee": "30",
            "iptu_fee": "120",
            "owner_name": "Helena Prado",
            "owner_tax_id": "123.456.789-00"
        }),
    );
}

fn seed_lease(db: &Database, warranty: &str) -> Value {
    create(
        db,
        "/leases",
        &json!({
            "tenant_name": "João da Silva",
            "tenant_tax_id": "987.654.321-00",
            "property_ref": "ap-204",
            "start_date": "2026-01-10",
            "duration_months": 30,
            "monthly_value": "2300",
            "payment_due_day": 5,
            "warranty_type": warranty,
            "condo_variation": "variavel",
            "residents": "Maria da Silva\n\n  Pedro da Silva  "
        }),
    )
}

#[test]
fn contract_download_is_word_attachment() {
    let db = make_db("contract_download");
    seed_property(&db);
    let id = seed_lease(&db, "caucao");

    let resp = get(&db, &format!("/leases/{id}/contract.doc"));
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), "application/msword; charset=utf-8");
    assert!(header(&resp, "Content-Disposition")
        .contains("filename*=UTF-8''Contrato_Jo%C3%A3o_da_Silva.doc"));

    let bytes = body_bytes(resp);
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);

    let html = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert!(html.contains("CLÁUSULA 1ª"));
    assert!(html.contains("CLÁUSULA 9ª"));
    assert!(html.contains("R$ 2.300,00"));
    assert!(html.contains("R$ 2.900,50"), "total of rent and fees");
    assert!(html.contains("[Com variação]"));
    assert!(html.contains("Maria da Silva"));
    assert!(html.contains("Pedro da Silva"));
    assert!(html.contains("10/01/2026"));
    assert!(html.contains("10/07/2028"), "end date derived from duration");
    assert!(html.contains("Helena Prado"), "landlord falls back to owner");
    assert!(html.contains("Curitiba, "));
    assert!(!html.contains("window.print"));
}

#[test]
fn deposit_contract_states_twice_the_rent() {
    let db = make_db("contract_deposit");
    seed_property(&db);
    let id = seed_lease(&db, "caucao");

    let html = body_string(get(&db, &format!("/leases/{id}/contract/print")));
    assert!(html.contains(DEPOSIT_MARKER));
    assert!(html.contains("R$ 4.600,00"));
    assert!(html.contains("Quatro mil e seiscentos reais"));
    assert!(!html.contains(INSURANCE_MARKER));
}

#[test]
fn insurance_contract_has_no_deposit_amount() {
    let db = make_db("contract_insurance");
    seed_property(&db);
    let id = seed_lease(&db, "seguro_fianca");

    let html = body_string(get(&db, &format!("/leases/{id}/contract/print")));
    assert!(html.contains(INSURANCE_MARKER));
    assert!(!html.contains(DEPOSIT_MARKER));
    assert!(!html.contains("R$ 4.600,00"));
}

#[test]
fn print_mode_serves_same_document_with_print_script() {
    let db = make_db("contract_print");
    seed_property(&db);
    let id = seed_lease(&db, "caucao");

    let download = body_bytes(get(&db, &format!("/leases/{id}/contract.doc")));
    let print = get(&db, &format!("/leases/{id}/contract/print"));
    assert_eq!(print.status(), 200);
    assert!(header(&print, "Content-Type").starts_with("text/html"));

    let printable = body_string(print);
    assert!(printable.contains("window.print()"));
    assert!(printable.contains("window.close()"));

    let document = String::from_utf8(download[3..].to_vec()).unwrap();
    let head = &document[..document.rfind("</body>").unwrap()];
    assert!(printable.starts_with(head));
}

#[test]
fn unresolved_property_still_produces_contract() {
    let db = make_db("contract_unresolved");
    let id = create(
        &db,
        "/leases",
        &json!({
            "tenant_name": "Ana Costa",
            "property_ref": "Casa da Praia",
            "warranty_type": "caucao"
        }),
    );

    let resp = get(&db, &format!("/leases/{id}/contract.doc"));
    assert_eq!(resp.status(), 200);

    let html = String::from_utf8(body_bytes(resp)[3..].to_vec()).unwrap();
    assert!(html.contains("Imóvel"));
    assert!(html.contains("Casa da Praia"));
    assert!(html.contains("R$ 0,00"));
    assert!(html.contains("Nenhum morador adicional declarado."));
    assert!(html.contains("São Paulo, "));
}

#[test]
fn unknown_or_malformed_lease_ids_are_rejected() {
    let db = make_db("contract_missing");

    assert_eq!(get(&db, "/leases/999/contract.doc").status(), 404);
    assert_eq!(get(&db, "/leases/abc/contract/print").status(), 400);
}
