// templates/pages/home.rs

use crate::domain::{IncomeReportRecord, LeaseRecord};
use crate::format::{format_brl, format_date, or_placeholder};
use crate::templates::{card, desktop_layout, document_links};
use maud::{html, Markup};

pub struct HomeVm {
    pub leases: Vec<LeaseRecord>,
    pub reports: Vec<IncomeReportRecord>,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Documentos",
        html! {
            main {
                h1 { "Documentos" }

                (card("Contratos de locação", vm.leases.len(), html! {
                    @if vm.leases.is_empty() {
                        p { "Nenhum contrato cadastrado." }
                    } @else {
                        table {
                            thead {
                                tr {
                                    th { "Locatário" }
                                    th { "Imóvel" }
                                    th { "Início" }
                                    th { "Aluguel" }
                                    th { "Status" }
                                    th { "Documento" }
                                }
                            }
                            tbody {
                                @for lease in &vm.leases {
                                    tr {
                                        td { (or_placeholder(Some(lease.tenant_name.as_str()))) }
                                        td { (lease.property_ref) }
                                        td { (format_date(lease.start_date.as_deref())) }
                                        td {
                                            @match lease.monthly_value {
                                                Some(value) => { (format_brl(value)) }
                                                None => { "Valor do imóvel" }
                                            }
                                        }
                                        td { span class="badge" { (lease.status.label()) } }
                                        td {
                                            (document_links(&[
                                                ("DOC", format!("/leases/{}/contract.doc", lease.id)),
                                                ("PDF", format!("/leases/{}/contract/print", lease.id)),
                                            ]))
                                        }
                                    }
                                }
                            }
                        }
                    }
                }))

                (card("Informes de rendimentos", vm.reports.len(), html! {
                    @if vm.reports.is_empty() {
                        p { "Nenhum informe cadastrado." }
                    } @else {
                        table {
                            thead {
                                tr {
                                    th { "Locador" }
                                    th { "Imóvel" }
                                    th { "Data do contrato" }
                                    th { "Documento" }
                                }
                            }
                            tbody {
                                @for report in &vm.reports {
                                    tr {
                                        td { (or_placeholder(report.landlord_name.as_deref())) }
                                        td { (report.property_ref) }
                                        td { (format_date(report.contract_date.as_deref())) }
                                        td {
                                            (document_links(&[
                                                ("DOC", format!("/income-reports/{}/report.doc", report.id)),
                                                ("PDF", format!("/income-reports/{}/report/print", report.id)),
                                                ("XLSX", format!("/income-reports/{}/report.xlsx", report.id)),
                                            ]))
                                        }
                                    }
                                }
                            }
                        }
                    }
                }))
            }
        },
    )
}
