// src/documents/contract.rs
//
// Residential lease contract: summary tables plus numbered clauses.

use chrono::{Local, Months, NaiveDate};
use tracing::debug;

use crate::documents::charges::LeaseCharges;
use crate::documents::model::{Clause, Document, DocumentArtifact, Signature, SummaryTable};
use crate::documents::render::render_document;
use crate::documents::resolution::{resolve_property, PropertyView};
use crate::domain::{LeaseRecord, PropertyRecord, WarrantyType};
use crate::format::{
    amount_in_words, format_brl, format_date, format_naive_date, long_date, or_placeholder,
    parse_iso_date,
};

pub const CONTRACT_TITLE: &str = "CONTRATO DE LOCAÇÃO RESIDENCIAL";

pub const PARTIES_CAPTION: &str = "Partes";
pub const PROPERTY_CAPTION: &str = "Informações do imóvel";
pub const TERM_CAPTION: &str = "Prazo e pagamento";
pub const CHARGES_CAPTION: &str = "Valores mensais";

pub const DEFAULT_DUE_DAY: u32 = 20;
/// Place of signature and jurisdiction when the property has no city.
pub const DEFAULT_CITY: &str = "São Paulo";
pub const NO_RESIDENTS_LINE: &str = "Nenhum morador adicional declarado.";

/// Phrase that only the deposit variant of the warranty clause contains.
pub const DEPOSIT_MARKER: &str = "a título de caução";
/// Phrase that only the insurance variant of the warranty clause contains.
pub const INSURANCE_MARKER: &str = "seguro de fiança locatícia";

pub fn generate_lease_contract_document(
    lease: &LeaseRecord,
    properties: &[PropertyRecord],
) -> DocumentArtifact {
    generate_lease_contract_document_on(lease, properties, Local::now().date_naive())
}

/// Same as [`generate_lease_contract_document`] with a fixed generation date.
pub fn generate_lease_contract_document_on(
    lease: &LeaseRecord,
    properties: &[PropertyRecord],
    today: NaiveDate,
) -> DocumentArtifact {
    let property = resolve_property(&lease.property_ref, properties);
    debug!(
        lease_id = lease.id,
        property_ref = %lease.property_ref,
        resolved = property.is_some(),
        "assembling lease contract"
    );

    let document = assemble_contract(lease, property, today);
    DocumentArtifact {
        title: document.title.clone(),
        file_seed: lease.tenant_name.clone(),
        html: render_document(&document),
    }
}

/// Builds the contract model. Every missing field has a default, so this never fails.
pub fn assemble_contract(
    lease: &LeaseRecord,
    property: Option<&PropertyRecord>,
    today: NaiveDate,
) -> Document {
    let charges = LeaseCharges::compute(lease, property);
    let view = PropertyView::new(&lease.property_ref, property);
    let terms = Terms::from_lease(lease);
    let city = view.city.clone().unwrap_or_else(|| DEFAULT_CITY.to_string());

    let landlord_name = or_placeholder(
        lease
            .landlord_name
            .as_deref()
            .or_else(|| property.and_then(|p| p.owner_name.as_deref())),
    );
    let landlord_tax_id = or_placeholder(
        lease
            .landlord_tax_id
            .as_deref()
            .or_else(|| property.and_then(|p| p.owner_tax_id.as_deref())),
    );
    let tenant_name = or_placeholder(Some(lease.tenant_name.as_str()));
    let condo_tag = lease.condo_variation.unwrap_or_default().tag();

    let tables = vec![
        SummaryTable::key_value(
            PARTIES_CAPTION,
            vec![
                ("Locador", landlord_name.clone()),
                ("CPF/CNPJ do locador", landlord_tax_id),
                ("Locatário", tenant_name.clone()),
                ("CPF do locatário", or_placeholder(lease.tenant_tax_id.as_deref())),
            ],
        ),
        SummaryTable::key_value(
            PROPERTY_CAPTION,
            vec![
                ("Tipo", view.type_label.clone()),
                ("Endereço", view.address.clone()),
                (
                    "Estado do imóvel",
                    or_placeholder(lease.property_condition.as_deref()),
                ),
            ],
        ),
        SummaryTable::key_value(
            TERM_CAPTION,
            vec![
                ("Prazo", terms.duration_label()),
                ("Início", terms.start.clone()),
                ("Término", terms.end.clone()),
                ("Vencimento", format!("Todo dia {}", terms.due_day)),
            ],
        ),
        charges_table(&charges, condo_tag),
    ];

    let clauses = numbered(vec![
        Clause::new("DO OBJETO").paragraph(format!(
            "O LOCADOR dá em locação ao LOCATÁRIO o imóvel do tipo {}, situado em {}, \
             destinado exclusivamente a fins residenciais.",
            view.type_label.to_lowercase(),
            view.address
        )),
        Clause::new("DO PRAZO").paragraph(terms.term_sentence()),
        Clause::new("DO ALUGUEL E DO PAGAMENTO")
            .paragraph(format!(
                "O aluguel mensal é de {} ({}), que somado aos encargos da cláusula de \
                 encargos totaliza {} por mês.",
                format_brl(charges.monthly_rent),
                amount_in_words(charges.monthly_rent),
                format_brl(charges.total_monthly)
            ))
            .paragraph(format!(
                "O pagamento deverá ser efetuado até o dia {} de cada mês, sob pena de multa \
                 de 10% (dez por cento) sobre o valor devido, acrescida de juros de 1% \
                 (um por cento) ao mês.",
                terms.due_day
            )),
        residents_clause(lease),
        warranty_clause(lease.warranty_type, &charges),
        Clause::new("DOS ENCARGOS").paragraph(format!(
            "Além do aluguel, correm por conta do LOCATÁRIO: condomínio de {} {}, seguro \
             incêndio de {}, IPTU de {} e taxa de serviço de {}, totalizando {} mensais.",
            format_brl(charges.condo),
            condo_tag,
            format_brl(charges.fire_insurance),
            format_brl(charges.property_tax),
            format_brl(charges.service_fee),
            format_brl(charges.total_monthly)
        )),
        Clause::new("DA CONSERVAÇÃO E VISTORIA").paragraph(format!(
            "O LOCATÁRIO declara receber o imóvel no seguinte estado: {}. Obriga-se a \
             restituí-lo nas mesmas condições, ressalvado o desgaste natural pelo uso, \
             conforme laudo de vistoria que integra este contrato.",
            or_placeholder(lease.property_condition.as_deref())
        )),
        Clause::new("DA RESCISÃO").paragraph(
            "A infração de qualquer cláusula deste contrato sujeita o infrator à multa \
             equivalente a três aluguéis vigentes, reduzida proporcionalmente ao período \
             de contrato já cumprido, nos termos do art. 4º da Lei nº 8.245/91.",
        ),
        Clause::new("DO FORO").paragraph(format!(
            "Fica eleito o foro da comarca de {city} para dirimir quaisquer questões \
             oriundas deste contrato."
        )),
    ]);

    Document {
        title: CONTRACT_TITLE.to_string(),
        subtitle: None,
        tables,
        clauses,
        closing: Some(format!("{city}, {}.", long_date(today))),
        signatures: vec![
            Signature {
                role: "LOCADOR".to_string(),
                name: landlord_name,
            },
            Signature {
                role: "LOCATÁRIO".to_string(),
                name: tenant_name,
            },
            Signature {
                role: "TESTEMUNHA 1".to_string(),
                name: String::new(),
            },
            Signature {
                role: "TESTEMUNHA 2".to_string(),
                name: String::new(),
            },
        ],
    }
}

fn charges_table(charges: &LeaseCharges, condo_tag: &str) -> SummaryTable {
    let condo_label = format!("Condomínio {condo_tag}");
    let mut table = SummaryTable::key_value(
        CHARGES_CAPTION,
        vec![
            ("Aluguel", format_brl(charges.monthly_rent)),
            (condo_label.as_str(), format_brl(charges.condo)),
            ("Seguro incêndio", format_brl(charges.fire_insurance)),
            ("IPTU", format_brl(charges.property_tax)),
            ("Taxa de serviço", format_brl(charges.service_fee)),
        ],
    );
    table.footer = Some(vec![
        "Total mensal".to_string(),
        format_brl(charges.total_monthly),
    ]);
    table
}

fn residents_clause(lease: &LeaseRecord) -> Clause {
    let mut residents: Vec<String> = lease
        .resident_lines()
        .into_iter()
        .map(str::to_string)
        .collect();
    if residents.is_empty() {
        residents.push(NO_RESIDENTS_LINE.to_string());
    }

    Clause::new("DOS MORADORES")
        .paragraph("Além do LOCATÁRIO, residirão no imóvel as seguintes pessoas:")
        .items(residents)
}

fn warranty_clause(warranty: WarrantyType, charges: &LeaseCharges) -> Clause {
    let clause = Clause::new("DA GARANTIA");
    match warranty {
        WarrantyType::InsuranceBacked => clause.paragraph(format!(
            "Como garantia das obrigações assumidas, o LOCATÁRIO contratará e manterá \
             vigente, durante todo o prazo da locação, {INSURANCE_MARKER} emitido por \
             seguradora autorizada pela SUSEP, nos termos do art. 37, III, da Lei \
             nº 8.245/91, sendo sua apresentação condição para a entrega das chaves."
        )),
        WarrantyType::Deposit => clause
            .paragraph(format!(
                "Como garantia das obrigações assumidas, o LOCATÁRIO entrega ao LOCADOR, \
                 {DEPOSIT_MARKER}, a quantia de {} ({}), equivalente a dois aluguéis, nos \
                 termos do art. 38, §2º, da Lei nº 8.245/91.",
                format_brl(charges.deposit),
                amount_in_words(charges.deposit)
            ))
            .numbered(vec![
                "§1º Havendo inadimplemento, o LOCADOR poderá reter a caução para \
                 compensação dos débitos, independentemente de notificação judicial ou \
                 extrajudicial."
                    .to_string(),
                "§2º A devolução da caução não exime o LOCATÁRIO da responsabilidade pelos \
                 aluguéis e encargos vencidos até a efetiva entrega das chaves."
                    .to_string(),
            ]),
    }
}

/// Prefixes `CLÁUSULA 1ª - ` … to the headings in order.
fn numbered(clauses: Vec<Clause>) -> Vec<Clause> {
    clauses
        .into_iter()
        .enumerate()
        .map(|(i, mut clause)| {
            clause.heading = format!("CLÁUSULA {}ª - {}", i + 1, clause.heading);
            clause
        })
        .collect()
}

/// Formatted term fields of a lease.
struct Terms {
    duration_months: Option<u32>,
    start: String,
    end: String,
    due_day: u32,
}

impl Terms {
    fn from_lease(lease: &LeaseRecord) -> Self {
        let start_date = lease.start_date.as_deref().and_then(parse_iso_date);
        let end_date = lease
            .end_date
            .as_deref()
            .and_then(parse_iso_date)
            .or_else(|| {
                let months = lease.duration_months.filter(|m| *m > 0)?;
                start_date?.checked_add_months(Months::new(months))
            });

        Self {
            duration_months: lease.duration_months.filter(|m| *m > 0),
            start: format_date(lease.start_date.as_deref()),
            end: end_date
                .map(format_naive_date)
                .unwrap_or_else(|| format_date(None)),
            due_day: lease
                .payment_due_day
                .filter(|day| (1..=31).contains(day))
                .unwrap_or(DEFAULT_DUE_DAY),
        }
    }

    fn duration_label(&self) -> String {
        match self.duration_months {
            Some(months) => format!("{months} meses"),
            None => format_date(None),
        }
    }

    fn term_sentence(&self) -> String {
        match self.duration_months {
            Some(months) => format!(
                "A locação vigorará pelo prazo de {months} meses, com início em {} e \
                 término em {}, data em que o LOCATÁRIO se obriga a restituir o imóvel \
                 livre e desocupado.",
                self.start, self.end
            ),
            None => format!(
                "A locação terá início em {} e término em {}, data em que o LOCATÁRIO se \
                 obriga a restituir o imóvel livre e desocupado.",
                self.start, self.end
            ),
        }
    }
}
