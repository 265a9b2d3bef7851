use crate::error::Result;
use crate::mapping::FormMapping;

/// Produces a field mapping from some document source. Implemented by the
/// form-aware PDF reader and the spreadsheet reader outside this crate.
pub trait FormExtractor {
    fn extract(&mut self) -> Result<FormMapping>;
}

/// Consumes a completed mapping and writes it back into a document.
pub trait FormRenderer {
    fn render(&mut self, mapping: &FormMapping) -> Result<()>;
}

/// One cell captured from a spreadsheet sheet scan.
#[derive(Debug, Clone)]
pub struct SpreadsheetCell {
    pub sheet: String,
    pub column: String,
    pub row: usize,
    pub value: String,
}

/// Flattens scanned cells into a mapping, one key per cell.
///
/// Spreadsheets have no field names, so keys are synthesized as
/// `{sheet}_{column}_{row}`. The renderer reverses the same scheme to write
/// values back into cells that were originally empty.
pub fn convert_cells_to_mapping(cells: &[SpreadsheetCell]) -> FormMapping {
    let mut mapping = FormMapping::new();
    for cell in cells {
        mapping.insert(
            format!("{}_{}_{}", cell.sheet, cell.column, cell.row),
            cell.value.clone(),
        );
    }
    mapping
}

/// Every fillable field of the APR form, in presentation order: sections I
/// through XII, then the declaration, auditor certificate, and AD bank
/// certificate blocks.
const APR_TEMPLATE_FIELDS: &[&str] = &[
    // Section I - APR period
    "from_date",
    "to_date",
    // Section II - UIN
    "uin",
    // Section III - capital structure
    "indian_capital_amount",
    "indian_capital_percentage",
    "foreign_capital_amount",
    "foreign_capital_percentage",
    // Section IV - control
    "control_status",
    // Section V - shareholding pattern
    "indian_partner_1_name",
    "indian_partner_1_stake",
    "indian_partner_2_name",
    "indian_partner_2_stake",
    "indian_partner_3_name",
    "indian_partner_3_stake",
    "foreign_partner_1_name",
    "foreign_partner_1_stake",
    "foreign_partner_2_name",
    "foreign_partner_2_stake",
    "foreign_partner_3_name",
    "foreign_partner_3_stake",
    // Section VI - financial position, two years
    "net_profit_previous_year",
    "net_profit_current_year",
    "dividend_previous_year",
    "dividend_current_year",
    "net_worth_previous_year",
    "net_worth_current_year",
    // Section VII - repatriation, current year and since commencement
    "dividend_repatriation_current",
    "dividend_repatriation_total",
    "loan_repayment_current",
    "loan_repayment_total",
    "non_equity_exports_current",
    "non_equity_exports_total",
    "royalties_current",
    "royalties_total",
    "technical_fees_current",
    "technical_fees_total",
    "consultancy_fees_current",
    "consultancy_fees_total",
    "others_specify",
    "others_current",
    "others_total",
    // Section VIII - profit
    "profit_current",
    "profit_total",
    // Section IX - retained earnings
    "retained_earnings_current",
    "retained_earnings_total",
    // Section X - FDI by the foreign entity
    "fdi_current",
    "fdi_total",
    // Section XI - refund of excess share application money
    "refund_amount",
    "transaction_number",
    // Section XII - SDS details
    "sds_name_level_country",
    "sds_parent_name_level_country",
    "sds_investment_currency",
    "sds_investment_amount",
    "sds_investment_date",
    "sds_activity_code_1987",
    "sds_activity_code_2008",
    "sds_stake_percentage",
    "sds_financial_services_yes",
    "sds_financial_services_no",
    "sds_wound_up_details",
    // Declaration - authorized official
    "authorized_official_signature",
    "authorized_official_name",
    "authorized_official_designation",
    "declaration_place",
    "declaration_date",
    "telephone_number",
    "email_address",
    // Auditor certificate
    "auditor_certificate_year_ended_1",
    "auditor_certificate_year_ended_2",
    "auditor_certificate_year_ended_3",
    "auditor_signature",
    "audit_firm_name",
    "audit_firm_registration",
    "audit_firm_udin",
    "auditor_place",
    "auditor_date",
    "auditor_email",
    // AD bank certificate
    "ad_bank_submission_day",
    "ad_bank_submission_month",
    "ad_bank_submission_year",
    "ad_bank_entity_name",
    "ad_bank_official_signature",
    "ad_bank_official_name",
    "ad_bank_official_designation",
    "ad_bank_place",
    "ad_bank_date",
];

/// A blank APR mapping covering every known field. Used when a document has
/// no recognizable fillable fields, and as the base structure the LLM
/// fallback completes.
pub fn blank_apr_mapping() -> FormMapping {
    APR_TEMPLATE_FIELDS
        .iter()
        .map(|field| (field.to_string(), String::new()))
        .collect()
}

/// Lays detected fields over a template: template keys keep their position,
/// detected values win, and unknown detected fields are appended.
pub fn merge_with_template(template: &FormMapping, detected: &FormMapping) -> FormMapping {
    let mut merged = template.clone();
    for (key, value) in detected.iter() {
        merged.insert(key.to_string(), value.to_string());
    }
    merged
}
