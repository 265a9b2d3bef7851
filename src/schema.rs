use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Industrial activity code standard referenced by APR forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub enum ActivityCodeStandard {
    /// 3-digit codes from the 1987 classification.
    Nsic1987,
    /// 5-digit codes from the 2008 classification.
    Nic2008,
}

/// Which component of a day/month/year submission block a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub enum DatePart {
    Day,
    Month,
    Year,
}

/// Semantic category of a form field, inferred from its name alone.
///
/// Classification is a pure function of the field name and is recomputed on
/// every run; categories are never persisted with the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub enum FieldCategory {
    /// DD-MM-YYYY dates; "from"/"to" fields pin the 2023 reporting period.
    Date,
    /// 13-character unique identification number, space separated.
    Uin,
    /// "USD"-prefixed amounts with thousands separators.
    MonetaryAmount,
    /// Shareholding and capital percentages.
    Percentage,
    /// Business entity names, including partner entities.
    OrganizationName,
    Country,
    Address,
    PhoneNumber,
    Email,
    ActivityCode(ActivityCodeStandard),
    /// Contact persons, authorized officials, and auditors.
    PersonName,
    Designation,
    /// Firm registrations, transaction numbers, and UDIN codes.
    RegistrationNumber,
    /// ISO currency code fields.
    Currency,
    /// SDS hierarchy level ("Level-1" through "Level-3").
    Level,
    Signature,
    /// Audit firm names such as "Associates & Co - Mumbai".
    AuditFirmName,
    /// Yes/No answers, rendered as a checkmark for `_yes`/`_no` checkboxes.
    Boolean,
    DateComponent(DatePart),
    /// "Others (specify)" free-text slots.
    FreeTextSpecify,
    /// Repatriation-style monetary fields that may legitimately hold "Nil".
    NilableFinancial,
    /// No rule matched; the synthesizer picks "Nil" or "N/A" from the name.
    Unrecognized,
}
