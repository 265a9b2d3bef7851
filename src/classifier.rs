use crate::schema::{ActivityCodeStandard, DatePart, FieldCategory};

/// A field name prepared for rule evaluation. Predicates match on the
/// lowercased form; the raw form is kept for the literal year digits in
/// activity-code names and for checkbox suffixes.
struct FieldName<'a> {
    raw: &'a str,
    lower: String,
}

type Rule = fn(&FieldName) -> Option<FieldCategory>;

const DATE_TERMS: &[&str] = &["date", "from_date", "to_date"];

const FINANCIAL_TERMS: &[&str] = &[
    "amount",
    "usd",
    "inr",
    "capital",
    "worth",
    "profit",
    "dividend",
    "repatriation",
    "repayment",
    "exports",
    "royalties",
    "fees",
    "fdi",
    "refund",
];

// Monetary fields that may legitimately be reported as "Nil", unless
// qualified as a current-year or cumulative figure.
const NILABLE_TERMS: &[&str] = &[
    "repatriation",
    "repayment",
    "exports",
    "royalties",
    "fees",
    "profit",
    "earnings",
];

const PERCENTAGE_TERMS: &[&str] = &["percentage", "%", "stake", "share"];

const ORGANIZATION_TERMS: &[&str] = &["company", "entity", "firm", "sds", "partner"];

const PERSON_TERMS: &[&str] = &["contact", "person", "authorized", "official", "auditor"];

const REGISTRATION_TERMS: &[&str] = &["registration", "transaction", "udin"];

const BOOLEAN_TERMS: &[&str] = &["control", "financial_services", "yes", "no"];

const DATE_COMPONENT_TERMS: &[&str] = &["day", "month", "year"];

/// The classification chain. Evaluated top to bottom, first match wins; the
/// relative order resolves keyword overlaps (for example "stake" fields are
/// percentages even though "sds_stake" also names an SDS entity, and
/// "transaction_number" is a registration number despite containing "no").
const RULES: &[Rule] = &[
    date_rule,
    uin_rule,
    monetary_rule,
    percentage_rule,
    organization_rule,
    country_rule,
    address_rule,
    phone_rule,
    email_rule,
    activity_code_rule,
    person_rule,
    designation_rule,
    registration_rule,
    currency_rule,
    level_rule,
    signature_rule,
    audit_firm_rule,
    boolean_rule,
    date_component_rule,
    specify_rule,
    nilable_rule,
];

/// Maps a field name to its semantic category.
///
/// Pure and deterministic: no state, no randomness, no I/O. Matching is
/// case-insensitive except for the "1987"/"2008" year digits, which are
/// tested against the raw name.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldClassifier;

impl FieldClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, field_name: &str) -> FieldCategory {
        let name = FieldName {
            raw: field_name,
            lower: field_name.to_lowercase(),
        };

        for rule in RULES {
            if let Some(category) = rule(&name) {
                return refine(category, &name);
            }
        }

        FieldCategory::Unrecognized
    }
}

// Downgrades generic monetary matches for repatriation-style fields, which
// may be reported as "Nil" when no current-year/cumulative qualifier pins
// them to a concrete figure.
fn refine(category: FieldCategory, name: &FieldName) -> FieldCategory {
    if category == FieldCategory::MonetaryAmount && is_nilable_financial(&name.lower) {
        return FieldCategory::NilableFinancial;
    }
    category
}

fn contains_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| haystack.contains(term))
}

fn is_nilable_financial(lower: &str) -> bool {
    contains_any(lower, NILABLE_TERMS) && !lower.contains("current") && !lower.contains("total")
}

fn date_rule(name: &FieldName) -> Option<FieldCategory> {
    contains_any(&name.lower, DATE_TERMS).then_some(FieldCategory::Date)
}

fn uin_rule(name: &FieldName) -> Option<FieldCategory> {
    name.lower.contains("uin").then_some(FieldCategory::Uin)
}

fn monetary_rule(name: &FieldName) -> Option<FieldCategory> {
    contains_any(&name.lower, FINANCIAL_TERMS).then_some(FieldCategory::MonetaryAmount)
}

fn percentage_rule(name: &FieldName) -> Option<FieldCategory> {
    contains_any(&name.lower, PERCENTAGE_TERMS).then_some(FieldCategory::Percentage)
}

fn is_audit_firm(lower: &str) -> bool {
    lower.contains("firm") && (lower.contains("audit") || lower.contains("chartered"))
}

fn audit_firm_rule(name: &FieldName) -> Option<FieldCategory> {
    is_audit_firm(&name.lower).then_some(FieldCategory::AuditFirmName)
}

fn organization_rule(name: &FieldName) -> Option<FieldCategory> {
    // "audit_firm_name" contains both "firm" and "name" but is a firm-name
    // template, not a company draw; it belongs to the audit-firm rule
    // further down the chain.
    (contains_any(&name.lower, ORGANIZATION_TERMS)
        && name.lower.contains("name")
        && !is_audit_firm(&name.lower))
    .then_some(FieldCategory::OrganizationName)
}

fn country_rule(name: &FieldName) -> Option<FieldCategory> {
    name.lower
        .contains("country")
        .then_some(FieldCategory::Country)
}

fn address_rule(name: &FieldName) -> Option<FieldCategory> {
    (name.lower.contains("address") || name.lower.contains("place"))
        .then_some(FieldCategory::Address)
}

fn phone_rule(name: &FieldName) -> Option<FieldCategory> {
    contains_any(&name.lower, &["telephone", "phone", "mobile"])
        .then_some(FieldCategory::PhoneNumber)
}

fn email_rule(name: &FieldName) -> Option<FieldCategory> {
    name.lower.contains("email").then_some(FieldCategory::Email)
}

fn activity_code_rule(name: &FieldName) -> Option<FieldCategory> {
    if !name.lower.contains("activity") {
        return None;
    }
    if name.raw.contains("1987") {
        return Some(FieldCategory::ActivityCode(ActivityCodeStandard::Nsic1987));
    }
    if name.raw.contains("2008") {
        return Some(FieldCategory::ActivityCode(ActivityCodeStandard::Nic2008));
    }
    None
}

fn person_rule(name: &FieldName) -> Option<FieldCategory> {
    (contains_any(&name.lower, PERSON_TERMS) && name.lower.contains("name"))
        .then_some(FieldCategory::PersonName)
}

fn designation_rule(name: &FieldName) -> Option<FieldCategory> {
    name.lower
        .contains("designation")
        .then_some(FieldCategory::Designation)
}

fn registration_rule(name: &FieldName) -> Option<FieldCategory> {
    contains_any(&name.lower, REGISTRATION_TERMS).then_some(FieldCategory::RegistrationNumber)
}

fn currency_rule(name: &FieldName) -> Option<FieldCategory> {
    name.lower
        .contains("currency")
        .then_some(FieldCategory::Currency)
}

fn level_rule(name: &FieldName) -> Option<FieldCategory> {
    name.lower.contains("level").then_some(FieldCategory::Level)
}

fn signature_rule(name: &FieldName) -> Option<FieldCategory> {
    name.lower
        .contains("signature")
        .then_some(FieldCategory::Signature)
}

fn boolean_rule(name: &FieldName) -> Option<FieldCategory> {
    (contains_any(&name.lower, BOOLEAN_TERMS)
        || name.raw.ends_with("_yes")
        || name.raw.ends_with("_no"))
    .then_some(FieldCategory::Boolean)
}

fn date_component_rule(name: &FieldName) -> Option<FieldCategory> {
    if !contains_any(&name.lower, DATE_COMPONENT_TERMS) {
        return None;
    }
    let part = if name.lower.contains("day") {
        DatePart::Day
    } else if name.lower.contains("month") {
        DatePart::Month
    } else {
        DatePart::Year
    };
    Some(FieldCategory::DateComponent(part))
}

fn specify_rule(name: &FieldName) -> Option<FieldCategory> {
    name.lower
        .contains("specify")
        .then_some(FieldCategory::FreeTextSpecify)
}

fn nilable_rule(name: &FieldName) -> Option<FieldCategory> {
    is_nilable_financial(&name.lower).then_some(FieldCategory::NilableFinancial)
}
