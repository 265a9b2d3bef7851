//! Cross-field adjustments applied once after per-field synthesis.
//!
//! Individual fields are synthesized in isolation; this pass enforces the
//! relationships between them: a coherent reporting period, shareholding
//! percentages that account for the whole, uniform currency prefixes, and a
//! contact address derived from the company on record.

use crate::mapping::FormMapping;
use crate::synthesizer::strip_company_tokens;
use log::debug;

pub fn apply_consistency(mapping: &mut FormMapping) {
    enforce_reporting_period(mapping);
    enforce_percentage_allocation(mapping);
    enforce_currency_prefix(mapping);
    derive_contact_email(mapping);
}

fn enforce_reporting_period(mapping: &mut FormMapping) {
    if mapping.contains_key("from_date") && mapping.contains_key("to_date") {
        mapping.set("from_date", "01-01-2023");
        mapping.set("to_date", "31-12-2023");
        debug!("Pinned reporting period to calendar year 2023");
    }
}

fn enforce_percentage_allocation(mapping: &mut FormMapping) {
    let percentage_keys: Vec<String> = mapping
        .iter()
        .filter(|(key, value)| key.to_lowercase().contains("percentage") || value.contains('%'))
        .map(|(key, _)| key.to_string())
        .collect();

    if percentage_keys.len() < 2 {
        return;
    }

    // The first holder takes the full allocation; the rest share what is
    // left of the 100 once it is assigned.
    let total: i64 = 100;
    let allocated: i64 = 100;
    for (i, key) in percentage_keys.iter().enumerate() {
        if i == 0 {
            mapping.set(key.clone(), "100%");
        } else {
            let remaining = (total - allocated).max(0);
            mapping.set(key.clone(), format!("{}%", remaining));
        }
    }
    debug!(
        "Rebalanced {} percentage fields to a single full holder",
        percentage_keys.len()
    );
}

fn enforce_currency_prefix(mapping: &mut FormMapping) {
    let currency_keys: Vec<String> = mapping
        .iter()
        .filter(|(_, value)| value.contains("USD") || value.contains("INR"))
        .map(|(key, _)| key.to_string())
        .collect();

    for key in currency_keys {
        let Some(value) = mapping.get(&key) else {
            continue;
        };
        if !value.is_empty() && !value.contains("USD") && !value.contains("INR") {
            let prefixed = format!("USD {}", value);
            mapping.set(key, prefixed);
        }
    }
}

fn derive_contact_email(mapping: &mut FormMapping) {
    let (Some(_), Some(company)) = (mapping.get("email"), mapping.get("company")) else {
        return;
    };

    let mailbox = strip_company_tokens(company, &[" ", "ltd", "pvt"]);
    if !mailbox.is_empty() {
        let email = format!("contact@{}.com", mailbox);
        mapping.set("email", email);
        debug!("Derived contact email from company name");
    }
}
