use crate::mapping::FormMapping;
use serde::Serialize;

/// One populated field prepared for display.
#[derive(Debug, Clone, Serialize)]
pub struct SectionEntry {
    pub field: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormSection {
    pub title: String,
    pub entries: Vec<SectionEntry>,
}

/// A completed mapping grouped into the fixed APR presentation sections.
///
/// Used by renderers that redraw the whole form when the source document has
/// no fillable fields. A field may appear under more than one section when
/// its name matches several groups (e.g. dividend repatriation figures show
/// both in the financial position and repatriation sections); fields matched
/// by no group land in a trailing "Other" section so nothing is dropped.
#[derive(Debug, Clone, Serialize)]
pub struct FormSections {
    sections: Vec<FormSection>,
}

fn period_fields(key: &str) -> bool {
    matches!(key, "from_date" | "to_date")
}

fn uin_fields(key: &str) -> bool {
    key == "uin"
}

fn capital_structure_fields(key: &str) -> bool {
    matches!(
        key,
        "indian_capital_amount"
            | "indian_capital_percentage"
            | "foreign_capital_amount"
            | "foreign_capital_percentage"
    )
}

fn control_fields(key: &str) -> bool {
    key == "control_status"
}

fn shareholding_fields(key: &str) -> bool {
    key.contains("partner") && (key.contains("name") || key.contains("stake"))
}

fn financial_position_fields(key: &str) -> bool {
    ["net_profit", "dividend", "net_worth"]
        .iter()
        .any(|term| key.contains(term))
}

fn repatriation_fields(key: &str) -> bool {
    [
        "repatriation",
        "repayment",
        "exports",
        "royalties",
        "technical",
        "consultancy",
    ]
    .iter()
    .any(|term| key.contains(term))
}

fn profit_fields(key: &str) -> bool {
    key.contains("profit") || key.contains("retained")
}

fn fdi_refund_fields(key: &str) -> bool {
    ["fdi", "refund", "transaction"]
        .iter()
        .any(|term| key.contains(term))
}

fn sds_fields(key: &str) -> bool {
    key.contains("sds")
}

fn declaration_fields(key: &str) -> bool {
    ["authorized", "declaration", "telephone", "email"]
        .iter()
        .any(|term| key.contains(term))
}

fn auditor_fields(key: &str) -> bool {
    ["auditor", "audit", "firm", "udin"]
        .iter()
        .any(|term| key.contains(term))
}

fn ad_bank_fields(key: &str) -> bool {
    key.contains("ad_bank")
}

const SECTION_RULES: &[(&str, fn(&str) -> bool)] = &[
    ("I. APR Period", period_fields),
    ("II. UIN", uin_fields),
    ("III. Capital Structure", capital_structure_fields),
    ("IV. Control", control_fields),
    ("V. Shareholding Pattern", shareholding_fields),
    ("VI. Financial Position", financial_position_fields),
    ("VII. Repatriation", repatriation_fields),
    ("VIII-IX. Profit & Retained Earnings", profit_fields),
    ("X-XI. FDI & Refunds", fdi_refund_fields),
    ("XII. SDS Details", sds_fields),
    ("Declaration", declaration_fields),
    ("Auditor Certificate", auditor_fields),
    ("AD Bank Certificate", ad_bank_fields),
];

impl FormSections {
    pub fn from_mapping(mapping: &FormMapping) -> Self {
        let mut sections = Vec::with_capacity(SECTION_RULES.len() + 1);
        let mut grouped: Vec<&str> = Vec::new();

        for (title, matcher) in SECTION_RULES {
            let entries: Vec<SectionEntry> = mapping
                .iter()
                .filter(|&(key, value)| matcher(key) && !value.trim().is_empty())
                .map(|(key, value)| {
                    grouped.push(key);
                    SectionEntry {
                        field: key.to_string(),
                        label: field_label(key),
                        value: value.to_string(),
                    }
                })
                .collect();

            if !entries.is_empty() {
                sections.push(FormSection {
                    title: title.to_string(),
                    entries,
                });
            }
        }

        let other: Vec<SectionEntry> = mapping
            .iter()
            .filter(|&(key, value)| !grouped.contains(&key) && !value.trim().is_empty())
            .map(|(key, value)| SectionEntry {
                field: key.to_string(),
                label: field_label(key),
                value: value.to_string(),
            })
            .collect();

        if !other.is_empty() {
            sections.push(FormSection {
                title: "Other".to_string(),
                entries: other,
            });
        }

        Self { sections }
    }

    pub fn sections(&self) -> &[FormSection] {
        &self.sections
    }

    pub fn total_fields(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    pub fn to_markdown(&self) -> String {
        let mut output = String::new();
        output.push_str("# Annual Performance Report\n\n");

        for section in &self.sections {
            output.push_str(&format!("## {}\n\n", section.title));
            for entry in &section.entries {
                output.push_str(&format!("- **{}:** {}\n", entry.label, entry.value));
            }
            output.push('\n');
        }

        output
    }

    pub fn to_csv(&self) -> String {
        let mut output = String::new();
        output.push_str("Section,Field,Value\n");

        for section in &self.sections {
            for entry in &section.entries {
                output.push_str(&format!(
                    "{},{},\"{}\"\n",
                    section.title,
                    entry.field,
                    entry.value.replace('"', "\"\"")
                ));
            }
        }

        output
    }
}

fn field_label(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
