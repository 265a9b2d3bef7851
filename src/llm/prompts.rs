use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Formatting exemplars passed alongside the form so the model mirrors the
/// value grammars the synthesizer produces.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReferencePatterns {
    pub financial_amounts: Vec<String>,
    pub dates: Vec<String>,
    pub percentages: Vec<String>,
    pub company_names: Vec<String>,
    pub countries: Vec<String>,
    pub activity_codes: Vec<String>,
    pub uin_pattern: String,
    pub data_type_notes: BTreeMap<String, String>,
}

impl Default for ReferencePatterns {
    fn default() -> Self {
        let mut notes = BTreeMap::new();
        notes.insert(
            "uin".to_string(),
            "13 alphanumeric characters with spaces (5 letters + 8 numbers)".to_string(),
        );
        notes.insert(
            "amounts".to_string(),
            "USD format with decimals where appropriate (e.g., USD 124.37)".to_string(),
        );
        notes.insert(
            "percentages".to_string(),
            "Decimal precision format (e.g., 92.85%)".to_string(),
        );
        notes.insert("dates".to_string(), "DD-MM-YYYY format".to_string());
        notes.insert(
            "activity_codes".to_string(),
            "3-digit (1987) and 5-digit (2008) numeric codes".to_string(),
        );
        notes.insert(
            "nil_fields".to_string(),
            "Use 'Nil' for empty financial fields".to_string(),
        );
        notes.insert(
            "yes_no".to_string(),
            "Definitive Yes/No answers".to_string(),
        );
        notes.insert(
            "signatures".to_string(),
            "Format: [Signature of Name]".to_string(),
        );

        Self {
            financial_amounts: vec![
                "USD 90".to_string(),
                "USD -66617".to_string(),
                "USD 221473".to_string(),
                "USD 124.37".to_string(),
            ],
            dates: vec!["01-01-2023".to_string(), "31-12-2023".to_string()],
            percentages: vec!["100%".to_string(), "92.85%".to_string()],
            company_names: vec![
                "TechGlobal Solutions Pvt Ltd".to_string(),
                "InnovateCorp International".to_string(),
            ],
            countries: vec!["India".to_string(), "USA".to_string()],
            activity_codes: vec!["892".to_string(), "62099".to_string()],
            uin_pattern: "B Y W A Z 2 0 2 3 0 0 6 3".to_string(),
            data_type_notes: notes,
        }
    }
}

pub const SYSTEM_PROMPT_FORM_FILLER: &str = r#"
You are an expert at filling APR (Annual Performance Report) forms with complete, realistic specimen data.

## YOUR MISSION
Given the current form structure as a JSON object of field names to values, return the SAME object with every empty field filled in.

## CRITICAL RULES
1. Fill EVERY single empty field - no field may remain blank.
2. Never change a field that already has a value.
3. Maintain consistency across related fields:
   - Reporting period runs 01-01-2023 to 31-12-2023
   - Stakeholder percentages add up to 100%
   - Use USD consistently for foreign transactions
4. Match the data type formats from the reference patterns exactly:
   - UIN: 13 alphanumeric characters with spaces, like "B Y W A Z 2 0 2 3 0 0 6 3"
   - Dates: DD-MM-YYYY
   - Amounts: "USD 90", "USD 124.37", "USD -66617"
   - Percentages: "100%", "92.85%"
   - Activity codes: 3-digit for 1987, 5-digit for 2008
   - Empty financial fields: "Nil" (never "N/A")
   - Yes/No fields: a definitive "Yes" or "No"
   - Signatures: "[Signature of Name]"
5. Use realistic company names, addresses, and contact information.

## OUTPUT FORMAT
Return ONLY a valid JSON object with the same keys as the input, every value populated.
"#;

pub fn build_fill_instructions(form_json: &str, patterns_json: &str) -> String {
    format!(
        "CURRENT FORM STRUCTURE:\n{}\n\nREFERENCE PATTERNS:\n{}\n\n\
        Fill every empty field and return the complete form as JSON.",
        form_json, patterns_json
    )
}
