use crate::error::{FormFillError, Result};
use crate::ingestion::{blank_apr_mapping, merge_with_template};
use crate::llm::client::GeminiClient;
use crate::llm::prompts::{build_fill_instructions, ReferencePatterns, SYSTEM_PROMPT_FORM_FILLER};
use crate::llm::types::Content;
use crate::mapping::FormMapping;
use crate::FormFiller;
use log::warn;
use std::collections::BTreeMap;

/// LLM-first form completion with the rule-based engine as both safety net
/// and finisher: whatever the model returns is enhanced so every field ends
/// up populated, and any model failure falls back to pure synthesis.
pub struct IntelligentFormFiller {
    client: GeminiClient,
    model: String,
}

impl IntelligentFormFiller {
    pub fn new(client: GeminiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub async fn fill(&self, form: &FormMapping) -> Result<FormMapping> {
        // Detected fields are laid over the full APR structure so the model
        // (and the fallback) always sees every section.
        let merged = merge_with_template(&blank_apr_mapping(), form);

        match self.request_completion(&merged).await {
            Ok(completed) => FormFiller::new().enhance(&completed),
            Err(err) => {
                warn!("LLM completion failed, falling back to synthesis: {}", err);
                FormFiller::new().fill(&merged)
            }
        }
    }

    async fn request_completion(&self, merged: &FormMapping) -> Result<FormMapping> {
        let form_json = serde_json::to_string_pretty(merged)?;
        let patterns_json = serde_json::to_string_pretty(&ReferencePatterns::default())?;
        let instructions = build_fill_instructions(&form_json, &patterns_json);

        let raw = self
            .client
            .generate_content(
                &self.model,
                SYSTEM_PROMPT_FORM_FILLER,
                vec![Content::user(instructions)],
                Some(response_schema()?),
            )
            .await?;

        let model_output: FormMapping = serde_json::from_str(&raw).map_err(|e| {
            FormFillError::CompletionFailed(format!("Model returned unparseable JSON: {}", e))
        })?;

        Ok(overlay_model_output(merged, &model_output))
    }
}

/// Applies model output onto the merged form without trusting it: original
/// field order wins, pre-existing values are never overwritten, and blank
/// model values are ignored.
fn overlay_model_output(merged: &FormMapping, model_output: &FormMapping) -> FormMapping {
    let mut completed = merged.clone();
    for (key, value) in model_output.iter() {
        if value.trim().is_empty() {
            continue;
        }
        let current = completed.get(key).unwrap_or_default();
        if current.trim().is_empty() {
            completed.insert(key.to_string(), value.to_string());
        }
    }
    completed
}

// Gemini structured output: a flat string-to-string object.
fn response_schema() -> Result<serde_json::Value> {
    let root = schemars::schema_for!(BTreeMap<String, String>);
    let mut schema = serde_json::to_value(root)?;
    if let Some(object) = schema.as_object_mut() {
        object.remove("$schema");
        object.remove("title");
    }
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_respects_existing_values_and_order() {
        let mut merged = FormMapping::new();
        merged.insert("from_date", "01-01-2023");
        merged.insert("uin", "");
        merged.insert("country", "");

        let mut model_output = FormMapping::new();
        model_output.insert("country", "India");
        model_output.insert("from_date", "15-06-2023");
        model_output.insert("uin", "  ");

        let completed = overlay_model_output(&merged, &model_output);

        assert_eq!(completed.get("from_date"), Some("01-01-2023"));
        assert_eq!(completed.get("country"), Some("India"));
        assert_eq!(completed.get("uin"), Some(""));

        let keys: Vec<&str> = completed.keys().collect();
        assert_eq!(keys, vec!["from_date", "uin", "country"]);
    }

    #[test]
    fn test_response_schema_is_a_string_map() {
        let schema = response_schema().unwrap();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["additionalProperties"]["type"], "string");
        assert!(schema.get("$schema").is_none());
    }
}
