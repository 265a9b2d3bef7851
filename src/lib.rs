//! # APR Form Filler
//!
//! A library for completing regulatory APR (Annual Performance Report) forms
//! with plausible specimen data. Given a flat mapping of field names to
//! values (extracted from a PDF or spreadsheet by a collaborator), it infers
//! the semantic type of every field from its name, synthesizes a realistic
//! value for each empty field, and enforces cross-field consistency over the
//! result.
//!
//! ## Core Concepts
//!
//! - **FormMapping**: an insertion-ordered field-name → value mapping, built
//!   fresh per run and handed back completed
//! - **Field Classifier**: an ordered keyword rule chain mapping a field name
//!   to a semantic category (date, amount, percentage, identifier, ...)
//! - **Value Synthesizer**: per-category generation with realistic ranges and
//!   formats, seeded for reproducibility
//! - **Consistency Pass**: aggregate adjustments no single field can know
//!   about (matching period dates, percentage allocation, derived contacts)
//!
//! ## Example
//!
//! ```rust
//! use apr_form_filler::{FormFiller, FormMapping};
//!
//! let mut form = FormMapping::new();
//! form.insert("from_date", "");
//! form.insert("to_date", "");
//! form.insert("uin", "");
//!
//! let mut filler = FormFiller::with_seed(7);
//! let filled = filler.fill(&form).unwrap();
//!
//! assert_eq!(filled.get("from_date"), Some("01-01-2023"));
//! assert_eq!(filled.get("to_date"), Some("31-12-2023"));
//! ```

pub mod classifier;
pub mod consistency;
pub mod error;
pub mod ingestion;
pub mod mapping;
pub mod reference;
pub mod schema;
pub mod sections;
pub mod synthesizer;

#[cfg(feature = "gemini")]
pub mod llm;

pub use classifier::FieldClassifier;
pub use consistency::apply_consistency;
pub use error::{FormFillError, Result};
pub use ingestion::*;
pub use mapping::FormMapping;
pub use reference::ReferenceData;
pub use schema::{ActivityCodeStandard, DatePart, FieldCategory};
pub use sections::{FormSection, FormSections, SectionEntry};
pub use synthesizer::ValueSynthesizer;

use log::{debug, info};

/// The form completion engine: classification, synthesis, and the
/// consistency pass over one mapping.
///
/// Each run owns its mapping exclusively; the engine holds no state beyond
/// its random generator, so instances are cheap and runs are independent.
pub struct FormFiller {
    classifier: FieldClassifier,
    synthesizer: ValueSynthesizer,
}

impl FormFiller {
    pub fn new() -> Self {
        Self {
            classifier: FieldClassifier::new(),
            synthesizer: ValueSynthesizer::new(),
        }
    }

    /// A filler with deterministic output, for reproducible runs and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            classifier: FieldClassifier::new(),
            synthesizer: ValueSynthesizer::with_seed(seed),
        }
    }

    /// Completes a form: every empty field receives a synthesized value,
    /// pre-existing values pass through untouched, and the consistency pass
    /// adjusts the aggregate result.
    pub fn fill(&mut self, form: &FormMapping) -> Result<FormMapping> {
        if form.is_empty() {
            return Err(FormFillError::InvalidMapping(
                "mapping contains no fields".to_string(),
            ));
        }

        info!("Filling form with {} fields", form.len());

        let mut filled = form.clone();
        let field_names: Vec<String> = filled.keys().map(str::to_string).collect();

        for name in field_names {
            let current = filled.get(&name).unwrap_or_default();
            if !current.trim().is_empty() {
                continue;
            }

            let category = self.classifier.classify(&name);
            let value = self.synthesizer.synthesize(category, &name);
            debug!("Synthesized {:?} value for field '{}'", category, name);
            filled.set(name, value);
        }

        apply_consistency(&mut filled);

        Ok(filled)
    }

    /// Completes a mapping that was already partially filled elsewhere, e.g.
    /// by the LLM fallback. Same rules as [`fill`](Self::fill): only blank
    /// fields are touched, so every field ends up populated either way.
    pub fn enhance(&mut self, form: &FormMapping) -> Result<FormMapping> {
        self.fill(form)
    }
}

impl Default for FormFiller {
    fn default() -> Self {
        Self::new()
    }
}

/// Completes a form with a fresh, entropy-seeded [`FormFiller`].
pub fn fill_form_mapping(form: &FormMapping) -> Result<FormMapping> {
    FormFiller::new().fill(form)
}

/// Re-runs completion over an already partially filled mapping.
pub fn enhance_form_mapping(form: &FormMapping) -> Result<FormMapping> {
    FormFiller::new().enhance(form)
}
