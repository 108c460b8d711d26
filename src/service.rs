//! Generation pipeline wiring.
//!
//! The generative model and the similar-case index are injected
//! dependencies behind traits; this crate ships no client for either. The
//! pipeline itself is: retrieve context, assemble the prompt, call the
//! model, strip any markdown fence, reconcile.

use crate::error::GenerateError;
use crate::extract::extract_json_block;
use crate::model::{FieldDescriptor, Stage};
use crate::prompt;
use crate::reconcile::{reconcile_fields, reconcile_stages};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The generative text model, as a black box: a prompt goes in, free-form
/// text comes out. Implementations own transport, authentication and
/// timeouts; callers are responsible for bounding how long a call may take.
pub trait CompletionModel {
    fn complete(&self, prompt: &str) -> Result<String, GenerateError>;
}

impl<M: CompletionModel + ?Sized> CompletionModel for &M {
    fn complete(&self, prompt: &str) -> Result<String, GenerateError> {
        (**self).complete(prompt)
    }
}

/// The similar-case retrieval collaborator.
///
/// Implementations are expected to validate their backing store when they
/// are *constructed* (a missing index is a construction-time error), so a
/// query on a live value only fails for transient reasons.
pub trait CaseIndex {
    fn similar_cases(&self, query: &str, k: usize) -> Result<Vec<RankedCase>, GenerateError>;
}

impl<I: CaseIndex + ?Sized> CaseIndex for &I {
    fn similar_cases(&self, query: &str, k: usize) -> Result<Vec<RankedCase>, GenerateError> {
        (**self).similar_cases(query, k)
    }
}

/// A similar case returned by the index, echoed back to the caller so the
/// UI can show what grounded the suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCase {
    pub name: String,
    pub description: String,
    pub similarity: f32,
}

/// Tunables owned and constructed by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// How many similar cases to retrieve into the prompt context.
    pub top_k: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig { top_k: 5 }
    }
}

/// The outcome of one generation: the reconciled records, the repair
/// diagnostic (a warning, never an error), and the retrieval context.
#[derive(Debug)]
pub struct Generated<T> {
    pub items: Vec<T>,
    pub diagnostic: Option<String>,
    pub context: Vec<RankedCase>,
}

/// Runs the generation pipeline over injected collaborators.
pub struct ScaffoldGenerator<M, I> {
    model: M,
    index: I,
    config: GeneratorConfig,
}

impl<M: CompletionModel, I: CaseIndex> ScaffoldGenerator<M, I> {
    pub fn new(model: M, index: I) -> Self {
        Self::with_config(model, index, GeneratorConfig::default())
    }

    pub fn with_config(model: M, index: I, config: GeneratorConfig) -> Self {
        ScaffoldGenerator {
            model,
            index,
            config,
        }
    }

    /// Generates exactly `quantity` form fields for a form named `name`.
    ///
    /// `quantity` must be positive; the caller validates it at the boundary.
    /// Only collaborator failures surface as errors; whatever the model
    /// answers reconciles into a valid result.
    pub fn generate_fields(
        &self,
        name: &str,
        quantity: usize,
    ) -> Result<Generated<FieldDescriptor>, GenerateError> {
        debug_assert!(quantity > 0, "quantity is validated by the caller");
        let context = self.index.similar_cases(name, self.config.top_k)?;
        let prompt = prompt::fields_prompt(name, quantity, &context);
        let response = self.model.complete(&prompt)?;
        debug!(name, quantity, response_len = response.len(), "reconciling field suggestion");
        let reconciled = reconcile_fields(extract_json_block(&response), quantity);
        Ok(Generated {
            diagnostic: reconciled.diagnostic(),
            items: reconciled.items,
            context,
        })
    }

    /// Generates exactly `quantity` workflow stages for a process named
    /// `name`. Same contract as [`Self::generate_fields`].
    pub fn generate_stages(
        &self,
        name: &str,
        quantity: usize,
    ) -> Result<Generated<Stage>, GenerateError> {
        debug_assert!(quantity > 0, "quantity is validated by the caller");
        let context = self.index.similar_cases(name, self.config.top_k)?;
        let prompt = prompt::stages_prompt(name, quantity, &context);
        let response = self.model.complete(&prompt)?;
        debug!(name, quantity, response_len = response.len(), "reconciling stage suggestion");
        let reconciled = reconcile_stages(extract_json_block(&response), quantity);
        Ok(Generated {
            diagnostic: reconciled.diagnostic(),
            items: reconciled.items,
            context,
        })
    }
}
