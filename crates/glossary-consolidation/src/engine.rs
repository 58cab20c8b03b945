//! ConsolidationEngine: pulls records from the collaborators and runs the pipeline.

use glossary_core::config::GlossaryConfig;
use glossary_core::errors::ValidationError;
use glossary_core::models::{GlossaryDocument, SourceBatch};
use glossary_core::traits::{IBaselineLoader, ISourceLoader};
use tracing::info;

use crate::pipeline::{self, phase6_validation, ConsolidationOutput, PipelineInput};

/// The main consolidation engine.
///
/// Holds the resolved configuration; every run is an independent batch.
#[derive(Debug, Clone, Default)]
pub struct ConsolidationEngine {
    config: GlossaryConfig,
}

impl ConsolidationEngine {
    pub fn new(config: GlossaryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GlossaryConfig {
        &self.config
    }

    /// Load every source and the baseline, then consolidate.
    pub fn consolidate(
        &self,
        sources: &dyn ISourceLoader,
        baseline: &dyn IBaselineLoader,
    ) -> ConsolidationOutput {
        let loaded = sources.load_sources();
        let baseline = if self.config.baseline.enabled {
            baseline.load_baseline()
        } else {
            info!("baseline disabled, consolidating sources only");
            Ok(None)
        };
        pipeline::run_pipeline(
            PipelineInput {
                sources: loaded,
                baseline,
            },
            &self.config,
        )
    }

    /// Consolidate already-loaded batches.
    pub fn consolidate_batches(
        &self,
        batches: Vec<SourceBatch>,
        baseline: Option<GlossaryDocument>,
    ) -> ConsolidationOutput {
        let baseline = baseline.filter(|_| self.config.baseline.enabled);
        pipeline::run_pipeline(PipelineInput::new(batches, baseline), &self.config)
    }

    /// Schema problems of an existing glossary. Empty when it is valid.
    pub fn check(&self, document: &GlossaryDocument) -> Vec<ValidationError> {
        let problems = phase6_validation::check_document(document, &self.config.validation);
        info!(
            terms = document.terms.len(),
            problems = problems.len(),
            "checked glossary"
        );
        problems
    }
}
