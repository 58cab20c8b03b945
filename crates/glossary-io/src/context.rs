//! GlossaryContext: the loaders, engine, and sink of one project root.

use std::path::{Path, PathBuf};

use glossary_consolidation::{ConsolidationEngine, ConsolidationOutput};
use glossary_core::config::GlossaryConfig;
use glossary_core::errors::{SinkError, SourceReadError, ValidationError};
use glossary_core::models::GlossaryDocument;
use glossary_core::traits::IOutputSink;
use glossary_core::GlossaryResult;
use tracing::info;

use crate::export::{self, ExportFormat};
use crate::sink::JsonFileSink;
use crate::source::baseline_loader::read_document;
use crate::source::{DirectorySourceLoader, JsonBaselineLoader};

/// Explicitly constructed run context. Configured paths are resolved against
/// `root` once, at `open`.
pub struct GlossaryContext {
    root: PathBuf,
    engine: ConsolidationEngine,
    sources: DirectorySourceLoader,
    baseline: JsonBaselineLoader,
    output_path: PathBuf,
    sink: Box<dyn IOutputSink>,
}

impl GlossaryContext {
    /// Validate `config` and build the file-backed collaborators under `root`.
    pub fn open(root: impl Into<PathBuf>, config: GlossaryConfig) -> GlossaryResult<Self> {
        GlossaryConfig::validate(&config)?;
        let root = root.into();
        let sources = DirectorySourceLoader::new(
            GlossaryConfig::resolve(&root, &config.sources.dir),
            config.sources.extension.clone(),
        );
        let baseline = JsonBaselineLoader::new(GlossaryConfig::resolve(&root, &config.baseline.path));
        let output_path = GlossaryConfig::resolve(&root, &config.output.path);
        let sink = Box::new(JsonFileSink::from_config(&output_path, &config.output));
        info!(
            root = %root.display(),
            sources = %sources.dir().display(),
            output = %output_path.display(),
            "opened glossary context"
        );
        Ok(Self {
            root,
            engine: ConsolidationEngine::new(config),
            sources,
            baseline,
            output_path,
            sink,
        })
    }

    /// Replace the output sink, e.g. with a `MemorySink` for a dry run.
    pub fn with_sink(mut self, sink: Box<dyn IOutputSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &GlossaryConfig {
        self.engine.config()
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Consolidate the sources onto the baseline without writing anything.
    pub fn consolidate(&self) -> ConsolidationOutput {
        self.engine.consolidate(&self.sources, &self.baseline)
    }

    pub fn write(&self, document: &GlossaryDocument) -> Result<(), SinkError> {
        self.sink.write(document)
    }

    /// Consolidate and write the result to the sink.
    pub fn merge(&self) -> Result<ConsolidationOutput, SinkError> {
        let output = self.consolidate();
        self.write(&output.document)?;
        Ok(output)
    }

    /// The glossary currently at the output path, if any.
    pub fn load_output(&self) -> Result<Option<GlossaryDocument>, SourceReadError> {
        read_document(&self.output_path)
    }

    /// Validation problems of `document`.
    pub fn check(&self, document: &GlossaryDocument) -> Vec<ValidationError> {
        self.engine.check(document)
    }

    /// Render `document` in `format`, titled after the configured organization.
    pub fn export(&self, document: &GlossaryDocument, format: ExportFormat) -> Result<String, SinkError> {
        let title = export::document_title(&self.config().consolidation.organization);
        export::render(document, format, &title)
    }

    pub fn close(self) {
        info!(root = %self.root.display(), "closed glossary context");
    }
}
