// src/generator.rs
use crate::compiler::Orchestrator;
use crate::config::RenderConfig;
use crate::engines::discover_engines;
use crate::mapper::map_document;
use crate::template_system::{TemplateCatalog, TemplateRenderer};
use crate::types::ResumeDocument;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Wires mapper, template renderer and compilation orchestrator into the
/// one operation the CLI exposes.
pub struct PdfGenerator {
    config: RenderConfig,
    catalog: TemplateCatalog,
    renderer: TemplateRenderer,
}

impl PdfGenerator {
    pub fn new(config: RenderConfig) -> Result<Self> {
        let templates_dir = config.templates_dir_absolute();

        let catalog = TemplateCatalog::new(templates_dir.clone())
            .context("Failed to initialize template catalog")?;
        let renderer = TemplateRenderer::new(&templates_dir)
            .context("Failed to initialize template renderer")?;

        Ok(Self {
            config,
            catalog,
            renderer,
        })
    }

    /// Map the document, render the markup and compile it to the configured
    /// output path.
    pub fn generate(&self, document: &ResumeDocument) -> Result<PathBuf> {
        // An unknown template is fatal before any subprocess work starts.
        let template = self.catalog.resolve(&self.config.template)?;

        let context = map_document(document);
        let markup = self.renderer.render(&template.markup_name(), &context)?;

        self.setup_output_dir()?;

        let candidates = discover_engines();
        let output_path =
            Orchestrator::new(&candidates).compile(&markup, &self.config.output_path)?;

        info!(
            "Successfully compiled resume ({} template) to {}",
            template.id,
            output_path.display()
        );

        Ok(output_path)
    }

    fn setup_output_dir(&self) -> Result<()> {
        if let Some(parent) = self.config.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("Failed to create output directory")?;
            }
        }
        Ok(())
    }
}
