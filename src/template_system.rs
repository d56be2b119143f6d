// src/template_system.rs
//! Template discovery and markup rendering

use anyhow::{Context, Result};
use minijinja::{path_loader, syntax::SyntaxConfig, Environment};
use std::path::{Path, PathBuf};
use tracing::{info, trace, warn};

use crate::types::TemplateContext;

/// Jinja comments are `{# ... #}` by default, which collides with LaTeX
/// control sequences like `{#1`. Templates use these delimiters instead.
pub const COMMENT_START: &str = "((*";
pub const COMMENT_END: &str = "*))";

/// Markup file a template provides when its manifest does not say otherwise.
pub const DEFAULT_MAIN_FILE: &str = "resume.tex";

#[derive(Debug, Clone)]
pub struct TemplateInfo {
    pub id: String,
    pub path: PathBuf,
    pub manifest: TemplateManifest,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct TemplateManifest {
    pub name: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub version: Option<String>,
    pub main_file: Option<String>,
}

impl TemplateInfo {
    /// Loader-relative path of the markup file, e.g. `default/resume.tex`.
    pub fn markup_name(&self) -> String {
        let main_file = self
            .manifest
            .main_file
            .as_deref()
            .unwrap_or(DEFAULT_MAIN_FILE);
        format!("{}/{}", self.id, main_file)
    }
}

/// Catalog of the templates found under one templates directory, one
/// subdirectory per template with an optional `manifest.toml`.
pub struct TemplateCatalog {
    templates_dir: PathBuf,
    templates: Vec<TemplateInfo>,
}

impl TemplateCatalog {
    pub fn new(templates_dir: PathBuf) -> Result<Self> {
        let mut catalog = Self {
            templates_dir,
            templates: Vec::new(),
        };
        catalog.discover_templates()?;
        Ok(catalog)
    }

    fn discover_templates(&mut self) -> Result<()> {
        self.templates.clear();

        if !self.templates_dir.exists() {
            warn!(
                "Templates directory does not exist: {}",
                self.templates_dir.display()
            );
            return Ok(());
        }

        let entries = std::fs::read_dir(&self.templates_dir).with_context(|| {
            format!(
                "Failed to read templates directory: {}",
                self.templates_dir.display()
            )
        })?;

        for entry in entries {
            let entry = entry?;
            let path = entry.path();

            if path.is_dir() {
                if let Some(template_id) = path.file_name().and_then(|n| n.to_str()) {
                    match self.load_template_info(template_id, &path) {
                        Ok(template) => {
                            trace!(
                                "Loaded template: {} from {}",
                                template.id,
                                template.path.display()
                            );
                            self.templates.push(template);
                        }
                        Err(e) => {
                            warn!("Failed to load template {}: {}", template_id, e)
                        }
                    }
                }
            }
        }

        self.templates.sort_by(|a, b| a.id.cmp(&b.id));
        info!("Discovered {} templates", self.templates.len());
        Ok(())
    }

    fn load_template_info(&self, template_id: &str, template_path: &Path) -> Result<TemplateInfo> {
        let manifest_path = template_path.join("manifest.toml");

        let manifest = if manifest_path.exists() {
            let content = std::fs::read_to_string(&manifest_path)
                .with_context(|| format!("Failed to read manifest: {}", manifest_path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse manifest: {}", manifest_path.display()))?
        } else {
            TemplateManifest {
                name: template_id.to_string(),
                description: None,
                author: None,
                version: None,
                main_file: None,
            }
        };

        Ok(TemplateInfo {
            id: template_id.to_string(),
            path: template_path.to_path_buf(),
            manifest,
        })
    }

    pub fn list_templates(&self) -> Vec<String> {
        self.templates.iter().map(|t| t.id.clone()).collect()
    }

    pub fn get_template(&self, template_id: &str) -> Option<&TemplateInfo> {
        self.templates.iter().find(|t| t.id == template_id)
    }

    pub fn template_exists(&self, template_id: &str) -> bool {
        self.get_template(template_id).is_some()
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// Resolve a template id to its catalog entry. An unknown id is fatal;
    /// there is no fallback template.
    pub fn resolve(&self, template_id: &str) -> Result<&TemplateInfo> {
        self.get_template(template_id).ok_or_else(|| {
            anyhow::anyhow!(
                "Template '{}' not found. Available templates: {:?}. Templates directory: {}",
                template_id,
                self.list_templates(),
                self.templates_dir.display()
            )
        })
    }
}

/// Renders a template file against a [`TemplateContext`].
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    pub fn new(templates_dir: &Path) -> Result<Self> {
        let syntax = SyntaxConfig::builder()
            .comment_delimiters(COMMENT_START, COMMENT_END)
            .build()
            .context("Invalid template syntax configuration")?;

        let mut env = Environment::new();
        env.set_syntax(syntax);
        env.set_loader(path_loader(templates_dir));

        Ok(Self { env })
    }

    /// Render `markup_name` (a loader-relative path as produced by
    /// [`TemplateInfo::markup_name`]) into markup text.
    pub fn render(&self, markup_name: &str, context: &TemplateContext) -> Result<String> {
        let template = self
            .env
            .get_template(markup_name)
            .with_context(|| format!("Failed to load template file '{}'", markup_name))?;

        template
            .render(context)
            .with_context(|| format!("Failed to render template '{}'", markup_name))
    }
}
