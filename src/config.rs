// src/config.rs
use std::path::{Path, PathBuf};

pub struct RenderConfig {
    pub template: String,
    pub templates_dir: PathBuf,
    pub output_path: PathBuf,
    pub root_dir: PathBuf,
}

impl RenderConfig {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        // Capture the current directory at creation time
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Self {
            template: "default".to_string(),
            templates_dir: PathBuf::from("templates"),
            output_path: output_path.into(),
            root_dir: current_dir,
        }
    }

    pub fn with_template(mut self, template: String) -> Self {
        self.template = template;
        self
    }

    pub fn with_templates_dir(mut self, dir: PathBuf) -> Self {
        self.templates_dir = dir;
        self
    }

    fn absolute_path(&self, relative_path: &Path) -> PathBuf {
        if relative_path.is_absolute() {
            relative_path.to_path_buf()
        } else {
            self.root_dir.join(relative_path)
        }
    }

    pub fn templates_dir_absolute(&self) -> PathBuf {
        self.absolute_path(&self.templates_dir)
    }
}
