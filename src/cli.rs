// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cvpress")]
#[command(about = "Render a JSON resume to a typeset PDF")]
pub struct Cli {
    /// Path to the resume document (JSON)
    #[arg(long)]
    pub resume_json: PathBuf,

    /// Path the produced PDF is written to (overwritten if present)
    #[arg(long)]
    pub output_pdf: PathBuf,

    /// Template id inside the templates directory
    #[arg(long, default_value = "default")]
    pub template: String,

    /// Directory holding the template catalog
    #[arg(long, default_value = "templates")]
    pub templates_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_flags() {
        let cli = Cli::try_parse_from([
            "cvpress",
            "--resume-json",
            "resume.json",
            "--output-pdf",
            "out/resume.pdf",
        ])
        .unwrap();
        assert_eq!(cli.resume_json, PathBuf::from("resume.json"));
        assert_eq!(cli.output_pdf, PathBuf::from("out/resume.pdf"));
        assert_eq!(cli.template, "default");
        assert_eq!(cli.templates_dir, PathBuf::from("templates"));
    }

    #[test]
    fn test_missing_output_flag_rejected() {
        assert!(Cli::try_parse_from(["cvpress", "--resume-json", "resume.json"]).is_err());
    }
}
