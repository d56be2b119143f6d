use anyhow::{Context, Result};
use clap::Parser;
use cv_renderer::cli::Cli;
use cv_renderer::{PdfGenerator, RenderConfig, ResumeDocument};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    // stdout carries only the success marker; diagnostics and logs go to
    // stderr so the calling process can rely on the protocol.
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
    println!("Success");
}

fn run() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let raw = std::fs::read_to_string(&cli.resume_json).with_context(|| {
        format!(
            "Failed to read resume document: {}",
            cli.resume_json.display()
        )
    })?;
    let document: ResumeDocument = serde_json::from_str(&raw).with_context(|| {
        format!(
            "Failed to parse resume document: {}",
            cli.resume_json.display()
        )
    })?;

    let config = RenderConfig::new(cli.output_pdf)
        .with_template(cli.template)
        .with_templates_dir(cli.templates_dir);

    let generator = PdfGenerator::new(config)?;
    generator.generate(&document)?;

    Ok(())
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
