//! doc-preview: file type classification and preview routing for document viewers

mod cli;
mod config;
mod detect;
mod error;
mod output;
mod preview;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{DocPreviewError, Result};
use log::{error, info};
use output::report::ClassificationReport;
use output::ReportGenerator;
use preview::loader::PreviewContent;
use preview::PreviewManager;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Classify { files, output } => {
            let output_format = cli::parse_output_format(&output)
                .map_err(|e| DocPreviewError::InvalidInput(e))?;

            info!("Classifying {} file name(s)", files.len());

            // Classification operates on file names, so strip any leading
            // directories before building the report.
            let names: Vec<String> = files.iter().map(|p| file_name_of(p)).collect();
            let report = ClassificationReport::new(names);

            let generator = ReportGenerator::new(config.output.color_output);
            let rendered = generator.format(&report, &output_format)?;
            println!("{}", rendered);
        }

        Commands::Preview { file, max_chars, no_cache } => {
            cli::validate_file_extension(
                &file,
                &["pdf", "xlsx", "xls", "csv", "txt", "docx", "doc", "png", "jpg", "jpeg"],
            )
            .map_err(|e| DocPreviewError::InvalidInput(format!("Preview file: {}", e)))?;

            let mut manager = PreviewManager::new()
                .with_cache(config.preview.enable_caching && !no_cache);

            let descriptor = manager.describe(&file);
            info!(
                "Classified {} as '{}', previewable: {}",
                file.display(),
                descriptor.extension,
                descriptor.previewable()
            );

            let limit = max_chars.unwrap_or(config.preview.max_preview_chars);

            match manager.load_preview(&file).await? {
                PreviewContent::Text(text) => {
                    println!("📄 Preview: {}\n", file.display());
                    println!("{}", truncate_text(&text, limit));
                }
                PreviewContent::Image(bytes) => {
                    println!(
                        "🖼️  Image preview ready: {} ({} bytes, .{})",
                        file.display(),
                        bytes.len(),
                        descriptor.extension
                    );
                }
                PreviewContent::Document(bytes) => {
                    println!(
                        "📄 Document preview ready: {} ({} bytes, .{})",
                        file.display(),
                        bytes.len(),
                        descriptor.extension
                    );
                }
            }
        }

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("Preview caching: {}", config.preview.enable_caching);
                    println!("Max preview chars: {}", config.preview.max_preview_chars);
                    println!("Output format: {:?}", config.output.format);
                    println!("Color output: {}", config.output.color_output);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    let default_config = Config::default();
                    default_config.save()?;
                    println!("✅ Configuration reset successfully!");
                }
            }
        }
    }

    Ok(())
}

/// File name component of a path, falling back to the full path string
fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Truncate text to a maximum length with ellipsis
fn truncate_text(text: &str, max_length: usize) -> String {
    if text.len() <= max_length {
        text.to_string()
    } else {
        let truncated = &text[..max_length.min(text.len())];
        // Find the last word boundary to avoid cutting words
        let last_space = truncated.rfind(' ').unwrap_or(max_length);
        format!("{}...", &text[..last_space])
    }
}
