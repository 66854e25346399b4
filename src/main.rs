// src/main.rs
use clap::{Parser, ValueEnum};
use cv_renderer::render::{self, RenderOptions};
use cv_renderer::source;
use cv_renderer::storage::StorageManager;
use cv_renderer::utils::{self, AppError};
use cv_renderer::parse_cv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Html,
    Json,
    Both,
}

impl OutputFormat {
    fn wants_html(self) -> bool {
        matches!(self, Self::Html | Self::Both)
    }

    fn wants_json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }
}

/// Command Line Interface for the CV renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path or http(s) URL of the CV text file
    #[arg(short, long, env = "CV_SOURCE", default_value = "information.txt")]
    source: String,

    /// Output directory for the rendered CV
    #[arg(short, long, env = "CV_OUTPUT_DIR", default_value = "./output")]
    output_dir: String,

    /// Base file name for every output file
    #[arg(short, long, default_value = "cv")]
    name: String,

    /// Which outputs to write
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Both)]
    format: OutputFormat,

    /// Image URL or path shown next to the contact details
    #[arg(long)]
    photo: Option<String>,
}

/// The output name becomes a file name inside `--output-dir`, so it must not
/// be empty or contain path components.
fn validate_output_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Config("Output name must not be empty".to_string()));
    }
    if name.contains(['/', '\\']) || name.contains("..") {
        return Err(AppError::Config(format!(
            "Output name '{}' must be a plain file name without path separators or '..'",
            name
        )));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    validate_output_name(&args.name)?;

    // 3. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;

    // 4. Load the CV text
    let text = match source::load_source(&args.source).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Failed to load CV source {}: {}", args.source, e);
            if args.format.wants_html() {
                let page = render::render_error_page(&e.user_message());
                match storage.save_html(&args.name, &page) {
                    Ok(path) => tracing::info!("Saved error page to: {}", path.display()),
                    Err(e) => tracing::error!("Failed to save error page: {}", e),
                }
            }
            return Err(e.into());
        }
    };
    tracing::info!("Loaded CV text ({} bytes)", text.len());

    // 5. Parse
    let doc = parse_cv(&text);
    if doc.is_empty() {
        tracing::warn!("CV source {} was loaded but contained no recognised content", args.source);
    }

    // 6. Write outputs
    if args.format.wants_html() {
        let options = RenderOptions { photo: args.photo.clone() };
        let page = render::render_document(&doc, &options);
        storage.save_html(&args.name, &page)?;
    }
    if args.format.wants_json() {
        storage.save_document(&args.name, &doc)?;
    }
    storage.save_metadata(&args.name, &args.source, &doc)?;

    tracing::info!("Processing finished. Outputs written to {}", storage.base_dir().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("cv")]
    #[case("ada-lovelace_2024")]
    #[case("cv.v2")]
    fn accepts_plain_output_names(#[case] name: &str) {
        assert!(validate_output_name(name).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("../../x")]
    #[case("nested/cv")]
    #[case("nested\\cv")]
    #[case("..")]
    fn rejects_names_that_escape_the_output_dir(#[case] name: &str) {
        assert!(matches!(validate_output_name(name), Err(AppError::Config(_))));
    }
}
