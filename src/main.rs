use artwork_evaluator::{
    AppError, Configuration, EvaluationRequest, EvaluationServiceBuilder, Evaluator,
};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tower::ServiceExt;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "artwork-evaluator")]
#[command(version, about = "Scores an artwork image and suggests improvements", long_about = None)]
struct Args {
    /// Artwork to evaluate (JPEG or PNG)
    image: Option<PathBuf>,

    /// Configuration file (default: ./artwork-evaluator.{toml,yaml,json})
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full response as JSON
    #[arg(long)]
    json: bool,
}

fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();
    let configuration = Configuration::load(args.config.as_deref())?;
    init_logging(configuration.log_level());

    let Some(image_path) = args.image else {
        eprintln!("Please upload an artwork image (JPG/PNG).");
        eprintln!("{}", Args::command().render_usage());
        std::process::exit(2);
    };

    let evaluator = Evaluator::new(configuration.evaluator_config())?.into_handle();
    tracing::info!(
        "Evaluator ready (profile {:?}, classifier gate: {})",
        configuration.profile,
        evaluator.has_classifier_gate()
    );

    let bytes = std::fs::read(&image_path)
        .map_err(|e| AppError::ReadError(e, image_path.display().to_string()))?;
    let file_name = image_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| image_path.display().to_string());
    let request = EvaluationRequest::new(bytes).with_file_name(file_name);
    let request_id = request.request_id();

    let service = EvaluationServiceBuilder::new(evaluator)
        .maybe_timeout(configuration.evaluation_timeout())
        .build();
    let response = service
        .oneshot(request)
        .await
        .map_err(|e| AppError::ServiceError(request_id, e.to_string()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", response.evaluation);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_image_config_and_json() {
        let args =
            Args::try_parse_from(["artwork-evaluator", "--json", "-c", "eval.toml", "cat.png"])
                .unwrap();
        assert!(args.json);
        assert_eq!(args.config, Some(PathBuf::from("eval.toml")));
        assert_eq!(args.image, Some(PathBuf::from("cat.png")));
    }

    #[test]
    fn missing_image_is_left_to_the_upload_prompt() {
        let args = Args::try_parse_from(["artwork-evaluator"]).unwrap();
        assert!(args.image.is_none());
        assert!(!args.json);
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Args::try_parse_from(["artwork-evaluator", "--jsn", "cat.png"]).is_err());
    }

    #[test]
    fn config_flag_requires_a_value() {
        assert!(Args::try_parse_from(["artwork-evaluator", "cat.png", "--config"]).is_err());
    }
}
