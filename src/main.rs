use clap::Parser;
use numbers_validator::config::cli::parse_input;
use numbers_validator::utils::logger::{self, LogFormat};
use numbers_validator::utils::validation::Validate;
use numbers_validator::{BatchConfig, BatchRunner, CliConfig, NumberChecks, NumbersValidator};

/// Rejected input or failed checks.
const EXIT_FAILED: i32 = 1;
/// Bad arguments or an unusable batch file.
const EXIT_USAGE: i32 = 2;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let format = if config.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_cli_logger(config.verbose, format);
    tracing::debug!("CLI config: {:?}", config);

    let code = run(&config)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn run(config: &CliConfig) -> anyhow::Result<i32> {
    if let Err(e) = config.validate() {
        tracing::error!("Argument validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        return Ok(EXIT_USAGE);
    }

    let validator = NumbersValidator::new();

    if let Some(path) = &config.config {
        return Ok(run_batch(validator, path));
    }

    // validate() guarantees both are set here
    let (Some(operation), Some(raw)) = (config.operation, config.input.as_deref()) else {
        return Ok(EXIT_USAGE);
    };
    let input = parse_input(raw);

    match validator.run(operation, &input) {
        Ok(outcome) => {
            println!("{}", serde_json::to_string(&outcome)?);
            Ok(0)
        }
        Err(e) if e.is_invalid_type() => {
            tracing::debug!("{} rejected input {}", operation, input);
            eprintln!("{}", e);
            Ok(EXIT_FAILED)
        }
        Err(e) => Err(e.into()),
    }
}

fn run_batch(validator: NumbersValidator, path: &str) -> i32 {
    let batch = match BatchConfig::from_file(path) {
        Ok(batch) => batch,
        Err(e) => {
            tracing::error!("Failed to load batch file '{}': {}", path, e);
            eprintln!("{}", e.user_friendly_message());
            return EXIT_USAGE;
        }
    };
    if let Err(e) = batch.validate() {
        tracing::error!("Batch file '{}' is invalid: {}", path, e);
        eprintln!("{}", e.user_friendly_message());
        return EXIT_USAGE;
    }

    let summary = BatchRunner::new(validator).run(&batch);
    for report in &summary.reports {
        println!("{}", report);
    }
    println!(
        "{} passed, {} failed, {} skipped",
        summary.passed(),
        summary.failed(),
        summary.skipped
    );

    if summary.all_passed() {
        0
    } else {
        EXIT_FAILED
    }
}
