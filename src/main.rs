use clap::Parser;
use hrecipe_import::{import_to_file, ImportConfig, ImportError, ReportFormat};
use log::{info, warn, LevelFilter};
use std::path::PathBuf;
use std::process::ExitCode;

/// Given a website, pulls hRecipe microformat
/// (http://microformats.org/wiki/hrecipe) information and stores it as a
/// plain-text report.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// URL to parse
    #[arg(short, long)]
    url: String,
    /// File to write the result to
    #[arg(short, long)]
    outfile: PathBuf,
    /// Download any associated pictures (not supported, ignored)
    #[arg(long = "download_pictures", alias = "dowload_pictures")]
    download_pictures: bool,
    /// Print extracted fields and full error causes
    #[arg(long)]
    verbose: bool,
    /// Fail when any recipe on the page is missing its title
    #[arg(long)]
    strict: bool,
    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,
    /// Fetch timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = ImportConfig::load().map(|config| apply_args(config, &args));
    let verbose = config.as_ref().map_or(args.verbose, |config| config.verbose);
    init_logging(verbose);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration");
            if verbose {
                eprintln!("{e}");
            }
            return ExitCode::FAILURE;
        }
    };

    if args.download_pictures {
        warn!("--download_pictures is not supported and will be ignored");
    }

    match import_to_file(&args.url, &args.outfile, &config) {
        Ok(summary) => {
            info!("Wrote {} recipes to {}", summary.recipes, summary.outfile.display());
            if summary.skipped > 0 {
                eprintln!("Skipped {} recipes without a title", summary.skipped);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            for line in error_lines(&e, &args, config.verbose) {
                eprintln!("{line}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_module("hrecipe_import", LevelFilter::Debug);
    }
    builder.init();
}

fn apply_args(mut config: ImportConfig, args: &CliArgs) -> ImportConfig {
    config.verbose |= args.verbose;
    config.strict |= args.strict;
    if let Some(format) = args.format {
        config.format = format;
    }
    if let Some(timeout) = args.timeout {
        config.timeout = timeout;
    }
    config
}

/// A short line naming what failed, followed by the cause when verbose.
/// Errors without a summary line are printed once as they are.
fn error_lines(error: &ImportError, args: &CliArgs, verbose: bool) -> Vec<String> {
    let summary = match error {
        ImportError::FetchError(_) => format!("Failed to fetch {}", args.url),
        ImportError::OutputError(_) | ImportError::SerializeError(_) => {
            format!("Failed to write {}", args.outfile.display())
        }
        other => return vec![other.to_string()],
    };

    let mut lines = vec![summary];
    if verbose {
        lines.push(error.to_string());
    }
    lines
}
