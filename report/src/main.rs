//! Pension Report CLI - Generate the enrollment analysis report
//!
//! ```bash
//! pension-report                                   # fixed input/output paths
//! pension-report --input data.csv --output out.html
//! pension-report --encoding auto --delimiter ';'
//! ```
//!
//! Every flag can also come from the environment or a `.env` file.

use clap::Parser;
use pension_report::logs::{log_error, LogFormat, LOGGER};
use pension_report::{run, EncodingChoice, ReportConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pension-report")]
#[command(about = "Generate an HTML report from pension youth enrollment statistics", long_about = None)]
struct Cli {
    /// Input CSV file
    #[arg(short, long, env = "PENSION_REPORT_INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output HTML file (overwritten)
    #[arg(short, long, env = "PENSION_REPORT_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Input text encoding
    #[arg(short, long, env = "PENSION_REPORT_ENCODING", value_enum, default_value_t = EncodingChoice::Cp949)]
    encoding: EncodingChoice,

    /// CSV delimiter (auto-detect if not specified)
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Only print warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    LOGGER.set_quiet(cli.quiet);
    LOGGER.set_format(cli.log_format);

    let delimiter = match cli.delimiter {
        None => None,
        Some(c) if c.is_ascii() => Some(c as u8),
        Some(c) => {
            log_error(format!("Delimiter must be a single ASCII character, got '{}'", c));
            std::process::exit(2);
        }
    };

    let config = ReportConfig::default()
        .with_input(cli.input)
        .with_output(cli.output)
        .with_encoding(cli.encoding)
        .with_delimiter(delimiter);

    if let Err(e) = run(&config) {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
