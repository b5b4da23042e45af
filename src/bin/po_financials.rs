use std::path::PathBuf;

use clap::Parser;
use fractic_sam_portfolio::{
    entities::{ForecastConfig, Granularity},
    util::SamPortfolioUtil,
};
use fractic_server_error::ServerError;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, clap::ValueEnum)]
enum Rollup {
    Monthly,
    Quarterly,
    Yearly,
}

impl From<Rollup> for Granularity {
    fn from(rollup: Rollup) -> Self {
        match rollup {
            Rollup::Monthly => Granularity::Monthly,
            Rollup::Quarterly => Granularity::Quarterly,
            Rollup::Yearly => Granularity::Yearly,
        }
    }
}

/// Prints the generated financials of a purchase order.
#[derive(Parser)]
#[command(name = "po_financials")]
#[command(version, about, long_about = None)]
struct Args {
    /// Purchase order id, e.g. PO-001
    po_id: String,

    /// Print a text roll-up at this granularity instead of JSON
    #[arg(short, long, value_enum)]
    rollup: Option<Rollup>,

    /// Forecast configuration (RON); defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
}

async fn run(args: &Args) -> Result<String, ServerError> {
    let config = match &args.config {
        Some(path) => ForecastConfig::from_ron_file(path)?,
        None => ForecastConfig::default(),
    };
    let util = SamPortfolioUtil::with_config(config)?;
    match args.rollup {
        Some(rollup) => util.rollup_report(&args.po_id, rollup.into()).await,
        None => util.po_financials_json(&args.po_id).await,
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run(&args).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!(po_id = args.po_id.as_str(), error = %e, "failed to build purchase order financials");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn help_is_not_taken_as_a_po_id() {
        let err = Args::try_parse_from(["po_financials", "--help"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn po_id_is_required() {
        let err = Args::try_parse_from(["po_financials"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn parses_id_and_rollup() {
        let args = Args::try_parse_from(["po_financials", "PO-001", "--rollup", "quarterly"]).unwrap();
        assert_eq!(args.po_id, "PO-001");
        assert!(matches!(args.rollup, Some(Rollup::Quarterly)));

        let args =
            Args::try_parse_from(["po_financials", "PO-002", "--config", "forecast.ron"]).unwrap();
        assert!(args.rollup.is_none());
        assert_eq!(args.config, Some(PathBuf::from("forecast.ron")));
    }
}
