//! Print the derived elements of every record of a catalog file.
//!
//! ```text
//! cargo run --example tle_elements -- tests/data/stations.tle [--altitude] [--accurate]
//! ```
use camino::Utf8PathBuf;
use tlescope::diagnostics::TracingSink;
use tlescope::elements::DerivedElements;
use tlescope::params::DerivationParams;
use tlescope::tle::batch::read_tle_file;
use tlescope::tle::ParsedTle;
use tlescope::TlescopeError;

fn main() -> Result<(), TlescopeError> {
    tracing_subscriber::fmt().with_target(false).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let path = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .map(Utf8PathBuf::from)
        .unwrap_or_else(|| Utf8PathBuf::from("tests/data/stations.tle"));
    let altitude = args.iter().any(|a| a == "--altitude");
    let accurate = args.iter().any(|a| a == "--accurate");

    let params = DerivationParams::default();
    let sink = TracingSink;

    let records = read_tle_file(&path)?;
    tracing::info!(path = %path, records = records.len(), "catalog loaded");

    for raw in records {
        let tle = ParsedTle::parse_with_sink(raw, &sink);
        let elements = DerivedElements::from_tle_with(&tle, &params, &sink);
        println!(
            "{}\n",
            elements.display().altitude(altitude).accurate(accurate)
        );
    }

    Ok(())
}
