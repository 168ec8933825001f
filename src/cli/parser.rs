use clap::Parser;

/// Command-line interface definition for rBuoniPasto
/// CLI application to read a PDF timesheet and report meal voucher days
#[derive(Parser)]
#[command(
    name = "rbuonipasto",
    version = env!("CARGO_PKG_VERSION"),
    about = "Extract clock-in/clock-out records from a PDF timesheet and compute meal voucher (buono pasto) eligibility",
    long_about = None
)]
pub struct Cli {
    /// Path to the timesheet PDF file
    pub file: String,

    /// Override the configuration file path (useful for tests or custom setups)
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<String>,
}
