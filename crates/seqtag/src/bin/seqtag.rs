use std::io::{self, Write};
use log::info;
use env_logger::Builder;
use clap::Parser;
use clap::ArgAction;
use anyhow::Result;

use seqtag::session::SessionConfig;
use seqtag::session::run_session;
use seqtag::plotting::SvgBarChart;


/// Generate a random DNA sequence, hide your name in it, save it as FASTA
/// and chart its nucleotide composition. All parameters are asked for
/// interactively.
#[derive(Debug, Parser)]
#[command(name = "seqtag")]
#[command(author, version, about)]
pub struct Cli {
    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            // no prefix, just the message
            writeln!(buf, "{}", record.args())
        })
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SessionConfig::default();
    let mut chart = SvgBarChart::new(&config.output_dir);
    let mut rng = rand::rng();

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let report = run_session(&mut input, &mut output, &mut rng, &mut chart, &config)?;
    info!("Session finished: {}", report.record_path.display());

    Ok(())
}
