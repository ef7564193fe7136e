use clap::Parser;
use colored::Colorize;
use rolodex::api::RolodexApi;
use rolodex::classify::{classify, Mode};
use rolodex::config::RolodexConfig;
use rolodex::error::Result;
use rolodex::store::fs::FileStore;
use tracing_subscriber::EnvFilter;

mod args;
mod print;
use args::Cli;

const CLOSING: &str = "Thank you for using contact list app";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Failures are reported on stdout and never change the exit status
    if let Err(e) = run(&cli) {
        println!("{}", format!("Error: {}", e).red());
    }
    println!("{}", CLOSING);
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => RolodexConfig::load(path)?,
        None => RolodexConfig::default(),
    };

    let invocation = classify(cli.tokens.as_slice(), &config)?;
    let mut api = RolodexApi::new(FileStore::open(&invocation.path));
    let result = api.dispatch(&invocation.mode)?;

    match invocation.mode {
        Mode::ByName(_) => print::print_contacts(&result.matched_lines, &config)?,
        _ => print::print_lines(&result.matched_lines),
    }
    print::print_messages(&result.messages);
    Ok(())
}
