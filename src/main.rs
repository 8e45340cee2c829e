use std::io::Write;
use std::process;

use clap::Parser;
use console::{style, Attribute};
use log::{debug, info};
use reqwest::blocking::Client;

mod alfred;
mod config;
mod error;
mod seslisozluk;

use alfred::AlfredResponse;
use config::Config;
use error::Result;
use seslisozluk::{ResultSource, Separators};

/// SesliSözlük dictionary interface for Alfred.
///
/// Looks up all arguments as one search and prints the results as Alfred
/// script filter JSON.
#[derive(Parser, Debug)]
#[command(name = "sesli", version, about, long_about)]
struct Cli {
    /// Words to look up
    words: Vec<String>,

    /// Print the request URL and which result list matched
    #[arg(short, long)]
    debug: bool,

    /// Render entries as `word : kind : meaning` instead of single spaces
    #[arg(long)]
    colon: bool,
}

fn main() {
    let cli = Cli::parse();
    let config = Config::from_env(cli.debug);

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(&cli, &config) {
        eprintln!("{} {}", style("Error :").red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    let separators = if cli.colon {
        Separators::Colon
    } else {
        Separators::default()
    };

    let url = seslisozluk::build_query_url(&config.endpoint, cli.words.as_slice())?;
    if config.debug {
        eprintln!("url: {}", style(&url).attr(Attribute::Underlined));
    }
    debug!("searching {:?}", cli.words);

    let client = Client::new();
    let html = seslisozluk::fetch_document(&client, &url)?;
    let extraction = seslisozluk::extract_results(&html, &url, separators)?;

    match extraction.source {
        ResultSource::Nothing => info!(
            "no results or suggestions on {}; the page layout may have changed",
            url
        ),
        source => debug!("{} items from {:?}", extraction.items.len(), source),
    }

    let response = AlfredResponse::from(extraction.items);
    let json = alfred::to_json(&response)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()?;
    Ok(())
}
