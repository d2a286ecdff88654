use clap::Parser;
use directories::ProjectDirs;
use specfilter::commands;
use specfilter::config::FilterConfig;
use specfilter::error::Result;
use specfilter::spec::Combinator;
use tracing_subscriber::EnvFilter;

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_countries, print_messages, print_sections};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(&cli)?;

    match cli.command {
        Some(Commands::Demo) | None => handle_demo(&config),
        Some(Commands::List) => handle_list(&config),
        Some(Commands::Filter { terms, any, all }) => handle_filter(&config, &terms, any, all),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<FilterConfig> {
    let config_dir = cli.config.clone().or_else(|| {
        ProjectDirs::from("com", "specfilter", "specfilter")
            .map(|dirs| dirs.config_dir().to_path_buf())
    });

    match config_dir {
        Some(dir) => FilterConfig::load(dir),
        None => {
            tracing::warn!("could not determine config dir, using defaults");
            Ok(FilterConfig::default())
        }
    }
}

fn handle_demo(config: &FilterConfig) -> Result<()> {
    let result = commands::demo::run(&config.countries);
    print_sections(&result.sections);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(config: &FilterConfig) -> Result<()> {
    let result = commands::list::run(&config.countries);
    print_countries(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_filter(config: &FilterConfig, terms: &[String], any: bool, all: bool) -> Result<()> {
    let combinator = match (any, all) {
        (true, _) => Combinator::Any,
        (_, true) => Combinator::All,
        _ => config.combinator,
    };

    let result = commands::filter::run(&config.countries, terms, combinator)?;
    print_countries(&result.listed);
    print_messages(&result.messages);
    Ok(())
}
