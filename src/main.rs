/* 3rd party libraries */
use clap::Parser;
use log::info;

/* Custom libraries */
use cli::Cli;
use input::parse_floor_list;

/* Modules */
#[macro_use]
mod shared;
mod cli;
mod config;
mod elevator;
mod input;


/* Main */
fn main() {
    let cli = Cli::parse();

    // Load the configuration, the log level depends on it
    let config = config::load_config(cli.config.as_deref());
    let level = config
        .as_ref()
        .map(|config| config.logging.level.clone())
        .unwrap_or_else(|_| "info".to_string());
    init_logging(&level);
    let config = unwrap_or_exit!(config);

    // Read the requested stops
    let parsed = parse_floor_list(&cli.floors);
    if !parsed.ignored.is_empty() {
        info!("inputs ignored: {:?}", parsed.ignored);
    }

    // Run the elevator
    let request = unwrap_or_exit!(cli.trip_request(&config, parsed.floors));
    let trip = unwrap_or_exit!(elevator::operate(&request));
    if !trip.dropped.is_empty() {
        info!("ignored out of range floors: {:?}", trip.dropped);
    }

    if cli.json {
        println!("{}", unwrap_or_exit!(serde_json::to_string(&trip)));
    } else {
        println!("{}", trip.summary());
    }
}

fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
