use ipv4db::config::{Config, OutputFormat};
use ipv4db::initial_registry;
use ipv4db::output::{organization_card, print_search};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let config = Config::from_env()?;
    init_logging(&config.log_config)?;
    log::info!("#Start main()");

    let mut args = std::env::args().skip(1).peekable();
    let verbose = args.next_if(|a| a == "-v" || a == "--verbose").is_some();
    let queries: Vec<String> = args.collect();

    let registry = initial_registry(&config)?;

    if queries.is_empty() {
        for organization in registry.organizations() {
            println!("{}", organization_card(organization));
        }
        return Ok(());
    }

    for query in &queries {
        let result = registry.search(query);
        match config.output {
            OutputFormat::Text => print_search(query, &result, verbose),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        }
    }

    Ok(())
}

fn init_logging(path: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(path).exists() {
        log4rs::init_file(path, Default::default())?;
    } else {
        let stdout = ConsoleAppender::builder().build();
        let config = log4rs::config::Config::builder()
            .appender(Appender::builder().build("stdout", Box::new(stdout)))
            .build(Root::builder().appender("stdout").build(LevelFilter::Warn))?;
        log4rs::init_config(config)?;
    }
    Ok(())
}
