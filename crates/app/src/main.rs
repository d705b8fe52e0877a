mod config;
mod logger;
mod play;

use std::sync::Arc;

use quiz_core::model::Catalog;
use quiz_core::settings::TopicFilterDraft;
use services::{FixedTopics, QuizService, load_catalog_file, load_catalog_json};

use config::{Config, print_usage};

/// Built-in catalog used when no `--catalog` is given.
pub(crate) const SAMPLE_CATALOG: &str = include_str!("../assets/catalog.json");

fn load_catalog(config: &Config) -> Result<Catalog, Box<dyn std::error::Error>> {
    let catalog = match &config.catalog {
        Some(path) => load_catalog_file(path)?,
        None => load_catalog_json(SAMPLE_CATALOG)?,
    };
    tracing::info!(
        topics = catalog.topics().len(),
        questions = catalog.questions().len(),
        "catalog loaded"
    );
    Ok(catalog)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(std::env::args().skip(1)).inspect_err(|_| print_usage())?;
    if config.show_help {
        print_usage();
        return Ok(());
    }

    let catalog = load_catalog(&config)?;
    let filter = TopicFilterDraft {
        allowed: config.topics.clone(),
    }
    .validate(&catalog)?;

    let service = QuizService::new(Arc::new(catalog))
        .with_settings(Arc::new(FixedTopics(filter)))
        .with_seed(config.seed);
    let mut session = service.start_session(&config.team);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    play::run(&mut session, stdin.lock(), stdout.lock())?;
    Ok(())
}

fn main() {
    logger::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
