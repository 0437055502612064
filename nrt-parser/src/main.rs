use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use nrt_parser::feed::Feed;
use nrt_parser::filter::{FeedFilter, FilterConfig, UsefulServiceIds};
use nrt_parser::pipeline::Transformer;
use nrt_parser::rules::RuleTables;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    // Feed path: first argument, else NRT_FEED_PATH
    let feed_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("NRT_FEED_PATH").ok())
        .map(PathBuf::from)
        .ok_or("no feed given: pass a path or set NRT_FEED_PATH")?;

    let feed: Feed = read_json(&feed_path)?;
    info!(
        path = %feed_path.display(),
        routes = feed.routes.len(),
        stops = feed.stops.len(),
        trips = feed.trips.len(),
        "loaded feed"
    );

    let rules = match std::env::var("NRT_RULES_PATH") {
        Ok(path) => RuleTables::load(&path).map_err(|e| e.to_string())?,
        Err(_) => RuleTables::default(),
    };

    // Write out the tables in effect, as a starting point for a rules file
    if let Ok(path) = std::env::var("NRT_DUMP_RULES_PATH") {
        rules.save(&path).map_err(|e| e.to_string())?;
        info!(path = %path, "wrote rule tables");
    }

    let services = match std::env::var("NRT_USEFUL_SERVICE_IDS_PATH") {
        Ok(path) => {
            let ids: HashSet<String> = read_json(Path::new(&path))?;
            info!(count = ids.len(), "loaded useful service ids");
            UsefulServiceIds::only(ids)
        }
        Err(_) => UsefulServiceIds::unrestricted(),
    };

    let transformer = Transformer::new(FeedFilter::new(FilterConfig::default(), services), rules);
    let output = transformer.run(&feed).map_err(|e| e.to_string())?;

    let json = serde_json::to_string_pretty(&output).map_err(|e| format!("failed to serialize output: {e}"))?;
    println!("{json}");
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&contents).map_err(|e| format!("failed to parse {}: {e}", path.display()))
}
