//! Terminal front end for live profile search.
//!
//! Reads one command per line from stdin (`role=engineer`, `:search`,
//! `:next`, `:prev`, `:reset`, `:category NAME`) and prints each result page.

use std::sync::Arc;
use std::time::Duration;

use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, watch};

use profile_search::api::HttpProfileApi;
use profile_search::live::{LiveEvent, LiveSearch};
use profile_search::models::config::ServerConfig;
use profile_search::render::TextCell;
use profile_search::services::search::SearchOutcome;

fn print_outcome(outcome: &SearchOutcome) {
    let summary = &outcome.summary;
    let marker = if summary.total_is_exact { "" } else { "~" };
    println!(
        "{marker}{} profiles, page {}/{}",
        summary.total, summary.current_page, summary.total_pages
    );
    for record in &outcome.items {
        println!(
            "  {:<30} {:<30} {}",
            TextCell::new(record.name()).text,
            TextCell::new(record.current_role()).text,
            record.location()
        );
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let api = match HttpProfileApi::new(
        &server_config.api_base_url,
        Duration::from_secs(server_config.request_timeout_secs),
    ) {
        Ok(api) => api,
        Err(err) => {
            log::error!("Failed to build search client: {err}");
            std::process::exit(1);
        }
    };

    let (events_tx, events_rx) = mpsc::channel(32);
    let (outcomes_tx, mut outcomes_rx) = watch::channel(None);

    let driver = tokio::spawn(LiveSearch::new(Arc::new(api)).run(events_rx, outcomes_tx));
    let printer = tokio::spawn(async move {
        while outcomes_rx.changed().await.is_ok() {
            if let Some(outcome) = outcomes_rx.borrow_and_update().as_ref() {
                print_outcome(outcome);
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                log::error!("Failed to read stdin: {err}");
                break;
            }
        };
        match LiveEvent::parse(&line) {
            Some(event) => {
                if events_tx.send(event).await.is_err() {
                    break;
                }
            }
            None if line.trim().is_empty() => {}
            None => log::warn!("Unrecognised command: {line}"),
        }
    }

    drop(events_tx);
    if let Err(err) = driver.await {
        log::error!("Live search driver stopped: {err}");
    }
    printer.abort();
}
