//! Full pipeline command: search, pick a venue, load photos, analyze.

use std::sync::Arc;

use tokio::runtime::Runtime;

use smokescreen::config::Config;
use smokescreen::enrichment::{
    Clients, EnrichmentService, GeminiClient, MAX_PHOTOS, PlacesClient, prompt,
};
use smokescreen::error::{Error, ResultExt};
use smokescreen::pipeline::{Orchestrator, PipelineState};

use super::search::print_venue;
use super::{Cli, gemini_key, places_key, print_key_instructions};

/// Run the whole pipeline for the `pick`-th result of `query`
pub fn cmd_inspect(
    rt: &Runtime,
    cli: &Cli,
    config: &Config,
    query: &str,
    pick: usize,
) -> anyhow::Result<()> {
    let (places_key, gemini_key) = match (places_key(cli, config), gemini_key(cli, config)) {
        (Ok(places), Ok(gemini)) => (places, gemini),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Error: {}", e);
            print_key_instructions();
            std::process::exit(1);
        }
    };

    let places = PlacesClient::new(places_key).with_photo_max_width(config.photos.fetch_max_width);
    let gemini = GeminiClient::new(gemini_key, config.analysis.model.clone());
    let model = gemini.model().to_string();
    let service = EnrichmentService::new(
        Clients::new(places, gemini),
        config.photos.downscale_options(),
    );
    let prompt = prompt::load(config.analysis.prompt_path.as_deref());
    let orchestrator = Arc::new(Orchestrator::new(service, prompt));

    rt.block_on(async {
        // Mirror progress transitions into the debug log
        let mut rx = orchestrator.subscribe();
        let follower = tokio::spawn(async move {
            let mut last = rx.borrow_and_update().progress;
            while rx.changed().await.is_ok() {
                let progress = rx.borrow_and_update().progress;
                if progress != last {
                    tracing::debug!(?progress, "Pipeline progress");
                    last = progress;
                }
            }
        });

        let result = inspect(&orchestrator, &model, query, pick).await;
        follower.abort();
        result
    })
}

async fn inspect(
    orchestrator: &Orchestrator,
    model: &str,
    query: &str,
    pick: usize,
) -> anyhow::Result<()> {
    println!("Searching for {:?}...", query.trim());
    if !orchestrator.submit_query(query).await {
        anyhow::bail!("Search query is blank");
    }
    let state = orchestrator.state();
    fail_on_error(&state)?;

    let Some(venue) = pick.checked_sub(1).and_then(|i| state.venues.get(i)).cloned() else {
        anyhow::bail!(
            "No result #{} ({} venues found for {:?})",
            pick,
            state.venues.len(),
            state.query
        );
    };
    print_venue(pick, &venue);
    println!();

    println!("Loading up to {} photos...", MAX_PHOTOS);
    orchestrator.select_venue(venue.clone()).await;
    let state = orchestrator.state();
    fail_on_error(&state)?;

    if let Some(address) = state.detail.as_ref().and_then(|d| d.formatted_address.as_ref()) {
        println!("  Address: {}", address);
    }
    let available = state.detail.as_ref().map_or(0, |d| d.photos.len());
    println!(
        "  Photos:  {} loaded ({} available)",
        state.photos.len(),
        available
    );
    if state.photos.is_empty() {
        println!();
        println!("✗ No photos to analyze for {}.", venue.name);
        return Ok(());
    }

    println!();
    println!("Analyzing {} photos with {}...", state.photos.len(), model);
    orchestrator.analyze().await;
    let state = orchestrator.state();
    fail_on_error(&state)?;

    match state.analysis {
        Some(analysis) => {
            println!("✓ {} ({})", analysis.label, analysis.score);
            if !analysis.rationale.is_empty() {
                println!();
                println!("  {}", analysis.rationale);
            }
        }
        None => println!("✗ No analysis result."),
    }
    Ok(())
}

/// Turn an error recorded in the pipeline state into a command failure
fn fail_on_error(state: &PipelineState) -> Result<(), Error> {
    match &state.error {
        Some(error) => Err(Error::from(error.clone()))
            .with_context(format!("{:?} step failed", error.phase)),
        None => Ok(()),
    }
}
