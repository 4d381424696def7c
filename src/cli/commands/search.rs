//! Venue search command.

use tokio::runtime::Runtime;

use smokescreen::config::Config;
use smokescreen::enrichment::{PlacesClient, VenueSummary};

use super::{Cli, places_key, price_symbols, print_key_instructions};

/// Search venues and print them in ranking order
pub fn cmd_search(rt: &Runtime, cli: &Cli, config: &Config, query: &str) -> anyhow::Result<()> {
    let api_key = match places_key(cli, config) {
        Ok(key) => key,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_key_instructions();
            std::process::exit(1);
        }
    };

    let client = PlacesClient::new(api_key);

    rt.block_on(async {
        match client.search(query).await {
            Ok(venues) if venues.is_empty() => {
                println!("No venues found for {:?}.", query.trim());
            }
            Ok(venues) => {
                println!("Found {} venues:\n", venues.len());
                for (rank, venue) in venues.iter().enumerate() {
                    print_venue(rank + 1, venue);
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    });
    Ok(())
}

/// Print one ranked venue line plus its details
pub(crate) fn print_venue(rank: usize, venue: &VenueSummary) {
    println!("{:>3}. {}", rank, venue.name);
    if let Some(address) = &venue.address {
        println!("     {}", address);
    }

    let mut facts = Vec::new();
    if let Some(rating) = venue.rating {
        facts.push(format!("★ {:.1}", rating));
    }
    if let Some(tier) = venue.price_tier {
        facts.push(price_symbols(tier));
    }
    match venue.open_now {
        Some(true) => facts.push("open now".to_string()),
        Some(false) => facts.push("closed".to_string()),
        None => {}
    }
    if !facts.is_empty() {
        println!("     {}", facts.join(" · "));
    }
}
