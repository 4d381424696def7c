//! Configuration check command.

use smokescreen::config::{self, Config};
use smokescreen::enrichment::prompt;

use super::{Cli, effective_config_path, resolve_key};

/// Print the config location, settings and which credentials are available
pub fn cmd_check_config(cli: &Cli, config: &Config, init: bool) -> anyhow::Result<()> {
    println!("Checking configuration...\n");

    match effective_config_path(cli) {
        Some(path) if path.exists() => println!("✓ Config file: {}", path.display()),
        Some(path) if init => {
            config::save_to(&Config::default(), &path)?;
            println!("✓ Config file: {} (created with defaults)", path.display());
        }
        Some(path) => {
            println!("✗ Config file: {} (not found, using defaults)", path.display());
            println!("  Run with --init to create it.");
        }
        None => println!("✗ Config file: no config directory on this system"),
    }

    println!();
    println!("API Keys:");
    let credentials = &config.credentials;
    print_key(
        "Places",
        cli.places_key.as_deref(),
        credentials.places_api_key.as_deref(),
    );
    print_key(
        "Gemini",
        cli.gemini_key.as_deref(),
        credentials.gemini_api_key.as_deref(),
    );

    println!();
    println!("Photos:");
    let options = config.photos.downscale_options();
    println!("  Downscale to: {}x{}", options.max_width, options.max_height);
    println!("  JPEG quality: {}", options.quality);
    println!("  Fetch width:  {}", config.photos.fetch_max_width);

    println!();
    println!("Analysis:");
    println!("  Model:  {}", config.analysis.model);
    match &config.analysis.prompt_path {
        Some(path) => {
            let text = prompt::load(Some(path.as_path()));
            if text == prompt::FALLBACK_PROMPT {
                println!("  Prompt: {} (unusable, built-in prompt applies)", path.display());
            } else {
                println!("  Prompt: {} ({} chars)", path.display(), text.chars().count());
            }
        }
        None => println!("  Prompt: built-in"),
    }

    Ok(())
}

fn print_key(service: &str, flag: Option<&str>, stored: Option<&str>) {
    let from_flag = resolve_key(flag, None).is_some();
    match resolve_key(flag, stored) {
        Some(_) if from_flag => println!("✓ {}: set (command line / environment)", service),
        Some(_) => println!("✓ {}: set (config file)", service),
        None => println!("✗ {}: not set", service),
    }
}
