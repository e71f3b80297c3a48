use clap::{Parser, Subcommand};
use sm_site::simulate::{self, ScrollPlan};
use sm_site::{config, generate, output, page};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "sm-site")]
#[command(about = "Static site generator for the S&M Construction landing page")]
#[command(long_about = "\
Static site generator for the S&M Construction landing page

Renders a single page (navbar, hero, gallery, services, footer) to
dist/index.html. Content blocks fade and slide into view the first time
15% of them is visible; 'sm-site plan' shows when that happens for each
block while scrolling a simulated viewport.

Set SM_SITE_LOG (e.g. SM_SITE_LOG=debug) for diagnostic logging.

Run 'sm-site gen-config' to generate a documented site.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site config file (missing = stock defaults)
    #[arg(long, default_value = "site.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the site
    Build {
        /// Static assets copied to the output root
        #[arg(long, default_value = "assets")]
        assets: PathBuf,
        /// Output directory
        #[arg(long, default_value = "dist")]
        output: PathBuf,
    },
    /// Validate the config and list the page's sections
    Check,
    /// Simulate a scroll and print when each block reveals
    Plan {
        #[arg(long, default_value_t = 1280.0, value_parser = parse_pixels)]
        viewport_width: f64,
        #[arg(long, default_value_t = 800.0, value_parser = parse_pixels)]
        viewport_height: f64,
        /// Pixels scrolled per evaluation pass
        #[arg(long, default_value_t = 100.0, value_parser = parse_pixels)]
        step: f64,
        /// Milliseconds between evaluation passes
        #[arg(long, default_value_t = 100)]
        ms_per_step: u64,
        /// Print the timeline as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            assets,
            output: out_dir,
        } => {
            let site_config = config::load_config(&cli.config)?;
            println!("==> Generating → {}", out_dir.display());
            let report = generate::generate(&site_config, &assets, &out_dir)?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", out_dir.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.config.display());
            let site_config = config::load_config(&cli.config)?;
            output::print_check_output(&site_config);
            println!("==> Config is valid");
        }
        Command::Plan {
            viewport_width,
            viewport_height,
            step,
            ms_per_step,
            json,
        } => {
            let site_config = config::load_config(&cli.config)?;
            let plan = ScrollPlan {
                viewport_width,
                viewport_height,
                step,
                ms_per_step,
            };
            let blocks = page::reveal_layout(viewport_width, viewport_height);
            let timeline = simulate::reveal_timeline(&blocks, &plan, &site_config.reveal);
            if json {
                println!("{}", serde_json::to_string_pretty(&timeline)?);
            } else {
                output::print_plan_output(&timeline.events, &timeline.never_revealed, &plan);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Accept a finite pixel length of at least one pixel.
fn parse_pixels(s: &str) -> Result<f64, String> {
    let px: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if px.is_finite() && px >= 1.0 {
        Ok(px)
    } else {
        Err(format!("expected a length of at least 1 pixel, got {s}"))
    }
}

/// Diagnostic logging to stderr, filtered by `SM_SITE_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("SM_SITE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
