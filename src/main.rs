use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use color_match::{ColorSpace, Lab, MatchOutcome, Summarizer};
use huematch::models::{AppConfig, MatchResponse};
use huematch::services::{MatchOverrides, MatchService};

#[derive(Parser)]
#[command(name = "huematch")]
#[command(version, about = "Huematch - name the colour of an image")]
struct Cli {
    /// Path to config.yaml (overrides CONFIG_FILE)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// How images are reduced to one colour
#[derive(Args)]
struct SummaryArgs {
    /// Summarizer: "mean" or "kmeans"
    #[arg(long)]
    summarizer: Option<Summarizer>,

    /// Number of k-means clusters (selects kmeans unless --summarizer is given)
    #[arg(short = 'k', long)]
    clusters: Option<usize>,

    /// Working resolution: images are resampled to NxN pixels
    #[arg(long, value_name = "N", conflicts_with = "no_resize")]
    resize: Option<u32>,

    /// Keep images at their decoded size
    #[arg(long)]
    no_resize: bool,

    /// Fixed k-means seed
    #[arg(long)]
    seed: Option<u64>,
}

impl SummaryArgs {
    fn overrides(&self, space: Option<ColorSpace>, max_distance: Option<f64>) -> MatchOverrides {
        MatchOverrides {
            space,
            summarizer: self.summarizer,
            clusters: self.clusters,
            resize_to: if self.no_resize {
                Some(None)
            } else {
                self.resize.map(Some)
            },
            max_distance,
            seed: self.seed,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Match images against the palette
    Match {
        /// Image files (PNG, JPEG, GIF, BMP or WebP)
        #[arg(required = true)]
        images: Vec<PathBuf>,

        /// Colour space to match in: "srgb" or "lab"
        #[arg(short, long)]
        space: Option<ColorSpace>,

        /// Reject matches farther than this (default depends on the space)
        #[arg(short, long)]
        max_distance: Option<f64>,

        #[command(flatten)]
        summary: SummaryArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the summary colour of an image
    Summarize {
        /// Image file
        image: PathBuf,

        #[command(flatten)]
        summary: SummaryArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Match a hex colour (e.g. "#1a1a8c") without an image
    Nearest {
        /// Colour as #RRGGBB
        color: String,

        /// Colour space to match in: "srgb" or "lab"
        #[arg(short, long)]
        space: Option<ColorSpace>,

        /// Reject matches farther than this (default depends on the space)
        #[arg(short, long)]
        max_distance: Option<f64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the configured palette
    Palette {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so that JSON on stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huematch=warn,color_match=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = cli
        .config
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));

    let success = match cli.command {
        Some(Commands::Match {
            images,
            space,
            max_distance,
            summary,
            json,
        }) => {
            let service = load_service(config_path.as_deref())?;
            let overrides = summary.overrides(space, max_distance);
            run_match_command(&service, &images, &overrides, json)?
        }
        Some(Commands::Summarize {
            image,
            summary,
            json,
        }) => {
            let service = load_service(config_path.as_deref())?;
            let overrides = summary.overrides(None, None);
            run_summarize_command(&service, &image, &overrides, json)?
        }
        Some(Commands::Nearest {
            color,
            space,
            max_distance,
            json,
        }) => {
            let service = load_service(config_path.as_deref())?;
            let overrides = MatchOverrides {
                space,
                max_distance,
                ..Default::default()
            };
            run_nearest_command(&service, &color, &overrides, json)?
        }
        Some(Commands::Palette { json }) => {
            let service = load_service(config_path.as_deref())?;
            run_palette_command(&service, json)?
        }
        None => {
            run_status_command(config_path.as_deref());
            true
        }
    };

    if !success {
        std::process::exit(1);
    }
    Ok(())
}

fn load_service(config_path: Option<&Path>) -> anyhow::Result<MatchService> {
    let config = AppConfig::load(config_path).context("Failed to load configuration")?;
    MatchService::new(config).context("Failed to initialize palette")
}

/// Match every image; returns whether all of them matched
fn run_match_command(
    service: &MatchService,
    images: &[PathBuf],
    overrides: &MatchOverrides,
    json: bool,
) -> anyhow::Result<bool> {
    let request = service.request(overrides);
    let multiple = images.len() > 1;
    let mut all_matched = true;

    for path in images {
        let result = service.match_file(path, &request);
        all_matched &= matches!(result, Ok(MatchOutcome::Match { .. }));

        if json {
            let image = multiple.then(|| path.display().to_string());
            let response = MatchResponse::from_result(image, &result);
            println!("{}", serde_json::to_string(&response)?);
            continue;
        }

        let prefix = if multiple {
            format!("{}: ", path.display())
        } else {
            String::new()
        };
        match &result {
            Ok(MatchOutcome::Match { name, distance }) => {
                println!("{prefix}{name} (distance {distance:.4})");
            }
            Ok(MatchOutcome::NoMatch {
                max_distance,
                nearest,
            }) => {
                println!(
                    "{prefix}no colour within {max_distance} (nearest: {} at {:.4})",
                    nearest.name, nearest.distance
                );
            }
            Err(e) => eprintln!("{prefix}error: {e}"),
        }
    }

    Ok(all_matched)
}

fn run_summarize_command(
    service: &MatchService,
    image: &Path,
    overrides: &MatchOverrides,
    json: bool,
) -> anyhow::Result<bool> {
    let request = service.request(overrides);
    let summary = service.summarize_file(image, &request)?;
    let lab = Lab::from(summary);

    if json {
        let value = json!({
            "hex": summary.to_hex(),
            "srgb": summary.to_array(),
            "lab": lab.to_array(),
            "summarizer": request.get_summarizer().name(),
        });
        println!("{}", serde_json::to_string(&value)?);
    } else {
        println!(
            "{}  srgb({:.4}, {:.4}, {:.4})  lab({:.2}, {:.2}, {:.2})",
            summary.to_hex(),
            summary.r,
            summary.g,
            summary.b,
            lab.l,
            lab.a,
            lab.b
        );
    }
    Ok(true)
}

fn run_nearest_command(
    service: &MatchService,
    color: &str,
    overrides: &MatchOverrides,
    json: bool,
) -> anyhow::Result<bool> {
    let request = service.request(overrides);
    let result = service.match_hex(color, &request);

    if json {
        let response = MatchResponse::from_result(None, &result);
        println!("{}", serde_json::to_string(&response)?);
        return Ok(response.body.is_found());
    }

    match result? {
        MatchOutcome::Match { name, distance } => {
            println!("{name} (distance {distance:.4})");
            Ok(true)
        }
        MatchOutcome::NoMatch {
            max_distance,
            nearest,
        } => {
            println!(
                "no colour within {max_distance} (nearest: {} at {:.4})",
                nearest.name, nearest.distance
            );
            Ok(false)
        }
    }
}

fn run_palette_command(service: &MatchService, json: bool) -> anyhow::Result<bool> {
    let palette = service.palette();

    if json {
        let entries: Vec<_> = palette
            .iter()
            .map(|(name, color)| json!({ "name": name, "hex": color.to_hex() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(true);
    }

    let width = palette.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, color) in palette.iter() {
        println!("{name:<width$}  {}", color.to_hex());
    }
    Ok(true)
}

/// Show configuration overview when no subcommand is given
fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Huematch v{VERSION} - name the colour of an image\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        std::env::var("CONFIG_FILE").as_deref().unwrap_or("(not set)")
    );

    let config_source = match config_path {
        Some(path) if path.exists() => path.display().to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    println!("\nConfiguration:");
    println!("  Source:     {config_source}");

    let config = match AppConfig::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            println!("  Error:      {e}");
            return;
        }
    };

    let palette_size = match config.palette.build() {
        Ok(palette) => format!("{} colours", palette.len()),
        Err(e) => format!("invalid: {e}"),
    };
    println!("  Palette:    {} ({palette_size})", config.palette);
    println!("  Space:      {}", config.default_space);
    println!("  Summarizer: {}", config.summarizer());
    match config.resize_to {
        Some(n) => println!("  Resize:     {n}x{n}"),
        None => println!("  Resize:     off"),
    }
    println!(
        "  Limits:     srgb {}, lab {}",
        config.max_distances.srgb, config.max_distances.lab
    );
    match config.seed {
        Some(seed) => println!("  Seed:       {seed}"),
        None => println!("  Seed:       random"),
    }

    println!("\nCommands:");
    println!("  huematch match <IMAGE>...   Match images against the palette");
    println!("  huematch summarize <IMAGE>  Print the summary colour of an image");
    println!("  huematch nearest <HEX>      Match a colour directly");
    println!("  huematch palette            List the palette");
    println!("\nRun 'huematch --help' for all options.");
}
