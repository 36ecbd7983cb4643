//! `swatchctl`: drive a swatch picker from the command line.
//!
//! Each invocation builds a picker from the loaded configuration, applies one
//! command and prints the resulting swatch as JSON. Saved swatches persist in
//! the configured JSON file between runs.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use swatch_config::{ConfigLoader, PickerConfig};
use swatch_core::{
    EventRecorder, JsonFileStore, NoCapture, Point, PointerInput,
    SavedSwatchStore, SwatchEvent, SwatchPicker, WheelEngine, WheelGeometry,
};
use swatch_model::{Swatch, SwatchMode, random_swatch};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "swatchctl", about = "Swatch picker command-line host")]
struct Cli {
    /// Config file (TOML or JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Saved swatch file, overriding the configured location
    #[arg(long, global = true)]
    store: Option<PathBuf>,
    /// Controlled swatch: `#rrggbb`, `#a,#b` or swatch JSON
    #[arg(long, global = true)]
    swatch: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a random swatch
    Random {
        #[arg(long, default_value = "gradient")]
        mode: SwatchMode,
    },
    /// Show the current swatch and picker state
    Show,
    /// List saved swatches, newest first
    Saved,
    /// Switch between solid and gradient
    Mode {
        mode: SwatchMode,
        /// Save the result
        #[arg(long)]
        save: bool,
    },
    /// Press and release the wheel at an offset from its center
    Drag {
        #[arg(long, allow_hyphen_values = true)]
        dx: f32,
        #[arg(long, allow_hyphen_values = true)]
        dy: f32,
        /// Keep the current hue and move only lightness
        #[arg(long)]
        lock: bool,
        /// Wheel radius
        #[arg(long, default_value_t = 120.0)]
        radius: f32,
    },
    /// Swap the stops of a gradient and save it
    Swap,
    /// Make a saved swatch current
    Select { index: usize },
    /// Return to the default swatch
    Reset,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Command::Random { mode } = cli.command {
        print_swatch(&random_swatch(mode))?;
        return Ok(());
    }

    let config = load_config(cli.config.as_ref())?;
    let store = match &cli.store {
        Some(path) => SavedSwatchStore::new(Arc::new(JsonFileStore::new(path)))
            .with_key(config.storage_key.clone()),
        None => config.saved_swatch_store(),
    };
    let controlled = cli.swatch.as_deref().map(parse_swatch_arg).transpose()?;

    let events = EventRecorder::new();
    let mut picker = SwatchPicker::new(
        config.picker_options(controlled),
        store,
        Box::new(events.clone()),
    )
    .context("failed to build picker")?;

    match cli.command {
        Command::Random { .. } => {}
        Command::Show => {
            let current = picker.internal_swatch().to_external();
            let state = serde_json::json!({
                "swatch": current,
                "label": current.label(),
                "css": current.css_background(),
                "controlled": picker.is_controlled(),
                "disabled": picker.is_disabled(),
                "saved": picker.saved_swatches().len(),
            });
            println!("{}", serde_json::to_string_pretty(&state)?);
            return Ok(());
        }
        Command::Saved => {
            for (index, swatch) in
                picker.saved_swatches().to_external().iter().enumerate()
            {
                println!("{index}\t{}\t{}", swatch.key(), swatch.label());
            }
            return Ok(());
        }
        Command::Mode { mode, save } => {
            if !picker.set_mode(mode) {
                debug!(%mode, "mode unchanged");
            }
            if save {
                picker.save_current();
            }
        }
        Command::Drag {
            dx,
            dy,
            lock,
            radius,
        } => {
            let mut wheel = WheelEngine::with_window(
                &picker,
                WheelGeometry::new(Point::default(), radius),
                Arc::new(NoCapture),
                config.throttle_window(),
            );
            let input = PointerInput {
                position: Point::new(dx, dy),
                hue_lock: lock,
            };
            let now = Instant::now();
            if !wheel.pointer_down(&mut picker, input, now)? {
                bail!("picker is disabled");
            }
            wheel.pointer_up(&mut picker, now)?;
        }
        Command::Swap => {
            let mut wheel = WheelEngine::new(
                &picker,
                WheelGeometry::new(Point::default(), 1.0),
                Arc::new(NoCapture),
            );
            if !wheel.double_click(&mut picker)? {
                bail!("only gradients can be swapped");
            }
        }
        Command::Select { index } => {
            if picker.select_saved(index).is_none() {
                bail!(
                    "no saved swatch at index {index} ({} saved)",
                    picker.saved_swatches().len()
                );
            }
        }
        Command::Reset => {
            picker.reset_to_default();
        }
    }

    for event in events.take() {
        match event {
            SwatchEvent::Changed(swatch) => info!(%swatch, "swatch changed"),
            SwatchEvent::Saved(swatch) => info!(%swatch, "swatch saved"),
            SwatchEvent::Selected(swatch) => {
                info!(%swatch, "saved swatch selected")
            }
        }
    }

    print_swatch(&picker.internal_swatch().to_external())
}

fn load_config(path: Option<&PathBuf>) -> Result<PickerConfig> {
    let loader = match path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let load = loader.load().context("failed to load configuration")?;
    debug!(source = ?load.source, "configuration resolved");
    Ok(load.config)
}

fn print_swatch(swatch: &Swatch) -> Result<()> {
    println!("{}", serde_json::to_string(swatch)?);
    Ok(())
}

/// Accepts `#rrggbb`, `#a,#b` or a swatch JSON object.
fn parse_swatch_arg(raw: &str) -> Result<Swatch> {
    let raw = raw.trim();
    if raw.starts_with('{') {
        return serde_json::from_str(raw)
            .with_context(|| format!("invalid swatch JSON: {raw}"));
    }
    let swatch = match raw.split_once(',') {
        Some((a, b)) => Swatch::gradient(a.trim(), b.trim()),
        None => Swatch::solid(raw),
    };
    swatch
        .to_internal()
        .with_context(|| format!("invalid swatch: {raw}"))?;
    Ok(swatch)
}
