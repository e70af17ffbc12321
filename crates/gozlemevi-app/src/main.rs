use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::Parser;
use eframe::{egui, NativeOptions};
use egui_extras::install_image_loaders;
use gozlemevi_store::{FileStorage, MemoryStorage, SlotStorage, DEFAULT_WISHES_KEY};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod attachment;
mod ui;

use app::{AppOptions, GozlemeviApp};

#[derive(Debug, Parser)]
#[command(author, version, about = "Gözlemevi digital wishing wall")]
struct Cli {
    /// Directory holding the wish storage slots
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Storage slot key for the wish collection
    #[arg(long, default_value = DEFAULT_WISHES_KEY)]
    storage_key: String,

    /// Seed for a reproducible star layout
    #[arg(long)]
    star_seed: Option<u64>,

    /// Keep wishes in memory only; nothing is written to disk
    #[arg(long, default_value_t = false)]
    in_memory: bool,
}

fn open_storage(args: &Cli) -> anyhow::Result<Box<dyn SlotStorage>> {
    if args.in_memory {
        info!("wishes kept in memory only");
        return Ok(Box::new(MemoryStorage::new()));
    }
    let dir = match &args.data_dir {
        Some(dir) => dir.clone(),
        None => FileStorage::default_dir().context("failed to resolve the data directory")?,
    };
    let storage = FileStorage::open(&dir)
        .with_context(|| format!("failed to open wish storage at {}", dir.display()))?;
    info!(dir = %dir.display(), "wish storage ready");
    Ok(Box::new(storage))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .ok();

    let args = Cli::parse();
    let options = AppOptions {
        storage: open_storage(&args)?,
        storage_key: args.storage_key.clone(),
        star_seed: args.star_seed,
    };

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_title("Gözlemevi"),
        ..Default::default()
    };

    eframe::run_native(
        "Gözlemevi",
        native_options,
        Box::new(move |cc| {
            install_image_loaders(&cc.egui_ctx);
            Box::new(GozlemeviApp::new(cc, options))
        }),
    )
    .map_err(|err| anyhow!(err.to_string()))
}
