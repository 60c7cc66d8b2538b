mod app;
mod commands;
mod config;
mod dataset;
mod effects;
mod render;

use std::io;

use anyhow::Context;
use career_logging::{career_info, LogDestination};
use career_store::{FileStore, UserStateStore};
use clap::Parser;
use log::LevelFilter;

use crate::app::{run_session, App};
use crate::config::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    career_logging::initialize(LogDestination::from(args.log), level);

    let catalog = dataset::load_catalog(args.catalog.as_deref()).context("loading catalog")?;
    career_info!("Using data directory {:?}", args.data_dir);
    let store = UserStateStore::new(FileStore::new(args.data_dir));

    let mut app = App::new(catalog, store);
    let stdin = io::stdin();
    run_session(&mut app, stdin.lock(), io::stdout().lock()).context("terminal session")?;
    Ok(())
}
