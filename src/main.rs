#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod error;
mod http;
mod picture;
mod prelude;
mod resolve;
mod viewer;

use crate::prelude::*;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let config_path: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);

    let result = Config::load(config_path.as_deref()).and_then(|config| app::run(&config));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
