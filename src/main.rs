mod config;
mod controller;
mod dialogs;
mod error;
mod generator;
mod gui;
mod lookup;
mod models;
mod storage;

use anyhow::Context;
use iced::{window, Size};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config::load_config().context("failed to load configuration")?;
    let store = storage::StoreFile::new(config.store_path);

    iced::application(
        "Password Manager",
        gui::PassKeepApp::update,
        gui::PassKeepApp::view,
    )
    .window(window::Settings {
        size: Size::new(680.0, 560.0),
        resizable: false,
        ..window::Settings::default()
    })
    .run_with(move || gui::PassKeepApp::new(store))
    .context("failed to run the password manager window")
}
