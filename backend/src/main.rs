mod config;
mod error;
mod order_book;
mod reaper;
mod services;
mod state;
mod views;

use crate::config::Config;
use crate::state::AppState;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::fs;
use std::io;
use std::time::Duration;

const REAPER_PERIOD: Duration = Duration::from_secs(60);

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::load().map_err(io::Error::other)?;
    fs::create_dir_all(&config.upload_folder)?;

    // Loaded once, before any request can be served.
    let menu = services::menu::store::load(&config.menu_file());

    let host = config.host.clone();
    let port = config.port;
    let upload_folder = config.upload_folder.clone();
    let download_ttl = config.download_ttl;
    let state = web::Data::new(AppState::new(config, menu));

    // Start reaper task
    let reaper_orders = state.orders.clone();
    tokio::spawn(async move {
        reaper::start_reaper(reaper_orders, upload_folder, download_ttl, REAPER_PERIOD).await;
    });

    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(services::configure)
            .default_service(web::route().to(services::home::fallback))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
