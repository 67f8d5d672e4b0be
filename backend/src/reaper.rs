//! Background clean-up of short-lived data.
//!
//! A single task, spawned once from `main.rs`, wakes up every `period` to drop
//! expired orders from the `OrderBook` and to delete sorted menus that were
//! generated by an upload but never downloaded.

use crate::order_book::OrderBook;
use crate::services::menu::sweep_generated_menus;
use log::{debug, warn};
use std::path::PathBuf;
use std::time::Duration;

pub async fn start_reaper(
    orders: OrderBook,
    upload_folder: PathBuf,
    download_ttl: Duration,
    period: Duration,
) {
    let mut ticker = tokio::time::interval(period);
    loop {
        ticker.tick().await;

        let pruned = orders.prune().await;
        if pruned > 0 {
            debug!("Pruned {pruned} expired orders");
        }

        match sweep_generated_menus(&upload_folder, download_ttl) {
            Ok(0) => {}
            Ok(swept) => debug!("Removed {swept} menus that were never downloaded"),
            Err(err) => warn!("Could not sweep {}: {}", upload_folder.display(), err),
        }
    }
}
