//! # Order Service Module
//!
//! Order form, receipt page and receipt download.
//!
//! ## Registered Routes:
//!
//! *   **`GET /order`**: Renders the order form, one radio group per course.
//!
//! *   **`POST /order`**: Resolves the picked dishes against the loaded menu. A
//!     valid order is stored in the `OrderBook` and the visitor is redirected to
//!     its receipt; a dish that is not on the menu sends the form back with an
//!     error message.
//!
//! *   **`GET /order/receipt/{order_id}`**: Shows the receipt of a placed order.
//!
//! *   **`GET /order/receipt/{order_id}/download`**: Serves the receipt as a
//!     `receipt.txt` attachment.

mod download;
pub mod engine;
mod place;
pub mod receipt;
mod show;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/order";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(place::form))
        .route("", post().to(place::process))
        .route("/receipt/{order_id}", get().to(show::process))
        .route("/receipt/{order_id}/download", get().to(download::process))
}
