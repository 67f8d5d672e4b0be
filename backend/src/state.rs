use crate::config::Config;
use crate::order_book::OrderBook;
use common::model::menu::Menu;

/// Everything a request handler needs, shared as `web::Data<AppState>`.
///
/// The menu is loaded once before the server starts and never mutated afterwards.
pub struct AppState {
    pub config: Config,
    pub menu: Menu,
    pub orders: OrderBook,
}

impl AppState {
    pub fn new(config: Config, menu: Menu) -> Self {
        let orders = OrderBook::new(config.order_ttl);
        Self {
            config,
            menu,
            orders,
        }
    }
}
