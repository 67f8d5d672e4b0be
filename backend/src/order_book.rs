//! Short-lived, in-memory storage for placed orders.
//!
//! Placing an order hands the visitor an opaque token instead of the order itself;
//! the receipt page and the receipt download look the order up by that token.
//!
//! `OrderBook` is a clonable, thread-safe map from token to order. It is stored
//! in the shared `AppState` built in `main.rs`; the task in `reaper.rs` prunes
//! orders older than the configured time-to-live.

use common::model::order::Order;
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::RwLock;
use uuid::Uuid;

struct StoredOrder {
    order: Order,
    placed_at: Instant,
}

/// A thread-safe, shareable container for recently placed orders.
#[derive(Clone)]
pub struct OrderBook {
    /// Orders keyed by the token handed out to the visitor.
    ///
    /// Shared between every worker of the server; reads happen on each receipt
    /// request, writes when an order is placed or pruned.
    orders: Arc<RwLock<HashMap<String, StoredOrder>>>,
    ttl: Duration,
}

impl OrderBook {
    pub fn new(ttl: Duration) -> Self {
        Self {
            orders: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Stores `order` and returns the token that refers to it.
    pub async fn insert(&self, order: Order) -> String {
        let token = Uuid::new_v4().to_string();
        self.orders.write().await.insert(
            token.clone(),
            StoredOrder {
                order,
                placed_at: Instant::now(),
            },
        );
        token
    }

    /// Looks up a live order. Expired orders are treated as missing even if the
    /// reaper has not removed them yet.
    pub async fn get(&self, token: &str) -> Option<Order> {
        let orders = self.orders.read().await;
        orders
            .get(token)
            .filter(|stored| stored.placed_at.elapsed() < self.ttl)
            .map(|stored| stored.order.clone())
    }

    /// Removes every expired order, returning how many were dropped.
    pub async fn prune(&self) -> usize {
        let mut orders = self.orders.write().await;
        let before = orders.len();
        orders.retain(|_, stored| stored.placed_at.elapsed() < self.ttl);
        before - orders.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::menu::MenuItem;

    fn sample_order() -> Order {
        Order {
            starter: MenuItem::no_selection(),
            main: MenuItem::new("Salad", "6.00"),
            desert: MenuItem::no_selection(),
            total: 6.0,
        }
    }

    #[actix_web::test]
    async fn inserted_order_can_be_fetched_by_token() {
        let book = OrderBook::new(Duration::from_secs(60));
        let token = book.insert(sample_order()).await;

        assert_eq!(book.get(&token).await, Some(sample_order()));
        assert_eq!(book.get("not-a-token").await, None);
    }

    #[actix_web::test]
    async fn tokens_are_unique() {
        let book = OrderBook::new(Duration::from_secs(60));
        let first = book.insert(sample_order()).await;
        let second = book.insert(sample_order()).await;
        assert_ne!(first, second);
    }

    #[actix_web::test]
    async fn expired_orders_are_hidden_and_pruned() {
        let book = OrderBook::new(Duration::from_millis(20));
        let token = book.insert(sample_order()).await;
        tokio::time::sleep(Duration::from_millis(40)).await;

        assert_eq!(book.get(&token).await, None);
        assert_eq!(book.prune().await, 1);
        assert_eq!(book.prune().await, 0);
    }
}
