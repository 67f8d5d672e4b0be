use crate::model::menu::{MenuItem, DESERT, MAIN, STARTER};

/// A resolved order: one dish (or the "No selection" placeholder) per course
/// and the summed price.
///
/// Orders are built per request and kept in memory only long enough for the
/// visitor to view or download the receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub starter: MenuItem,
    pub main: MenuItem,
    pub desert: MenuItem,
    pub total: f64,
}

impl Order {
    /// Receipt lines, labelled with their course.
    pub fn lines(&self) -> [(&'static str, &MenuItem); 3] {
        [
            (STARTER, &self.starter),
            (MAIN, &self.main),
            (DESERT, &self.desert),
        ]
    }
}
