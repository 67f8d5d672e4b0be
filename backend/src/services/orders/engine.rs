use crate::error::OrderError;
use common::model::menu::{Menu, MenuItem, DESERT, MAIN, STARTER};
use common::model::order::Order;
use common::requests::OrderRequest;
use log::debug;

/// Resolves the dish picked for `course`.
///
/// No pick yields the "No selection" placeholder. A pick that is not on the
/// menu (stale form, tampered request) is an error rather than an empty line.
pub fn resolve(menu: &Menu, course: &str, selected: Option<&str>) -> Result<MenuItem, OrderError> {
    let Some(dish) = selected.filter(|dish| !dish.is_empty()) else {
        return Ok(MenuItem::no_selection());
    };
    debug!("Looking up {course}, {dish}");
    menu.find(course, dish)
        .cloned()
        .ok_or_else(|| OrderError::DishNotFound {
            course: course.to_string(),
            dish: dish.to_string(),
        })
}

/// Sum of the three prices.
pub fn compute_total(starter: &MenuItem, main: &MenuItem, desert: &MenuItem) -> Result<f64, OrderError> {
    [starter, main, desert].into_iter().try_fold(0.0, |total, item| {
        let price = item.price_value().ok_or_else(|| OrderError::InvalidPrice {
            dish: item.dish.clone(),
            price: item.price.clone(),
        })?;
        Ok(total + price)
    })
}

pub fn place_order(menu: &Menu, request: &OrderRequest) -> Result<Order, OrderError> {
    let starter = resolve(menu, STARTER, request.selection(STARTER))?;
    let main = resolve(menu, MAIN, request.selection(MAIN))?;
    let desert = resolve(menu, DESERT, request.selection(DESERT))?;
    let total = compute_total(&starter, &main, &desert)?;
    Ok(Order {
        starter,
        main,
        desert,
        total,
    })
}
