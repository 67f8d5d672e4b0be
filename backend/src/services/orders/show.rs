use crate::error::OrderError;
use crate::state::AppState;
use crate::views::order::receipt_page;
use crate::views::{not_found, render, Flash};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};

pub(crate) async fn process(state: web::Data<AppState>, order_id: web::Path<String>) -> HttpResponse {
    let order_id = order_id.into_inner();
    match state.orders.get(&order_id).await {
        Some(order) => render(StatusCode::OK, receipt_page(&order, &order_id)).await,
        None => not_found(Flash::danger(OrderError::UnknownOrder.to_string())).await,
    }
}
