use crate::services::orders::engine::place_order;
use crate::state::AppState;
use crate::views::order::order_form;
use crate::views::{render, Flash};
use actix_web::http::header;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use common::requests::OrderRequest;
use log::{debug, info, warn};

pub(crate) async fn form(state: web::Data<AppState>) -> HttpResponse {
    render(StatusCode::OK, order_form(&state.menu, &OrderRequest::default())).await
}

/// HTTP handler for `POST /order`.
///
/// - Valid picks: `303 See Other` to the receipt of the stored order.
/// - A dish missing from the menu: `422 Unprocessable Entity` with the form.
pub(crate) async fn process(
    state: web::Data<AppState>,
    request: web::Form<OrderRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    debug!("Order request: {request:?}");

    match place_order(&state.menu, &request) {
        Ok(order) => {
            let order_id = state.orders.insert(order).await;
            info!("Placed order {order_id}");
            HttpResponse::SeeOther()
                .insert_header((header::LOCATION, format!("/order/receipt/{order_id}")))
                .finish()
        }
        Err(err) => {
            warn!("Order rejected: {err}");
            render(
                StatusCode::UNPROCESSABLE_ENTITY,
                order_form(&state.menu, &request).with_flash(Flash::danger(err.to_string())),
            )
            .await
        }
    }
}
