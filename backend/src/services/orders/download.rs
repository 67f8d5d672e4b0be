use crate::error::OrderError;
use crate::services::orders::receipt::format_receipt;
use crate::state::AppState;
use crate::views::order::receipt_page;
use crate::views::{not_found, render, Flash};
use actix_web::http::header::ContentDisposition;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use log::error;

const DOWNLOAD_FAILED: &str = "File download failed. Please try again";

/// Sends the receipt as `receipt.txt`. If the text cannot be produced the
/// receipt page is shown again with an error message.
pub(crate) async fn process(state: web::Data<AppState>, order_id: web::Path<String>) -> HttpResponse {
    let order_id = order_id.into_inner();
    let Some(order) = state.orders.get(&order_id).await else {
        return not_found(Flash::danger(OrderError::UnknownOrder.to_string())).await;
    };

    match format_receipt(&order) {
        Ok(text) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .insert_header(ContentDisposition::attachment("receipt.txt"))
            .body(text),
        Err(err) => {
            error!("Receipt for order {order_id} could not be written: {err}");
            render(
                StatusCode::INTERNAL_SERVER_ERROR,
                receipt_page(&order, &order_id).with_flash(Flash::danger(DOWNLOAD_FAILED)),
            )
            .await
        }
    }
}
