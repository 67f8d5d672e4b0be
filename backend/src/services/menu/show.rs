use crate::state::AppState;
use crate::views::menu::menu_page;
use crate::views::render;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};

pub(crate) async fn process(state: web::Data<AppState>) -> HttpResponse {
    render(StatusCode::OK, menu_page(&state.menu)).await
}
