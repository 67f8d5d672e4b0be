use crate::views::home::home_page;
use crate::views::{not_found, render, Flash};
use actix_web::http::StatusCode;
use actix_web::HttpResponse;

pub(crate) async fn process() -> HttpResponse {
    render(StatusCode::OK, home_page()).await
}

/// Fallback for unknown paths.
pub(crate) async fn fallback() -> HttpResponse {
    not_found(Flash::danger("Page not found")).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::state_with;
    use actix_web::{test, web, App};
    use common::model::menu::Menu;

    #[actix_web::test]
    async fn home_page_links_every_section() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(state_with(Menu::default(), dir.path()))
                .configure(crate::services::configure)
                .default_service(web::route().to(fallback)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        for href in ["/menu", "/order", "/menu/upload"] {
            assert!(body.contains(&format!("href=\"{href}\"")), "{href}");
        }

        let resp = test::call_service(&app, test::TestRequest::get().uri("/nowhere").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("Page not found"));
    }
}
