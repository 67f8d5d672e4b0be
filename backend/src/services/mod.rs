pub mod assets;
pub mod home;
pub mod menu;
pub mod orders;

use actix_web::web::{self, ServiceConfig};

/// Registers every page of the site.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.route("/", web::get().to(home::process))
        .service(menu::configure_routes())
        .service(orders::configure_routes())
        .service(assets::configure_routes());
}
