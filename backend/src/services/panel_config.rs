use actix_web::web::{self, get, resource};
use actix_web::{HttpResponse, Resource, Responder};
use common::model::config::PanelConfig;

const CONFIG_PATH: &str = "/panel-config.json";

/// Registers `GET /panel-config.json`. Expects `web::Data<PanelConfig>`.
pub fn configure_routes() -> Resource {
    resource(CONFIG_PATH).route(get().to(process))
}

async fn process(config: web::Data<PanelConfig>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(config.get_ref())
}
