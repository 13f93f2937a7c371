mod config;
mod services;

use crate::config::HostSettings;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let settings = HostSettings::from_env();
    let url = settings.url();

    if settings.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    let panel_config = web::Data::new(settings.panel_config());
    info!("Panel running at {}", url);
    info!("Management API at {}", panel_config.api_base);

    HttpServer::new(move || {
        App::new()
            .app_data(panel_config.clone())
            .service(services::panel_config::configure_routes())
            .default_service(web::route().to(services::assets::serve_embedded))
    })
        .bind((settings.host.as_str(), settings.port))?
        .run()
        .await
}
