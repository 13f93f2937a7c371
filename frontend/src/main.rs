use crate::app::App;
use log::LevelFilter;

mod app;
mod components;
mod config;
mod logging;
mod services;
mod sheets;

fn main() {
    logging::init(if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    yew::Renderer::<App>::new().render();
}
