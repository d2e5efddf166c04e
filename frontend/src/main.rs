use crate::app::App;

mod app;
mod components;
mod layouts;
mod pages;
mod routes;

fn main() {
    gloo_console::info!("ValidX starting");
    yew::Renderer::<App>::new().render();
}
