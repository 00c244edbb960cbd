mod config;
mod ui;
mod util;

pub use config::FeedConfig;

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<ui::App>::new().render();
}
