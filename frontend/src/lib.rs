mod api;
mod app;
mod view;

pub use app::{Model, Msg};

use sauron::prelude::*;
use shared::ApiConfig;

/// Composition root: the API location and token are fixed at build time.
fn api_config() -> ApiConfig {
    ApiConfig::from_overrides(option_env!("SCHEDULER_API"), option_env!("SCHEDULER_TOKEN"))
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    Program::mount_to_body(Model::new(api_config()));
}
