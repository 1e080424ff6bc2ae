use js_sys::JsString;
use wasm_bindgen::prelude::wasm_bindgen;

pub mod config;
pub mod consts;
pub mod creeps;
pub mod errors;
pub mod geometry;
pub mod hauling;
pub mod logging;
pub mod mining;
pub mod priorities;
pub mod spawning;
pub mod travel;
pub mod utils;
pub mod world;

#[cfg(test)]
mod test_utils;

pub use mining::mine_process::{MineProcess, MineProcessData, ProcessStatus};

// `wasm_bindgen` to expose the function to JS.
#[wasm_bindgen]
pub fn setup() {
    logging::init_logging(config::LOG_LEVEL);
}

#[wasm_bindgen(js_name = take_log)]
pub fn take_log() -> JsString {
    logging::take_log().join("\n").into()
}
