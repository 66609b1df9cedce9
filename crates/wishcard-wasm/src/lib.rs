//! WASM bindings for wishcard.
//!
//! Exposes the wish token codec, share-link helpers, vibe catalog and the
//! local history via wasm-bindgen for consumption by TypeScript browser code.

pub mod codec;
mod error;
pub mod history;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
