//! Console logging.
//!
//! Browser console under WASM, stdout/stderr natively.

use leptos::leptos_dom::logging::{console_error, console_log, console_warn};

/// Install the panic hook and announce start-up
pub fn init() {
    console_error_panic_hook::set_once();
    info(&format!(
        "Starting meme generator v{}",
        env!("CARGO_PKG_VERSION")
    ));
}

pub fn info(message: &str) {
    console_log(message);
}

pub fn warn(message: &str) {
    console_warn(message);
}

pub fn error(message: &str) {
    console_error(message);
}
