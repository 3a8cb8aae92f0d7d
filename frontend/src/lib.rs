//! WebAssembly entry point of the portfolio site.
//!
//! Hydrates the server-rendered pages. All content is fetched after this
//! point through the server functions in `app::api`.

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[wasm_bindgen::prelude::wasm_bindgen]
/// Installs browser logging and the panic hook, then hydrates `app::component`.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log_level());
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(component);
}
