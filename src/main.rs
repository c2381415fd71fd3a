//! Browser entry point: installs the panic hook and console logger, then
//! mounts the app. Built with `trunk serve --features csr`.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
        if let Err(e) = console_log::init_with_level(level) {
            leptos::logging::warn!("console logger unavailable: {e}");
        }
        leptos::mount::mount_to_body(figures::app::App);
    }
}
