//! Browser entry point. Build with `trunk serve --features csr`.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Debug) {
            leptos::logging::error!("console logger init failed: {err}");
        }
        leptos::mount::mount_to_body(taskboard::app::App);
    }
}
