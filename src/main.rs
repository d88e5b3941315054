use portfolio_site::{app::App, content::site_content};

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    // a second init (hot reload) only loses the logger, not the app
    let _ = console_log::init_with_level(level);

    match site_content() {
        Ok(content) => log::info!(
            "site content loaded: {} projects, {} experience entries, {} booking options",
            content.projects.len(),
            content.experience.len(),
            content.booking.booking_options.len()
        ),
        Err(e) => log::error!("site content is invalid, pages will render as unavailable: {e}"),
    }

    leptos::mount::mount_to_body(App);
}
