mod components;

use components::App;
use zxing_scanner::CONFIG;

fn main() {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Info
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 ZXing Scanner demo");

    yew::Renderer::<App>::new().render();
}
