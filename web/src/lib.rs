use clap::Parser;
use wasm_bindgen::prelude::*;

pub use bindings::TriviaStore;
pub use storage::LocalStorageBackend;

mod bindings;
mod storage;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn init_logging(location_hash: &str) {
    let level = match Args::try_parse_from(location_hash.split(['#', '&'])) {
        Ok(args) => args.verbose.log_level(),
        Err(err) => {
            gloo::console::warn!(format!("ignoring location hash args: {}", err));
            Some(log::Level::Warn)
        }
    };

    if let Some(log_level) = level {
        if let Err(err) = console_log::init_with_level(log_level) {
            gloo::console::warn!(format!("logger already initialized: {}", err));
        }
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::window;

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());
    init_logging(&location_hash);

    log::debug!("trivia store module loaded");
}
