/// Bundled defaults for web and mobile builds, where no .env file exists
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

#[cfg(not(target_arch = "wasm32"))]
fn load_config() {
    // A .env file wins (desktop dev); otherwise use the bundled defaults
    if dotenvy::dotenv().is_err() {
        load_bundled_config();
    }
}

#[cfg(target_arch = "wasm32")]
fn load_config() {
    load_bundled_config();
}

fn load_bundled_config() {
    for line in BUNDLED_CONFIG.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        // Values already present in the environment win
        if std::env::var(key.trim()).is_err() {
            // SAFETY: runs at startup before any threads are spawned
            unsafe {
                std::env::set_var(key.trim(), value.trim());
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();
}

#[cfg(target_arch = "wasm32")]
fn init_tracing() {}

fn main() {
    load_config();
    init_tracing();
    dioxus::launch(atupele::ui::App);
}
