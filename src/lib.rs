pub mod config;
pub mod models;
pub mod properties;
pub mod tasks;
pub mod utils;

/// Sets up `.env` loading and the logger for the binaries. Logs at
/// info unless `RUST_LOG` says otherwise.
pub fn init_env() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
