use catalog_core::{Config, Database};
use log::info;

#[tokio::main]
async fn main() {
    catalog_core::logger::init().expect("logger already initialized");

    let config = Config::from_env();
    let db = Database::connect(config.storage)
        .await
        .expect("failed to open catalog database");

    info!("catalog database ready");
    let _ = db;
}
