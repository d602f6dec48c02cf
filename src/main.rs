use dotenvy::dotenv;

use brandboard::config::AppConfig;
use brandboard::forms::auth::SignInForm;
use brandboard::repository::{SessionReader, SnapshotRepository};
use brandboard::services::auth::{self, DEMO_EMAIL, DEMO_PASSWORD};
use brandboard::services::dashboard;
use brandboard::storage::FileStorage;

#[tokio::main]
async fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = AppConfig::from_env();

    let storage = match FileStorage::open(&config.data_dir) {
        Ok(storage) => storage,
        Err(e) => {
            log::error!("Failed to open data directory: {e}");
            std::process::exit(1);
        }
    };

    let repo = match SnapshotRepository::open(storage) {
        Ok(repo) => repo,
        Err(e) => {
            log::error!("Failed to restore persisted state: {e}");
            std::process::exit(1);
        }
    };

    match repo.current_user() {
        Ok(Some(user)) => log::info!("resuming session for `{}`", user.email),
        Ok(None) => {
            let form = SignInForm {
                email: DEMO_EMAIL.to_string(),
                password: DEMO_PASSWORD.to_string(),
            };
            match auth::sign_in(&repo, form, config.auth_latency).await {
                Ok(user) => log::info!("started session for `{}`", user.email),
                Err(e) => {
                    log::error!("Demo sign-in failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            log::error!("Failed to read session: {e}");
            std::process::exit(1);
        }
    }

    match dashboard::load_dashboard(&repo) {
        Ok(stats) => log::info!(
            "{} brands ({} active), {} products, {} units in stock, ${:.2} catalog value",
            stats.total_brands,
            stats.active_brands,
            stats.total_products,
            stats.total_stock,
            stats.total_revenue
        ),
        Err(e) => {
            log::error!("Failed to compute dashboard stats: {e}");
            std::process::exit(1);
        }
    }
}
