use netsis_panel::infra::config::{Config, StoreConfig};
use sqlx::postgres::PgPoolOptions;
use sqlx::Row;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Checks connectivity of both configured stores.\n\
         Honours the same environment as the API server:\n\
           API_PORT, TEST_MODE,\n\
           NETSIS_DB_HOST/PORT/NAME/USER/PASSWORD,\n\
           SENKRON_DB_HOST/PORT/NAME/USER/PASSWORD\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let config = Config::from_env();

    println!("> Preflight:");
    println!("  API_PORT={}", config.api_port);
    println!("  mode={:?}", config.mode);

    let mut failures = 0;
    failures += check_store(&config.netsis).await;
    failures += check_store(&config.senkron_fis).await;

    if failures > 0 {
        anyhow::bail!("{} store(s) unreachable", failures);
    }
    println!("> All stores reachable.");
    Ok(())
}

async fn check_store(store: &StoreConfig) -> u32 {
    println!("  {} store: {}", store.label, store.summary());

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(store.connect_timeout)
        .connect_with(store.connect_options())
        .await;

    let pool = match pool {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("    connection FAILED: {}", e);
            return 1;
        }
    };

    match sqlx::query("SELECT 1 AS test").fetch_one(&pool).await {
        Ok(row) => {
            let test: i32 = row.try_get("test").unwrap_or_default();
            println!("    SELECT 1 -> {} (OK)", test);
            pool.close().await;
            0
        }
        Err(e) => {
            eprintln!("    probe query FAILED: {}", e);
            pool.close().await;
            1
        }
    }
}
