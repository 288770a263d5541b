use dotenv::dotenv;
use dt_money::config::Config;
use dt_money::repositories::local_storage::FileStorage;
use dt_money::services::api_client::RemoteClient;
use dt_money::store::TransactionStore;
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    info!("Starting dt-money");
    let config = Config::from_env()?;

    let api = RemoteClient::new(&config.api_url, config.request_timeout)?;
    let storage = FileStorage::new(&config.storage_path);
    info!("Local storage at {}", config.storage_path.display());

    let mut store = TransactionStore::new(api, storage);
    store.init().await;
    info!(
        "Running in {} mode",
        if store.is_offline_mode() { "offline" } else { "online" }
    );

    if let Some(query) = config.search_query.as_deref() {
        info!("Searching transactions for {:?}", query);
        store.fetch_transactions(Some(query)).await;
    }

    for tx in store.transactions() {
        info!(
            "#{} {} [{}] {} {:.2} at {}",
            tx.id,
            tx.description,
            tx.category,
            tx.type_,
            tx.price,
            dt_money::models::to_canonical_string(&tx.created_at)
        );
    }

    let summary = store.summary();
    info!(
        "{} transactions | income {:.2} | outcome {:.2} | total {:.2}",
        store.transactions().len(),
        summary.income,
        summary.outcome,
        summary.total
    );
    Ok(())
}
