use crate::error::StorageError;
use crate::models::Transaction;
use crate::repositories::local_storage::Storage;
use crate::utils::demo_data::demo_transactions;
use log::warn;

pub const LOCAL_STORAGE_KEY: &str = "dt-money-transactions";

/// Reads the persisted list, falling back to the demo dataset when nothing is
/// stored or the stored value cannot be read.
pub fn load_transactions<S: Storage + ?Sized>(storage: &S) -> Vec<Transaction> {
    match read_stored_transactions(storage) {
        Ok(Some(transactions)) => transactions,
        Ok(None) => demo_transactions(),
        Err(e) => {
            warn!("Failed to load transactions from local storage: {}", e);
            demo_transactions()
        }
    }
}

fn read_stored_transactions<S: Storage + ?Sized>(
    storage: &S,
) -> Result<Option<Vec<Transaction>>, StorageError> {
    match storage.get_item(LOCAL_STORAGE_KEY)? {
        Some(raw) if !raw.is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
        _ => Ok(None),
    }
}

pub fn save_transactions<S: Storage + ?Sized>(storage: &S, transactions: &[Transaction]) {
    let result = serde_json::to_string(transactions)
        .map_err(StorageError::from)
        .and_then(|raw| storage.set_item(LOCAL_STORAGE_KEY, &raw));

    if let Err(e) = result {
        warn!("Failed to save transactions to local storage: {}", e);
    }
}

pub fn get_next_id(transactions: &[Transaction]) -> u64 {
    transactions.iter().map(|tx| tx.id).max().map_or(1, |max| max + 1)
}
