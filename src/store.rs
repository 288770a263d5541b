use crate::models::{NewTransaction, Summary, Transaction};
use crate::repositories::local_storage::Storage;
use crate::repositories::transaction_repository::{
    get_next_id, load_transactions, save_transactions,
};
use crate::services::api_client::{CreateTransactionRequest, TransactionApi};
use crate::utils::helpers::search_transactions;
use chrono::Utc;
use log::{info, warn};

pub struct TransactionStore<A, S> {
    api: A,
    storage: S,
    transactions: Vec<Transaction>,
    offline: bool,
}

impl<A, S> TransactionStore<A, S>
where
    A: TransactionApi + Sync,
    S: Storage,
{
    pub fn new(api: A, storage: S) -> Self {
        Self {
            api,
            storage,
            transactions: Vec::new(),
            offline: false,
        }
    }

    // A failed probe makes offline mode permanent for this store.
    pub async fn init(&mut self) {
        match self.api.list_transactions(None).await {
            Ok(transactions) => {
                info!(
                    "Online mode: connected to server ({} transactions)",
                    transactions.len()
                );
                save_transactions(&self.storage, &transactions);
                self.transactions = transactions;
            }
            Err(e) => {
                warn!("Offline mode: server unavailable ({}), using local storage", e);
                self.offline = true;
                self.fetch_transactions(None).await;
            }
        }
    }

    pub async fn fetch_transactions(&mut self, query: Option<&str>) {
        if self.offline {
            let stored = load_transactions(&self.storage);
            self.transactions = search_transactions(stored, query);
            return;
        }

        match self.api.list_transactions(query).await {
            Ok(transactions) => {
                save_transactions(&self.storage, &transactions);
                self.transactions = transactions;
            }
            Err(e) => warn!("Failed to fetch transactions from server: {}", e),
        }
    }

    pub async fn create_transaction(&mut self, input: NewTransaction) {
        let created_at = Utc::now();

        if self.offline {
            // Ids and persistence go through the full stored set; the
            // in-memory list may be narrowed by a search.
            let mut stored = load_transactions(&self.storage);
            let id = get_next_id(&stored).max(get_next_id(&self.transactions));
            let transaction = input.into_transaction(id, created_at);
            info!("Created transaction {} locally", transaction.id);

            stored.insert(0, transaction.clone());
            save_transactions(&self.storage, &stored);
            self.transactions.insert(0, transaction);
            return;
        }

        let request = CreateTransactionRequest::new(input, created_at);
        match self.api.create_transaction(&request).await {
            Ok(transaction) => {
                self.transactions.insert(0, transaction);
                save_transactions(&self.storage, &self.transactions);
            }
            Err(e) => warn!("Failed to create transaction on server: {}", e),
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn is_offline_mode(&self) -> bool {
        self.offline
    }

    pub fn summary(&self) -> Summary {
        Summary::from_transactions(&self.transactions)
    }
}
