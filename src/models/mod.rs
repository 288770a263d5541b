mod datetime_utils;
mod summary;
mod transaction;

pub use datetime_utils::{serialize_datetime, to_canonical_string};
pub use summary::Summary;
pub use transaction::{NewTransaction, Transaction, TransactionType};
