pub mod local_storage;
pub mod transaction_repository;
