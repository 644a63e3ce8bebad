//! Loaders for the two run inputs: the newest dataset and the contract.

pub mod contract_loader;
pub mod dataset_loader;

pub use contract_loader::{load_contract, parse_contract, ContractFormat};
pub use dataset_loader::{parse_cell, read_csv, DatasetLoader};
