//! Solana adapters: JSON-RPC transport and the bonding-curve pool builder

pub mod dbc;
pub mod rpc_client;

pub use dbc::{DbcPoolBuilder, PoolTransaction};
pub use rpc_client::LightRpcClient;
