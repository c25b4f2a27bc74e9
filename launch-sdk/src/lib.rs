//! Launchpad SDK
//!
//! Client-side building blocks for the dynamic bonding curve (DBC) program:
//! - Program ids and PDA derivation
//! - Pool-config account decoding
//! - Instruction builders for pool creation
//!
//! Nothing here talks to the network; callers fetch accounts and blockhashes
//! themselves and feed the results in.

pub mod core;
pub mod instructions;
pub mod prelude;
pub mod protocol;
pub mod state;

pub use crate::core::*;
pub use instructions::*;
pub use protocol::PdaBuilder;
pub use state::PoolConfigAccount;
