use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:voter";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Option labels, in instantiation order
pub const OPTIONS: Item<Vec<String>> = Item::new("options");

/// option index => vote count
pub const VOTES: Map<u32, u64> = Map::new("votes");

/// voter => chosen option index
pub const VOTERS: Map<&Addr, u32> = Map::new("voters");
