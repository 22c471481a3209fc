use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("At least one option is required")]
    NoOptions,

    #[error("Option {index} has an empty label")]
    EmptyOption { index: u32 },

    #[error("Duplicate option: {option}")]
    DuplicateOption { option: String },

    #[error("Invalid option {option}: only {count} options exist")]
    InvalidOption { option: u32, count: u32 },

    #[error("Address has already voted")]
    AlreadyVoted,
}
