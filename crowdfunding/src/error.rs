//! Error types for the Crowdfunding contract

use common::PaymentError;
use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

use crate::state::CampaignState;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: address mismatch, only the beneficiary can perform this action")]
    Unauthorized,

    // ========================================================================
    // Lifecycle Errors
    // ========================================================================

    #[error("Deadline has passed: contributions closed at {deadline}")]
    DeadlinePassed { deadline: u64 },

    #[error("Deadline not reached: {remaining_seconds} seconds remaining")]
    DeadlineNotReached { remaining_seconds: u64 },

    #[error("Incorrect crowdfunding state: {state}")]
    InvalidState { state: CampaignState },

    // ========================================================================
    // Funds Errors
    // ========================================================================

    #[error("No funds sent")]
    NoFundsSent,

    #[error("Invalid funds: {reason}")]
    InvalidFunds { reason: String },

    #[error("Nothing to withdraw")]
    NothingToWithdraw,

    #[error("Transfer failed: {reason}")]
    TransferFailed { reason: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}

impl From<PaymentError> for ContractError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::NoFunds => ContractError::NoFundsSent,
            other => ContractError::InvalidFunds {
                reason: other.to_string(),
            },
        }
    }
}
