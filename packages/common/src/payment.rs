//! Native coin helpers: validating attached funds and building bank sends.

use cosmwasm_std::{BankMsg, Coin, CosmosMsg, MessageInfo, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PaymentError {
    #[error("No funds sent")]
    NoFunds,

    #[error("Expected denom {expected}, got {got}")]
    WrongDenom { expected: String, got: String },

    #[error("Sent more than one denomination")]
    MultipleDenoms,
}

/// Require exactly one non-zero coin of `denom` attached to the message and
/// return its amount.
pub fn must_pay(info: &MessageInfo, denom: &str) -> Result<Uint128, PaymentError> {
    let coin = match info.funds.as_slice() {
        [] => return Err(PaymentError::NoFunds),
        [coin] => coin,
        _ => return Err(PaymentError::MultipleDenoms),
    };

    if coin.denom != denom {
        return Err(PaymentError::WrongDenom {
            expected: denom.to_string(),
            got: coin.denom.clone(),
        });
    }
    if coin.amount.is_zero() {
        return Err(PaymentError::NoFunds);
    }

    Ok(coin.amount)
}

/// Build a bank transfer of `amount` of `denom` to `to_address`.
pub fn native_send(to_address: impl Into<String>, denom: &str, amount: Uint128) -> CosmosMsg {
    CosmosMsg::Bank(BankMsg::Send {
        to_address: to_address.into(),
        amount: vec![Coin {
            denom: denom.to_string(),
            amount,
        }],
    })
}
