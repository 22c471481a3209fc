//! Unit conversions between human-facing amounts and on-chain values.
//!
//! Campaign parameters are written the way people think about them (whole
//! coins, minutes); the contracts store base units and block seconds.

use cosmwasm_std::{
    OverflowError, OverflowOperation, StdError, StdResult, Timestamp, Uint128, Uint64,
};

pub const SECONDS_PER_MINUTE: u64 = 60;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Largest number of decimals a denom may declare (matches 18-decimal EVM assets).
pub const MAX_DECIMALS: u8 = 18;

/// Convert a whole-coin amount into base units, e.g. 3 LUNA with 6 decimals
/// becomes 3_000_000 uluna.
pub fn to_base_units(amount: Uint128, decimals: u8) -> StdResult<Uint128> {
    if decimals > MAX_DECIMALS {
        return Err(StdError::generic_err(format!(
            "decimals {} exceeds max {}",
            decimals, MAX_DECIMALS
        )));
    }
    let multiplier = 10u128.pow(decimals as u32);
    Ok(amount.checked_mul(Uint128::new(multiplier))?)
}

/// Convert a duration in minutes into seconds.
pub fn minutes_to_seconds(minutes: u64) -> StdResult<u64> {
    minutes.checked_mul(SECONDS_PER_MINUTE).ok_or_else(|| {
        StdError::from(OverflowError::new(
            OverflowOperation::Mul,
            minutes,
            SECONDS_PER_MINUTE,
        ))
    })
}

/// Point in time `minutes` after `start`, failing instead of wrapping the
/// nanosecond clock.
pub fn deadline_after(start: Timestamp, minutes: u64) -> StdResult<Timestamp> {
    let seconds = minutes_to_seconds(minutes)?;
    let offset = Uint64::new(seconds).checked_mul(Uint64::new(NANOS_PER_SECOND))?;
    let nanos = Uint64::new(start.nanos()).checked_add(offset)?;
    Ok(Timestamp::from_nanos(nanos.u64()))
}
