use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_sdk::{panic_with_error, Address, Env};

// Canonical pair order. A pool is addressed by the unordered pair, so both
// lookups and reserve orientation start from the sorted tuple.
pub fn sort(e: &Env, a: &Address, b: &Address) -> (Address, Address) {
    if a < b {
        return (a.clone(), b.clone());
    } else if a > b {
        return (b.clone(), a.clone());
    }
    panic_with_error!(e, LiquidityPoolValidationError::IdenticalTokens);
}

// Executing at the deadline is already too late.
pub fn check_deadline(e: &Env, deadline: u64) {
    if e.ledger().timestamp() >= deadline {
        panic_with_error!(e, LiquidityPoolValidationError::Expired);
    }
}
