use crate::pool_interface::{LiquidityPoolClient, PoolFactoryClient};
use crate::quoting;
use crate::utils::sort;
use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_sdk::{panic_with_error, Address, Env};

pub fn get_pool(e: &Env, factory: &Address, token_a: &Address, token_b: &Address) -> Address {
    let (a, b) = sort(e, token_a, token_b);
    let factory_client = PoolFactoryClient::new(e, factory);
    if !factory_client.has_pool(&a, &b) {
        panic_with_error!(e, LiquidityPoolValidationError::PoolNotFound);
    }
    factory_client.get_pool(&a, &b)
}

// Directional reserves for one hop. The pool stores them in sorted token
// order; the hop direction decides which side is the input.
pub fn get_reserves(
    e: &Env,
    pool: &Address,
    token_in: &Address,
    token_out: &Address,
) -> (u128, u128) {
    let (token_a, _token_b) = sort(e, token_in, token_out);
    let reserves = LiquidityPoolClient::new(e, pool).get_reserves();
    let (reserve_a, reserve_b) = (reserves.get(0).unwrap(), reserves.get(1).unwrap());
    if token_in == &token_a {
        (reserve_a, reserve_b)
    } else {
        (reserve_b, reserve_a)
    }
}

// Picks the deposit that consumes the full desired amount of one side and
// the minimal matching amount of the other, never overspending either
// desired bound. An empty pool takes the desired amounts as-is.
pub fn get_deposit_amounts(
    e: &Env,
    desired_a: u128,
    desired_b: u128,
    min_a: u128,
    min_b: u128,
    reserve_a: u128,
    reserve_b: u128,
) -> (u128, u128) {
    if reserve_a == 0 && reserve_b == 0 {
        return (desired_a, desired_b);
    }

    let amount_b_optimal = quoting::quote(e, desired_a, reserve_a, reserve_b);
    if amount_b_optimal <= desired_b {
        if amount_b_optimal < min_b {
            panic_with_error!(e, LiquidityPoolValidationError::InsufficientBAmount);
        }
        (desired_a, amount_b_optimal)
    } else {
        let amount_a_optimal = quoting::quote(e, desired_b, reserve_b, reserve_a);
        if amount_a_optimal > desired_a {
            panic_with_error!(e, LiquidityPoolValidationError::InsufficientAmount);
        }
        if amount_a_optimal < min_a {
            panic_with_error!(e, LiquidityPoolValidationError::InsufficientAAmount);
        }
        (amount_a_optimal, desired_b)
    }
}
