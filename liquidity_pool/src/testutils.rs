#![cfg(any(test, feature = "testutils"))]

use crate::{LiquidityPool, LiquidityPoolClient};
use soroban_sdk::{Address, Env, Vec};

pub fn create_liqpool_contract<'a>(
    e: &Env,
    tokens: &Vec<Address>,
    fee_fraction: u32,
) -> LiquidityPoolClient<'a> {
    let liqpool = LiquidityPoolClient::new(e, &e.register(LiquidityPool {}, ()));
    liqpool.initialize(tokens, &fee_fraction);
    liqpool
}
