#![cfg(test)]
extern crate std;

use crate::testutils::create_liqpool_contract;
use crate::{LiquidityPool, LiquidityPoolClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, Vec};
use soroban_token_contract::testutils::create_token;
use soroban_token_contract::TokenClient;
use utils::test_utils::assert_approx_eq_abs;

pub(crate) struct Setup<'a> {
    pub(crate) e: Env,
    pub(crate) admin: Address,
    pub(crate) user: Address,
    pub(crate) token_a: TokenClient<'a>,
    pub(crate) token_b: TokenClient<'a>,
    pub(crate) pool: LiquidityPoolClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        let e = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&e);
        let user = Address::generate(&e);

        let mut token_a = create_token(&e, &admin, 0);
        let mut token_b = create_token(&e, &admin, 0);
        if token_a.address > token_b.address {
            core::mem::swap(&mut token_a, &mut token_b);
        }

        let pool = create_liqpool_contract(
            &e,
            &Vec::from_array(&e, [token_a.address.clone(), token_b.address.clone()]),
            30,
        );

        Setup {
            e,
            admin,
            user,
            token_a,
            token_b,
            pool,
        }
    }
}

impl Setup<'_> {
    // A depositor transfers both amounts in, then asks for shares.
    pub(crate) fn deposit(&self, amount_a: u128, amount_b: u128) -> u128 {
        self.token_a.mint(&self.pool.address, &(amount_a as i128));
        self.token_b.mint(&self.pool.address, &(amount_b as i128));
        self.pool.mint(&self.user)
    }
}

#[test]
#[should_panic(expected = "Error(Contract, #201)")]
fn test_initialize_twice() {
    let setup = Setup::default();
    setup.pool.initialize(
        &Vec::from_array(
            &setup.e,
            [
                setup.token_a.address.clone(),
                setup.token_b.address.clone(),
            ],
        ),
        &30,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #202)")]
fn test_initialize_unsorted_tokens() {
    let e = Env::default();
    e.mock_all_auths();
    let admin = Address::generate(&e);
    let mut token_a = create_token(&e, &admin, 0);
    let mut token_b = create_token(&e, &admin, 0);
    if token_a.address > token_b.address {
        core::mem::swap(&mut token_a, &mut token_b);
    }

    let pool = LiquidityPoolClient::new(&e, &e.register(LiquidityPool {}, ()));
    pool.initialize(
        &Vec::from_array(&e, [token_b.address.clone(), token_a.address.clone()]),
        &30,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #2015)")]
fn test_initialize_fee_out_of_bounds() {
    let e = Env::default();
    e.mock_all_auths();
    let admin = Address::generate(&e);
    let mut token_a = create_token(&e, &admin, 0);
    let mut token_b = create_token(&e, &admin, 0);
    if token_a.address > token_b.address {
        core::mem::swap(&mut token_a, &mut token_b);
    }

    create_liqpool_contract(
        &e,
        &Vec::from_array(&e, [token_a.address.clone(), token_b.address.clone()]),
        10_000,
    );
}

#[test]
fn test_first_deposit_locks_minimum_liquidity() {
    let setup = Setup::default();
    let shares = setup.deposit(1_000_000, 4_000_000);

    // sqrt(1_000_000 * 4_000_000) = 2_000_000, minus the locked minimum
    assert_eq!(shares, 1_999_000);
    assert_eq!(setup.pool.get_fee_fraction(), 30);
    assert_eq!(
        setup.pool.get_tokens(),
        Vec::from_array(
            &setup.e,
            [
                setup.token_a.address.clone(),
                setup.token_b.address.clone()
            ]
        )
    );
    assert_eq!(setup.pool.get_total_shares(), 2_000_000);
    assert_eq!(setup.pool.share_balance(&setup.user), 1_999_000);
    assert_eq!(setup.pool.share_balance(&setup.pool.address), 1000);
    assert_eq!(
        setup.pool.get_reserves(),
        Vec::from_array(&setup.e, [1_000_000, 4_000_000])
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #205)")]
fn test_first_deposit_below_minimum() {
    let setup = Setup::default();
    setup.deposit(10, 10);
}

#[test]
#[should_panic(expected = "Error(Contract, #205)")]
fn test_first_deposit_one_sided() {
    let setup = Setup::default();
    setup.deposit(1_000_000, 0);
}

#[test]
fn test_second_deposit_is_proportional() {
    let setup = Setup::default();
    setup.deposit(1_000_000, 1_000_000);
    let shares = setup.deposit(500_000, 500_000);
    assert_eq!(shares, 500_000);
    assert_eq!(setup.pool.get_total_shares(), 1_500_000);
}

#[test]
fn test_unbalanced_deposit_mints_lesser_side() {
    let setup = Setup::default();
    setup.deposit(1_000_000, 1_000_000);
    // the excess of token A is absorbed by the pool, not credited
    let shares = setup.deposit(500_000, 100_000);
    assert_eq!(shares, 100_000);
    assert_eq!(
        setup.pool.get_reserves(),
        Vec::from_array(&setup.e, [1_500_000, 1_100_000])
    );
}

#[test]
fn test_swap() {
    let setup = Setup::default();
    setup.deposit(1_000_000, 1_000_000);

    // sell 10_000 A: out = 9970 * 10_000 * 1_000_000
    //                      / (1_000_000 * 10_000 + 9970 * 10_000)
    setup
        .token_a
        .mint(&setup.pool.address, &10_000);
    setup.pool.swap(&0, &9871, &setup.user);

    assert_eq!(setup.token_b.balance(&setup.user), 9871);
    assert_eq!(
        setup.pool.get_reserves(),
        Vec::from_array(&setup.e, [1_010_000, 990_129])
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #204)")]
fn test_swap_above_quote_breaks_invariant() {
    let setup = Setup::default();
    setup.deposit(1_000_000, 1_000_000);

    setup
        .token_a
        .mint(&setup.pool.address, &10_000);
    setup.pool.swap(&0, &9872, &setup.user);
}

#[test]
#[should_panic(expected = "Error(Contract, #2003)")]
fn test_swap_without_input() {
    let setup = Setup::default();
    setup.deposit(1_000_000, 1_000_000);
    setup.pool.swap(&0, &100, &setup.user);
}

#[test]
#[should_panic(expected = "Error(Contract, #2002)")]
fn test_swap_exceeding_reserves() {
    let setup = Setup::default();
    setup.deposit(1_000_000, 1_000_000);
    setup
        .token_a
        .mint(&setup.pool.address, &10_000);
    setup.pool.swap(&0, &1_000_000, &setup.user);
}

#[test]
#[should_panic(expected = "Error(Contract, #2013)")]
fn test_swap_zero_out() {
    let setup = Setup::default();
    setup.deposit(1_000_000, 1_000_000);
    setup.pool.swap(&0, &0, &setup.user);
}

#[test]
fn test_burn_round_trip_never_exceeds_deposit() {
    let setup = Setup::default();
    let shares = setup.deposit(1_000_000, 4_000_000);

    setup
        .pool
        .transfer(&setup.user, &setup.pool.address, &shares);
    let (amount_a, amount_b) = setup.pool.burn(&setup.user);

    assert!(amount_a <= 1_000_000);
    assert!(amount_b <= 4_000_000);
    assert_eq!(amount_a, 999_500);
    assert_eq!(amount_b, 3_998_000);
    // the shortfall is bounded by the locked minimum's slice of the pool
    assert_approx_eq_abs(amount_a, 1_000_000, 501);
    assert_approx_eq_abs(amount_b, 4_000_000, 2001);

    // the locked minimum keeps the pool alive
    assert_eq!(setup.pool.get_total_shares(), 1000);
    assert_eq!(
        setup.pool.get_reserves(),
        Vec::from_array(&setup.e, [500, 2000])
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #206)")]
fn test_burn_without_shares() {
    let setup = Setup::default();
    setup.deposit(1_000_000, 1_000_000);
    setup.pool.burn(&setup.user);
}

#[test]
#[should_panic(expected = "Error(Contract, #206)")]
fn test_burn_on_empty_pool() {
    let setup = Setup::default();
    setup.pool.burn(&setup.user);
}

#[test]
fn test_share_transfer_and_allowance() {
    let setup = Setup::default();
    let e = &setup.e;
    let shares = setup.deposit(1_000_000, 1_000_000);

    let other = Address::generate(e);
    let spender = Address::generate(e);

    setup.pool.transfer(&setup.user, &other, &1000);
    assert_eq!(setup.pool.share_balance(&other), 1000);
    assert_eq!(setup.pool.share_balance(&setup.user), shares - 1000);

    setup
        .pool
        .approve(&setup.user, &spender, &500, &(e.ledger().sequence() + 200));
    assert_eq!(setup.pool.allowance(&setup.user, &spender), 500);

    setup
        .pool
        .transfer_from(&spender, &setup.user, &other, &200);
    assert_eq!(setup.pool.allowance(&setup.user, &spender), 300);
    assert_eq!(setup.pool.share_balance(&other), 1200);
}

#[test]
#[should_panic(expected = "Error(Contract, #208)")]
fn test_share_transfer_from_exceeds_allowance() {
    let setup = Setup::default();
    setup.deposit(1_000_000, 1_000_000);

    let spender = Address::generate(&setup.e);
    let other = Address::generate(&setup.e);
    setup.pool.approve(
        &setup.user,
        &spender,
        &100,
        &(setup.e.ledger().sequence() + 200),
    );
    setup
        .pool
        .transfer_from(&spender, &setup.user, &other, &101);
}

#[test]
#[should_panic(expected = "Error(Contract, #207)")]
fn test_share_transfer_exceeds_balance() {
    let setup = Setup::default();
    let shares = setup.deposit(1_000_000, 1_000_000);

    let other = Address::generate(&setup.e);
    setup.pool.transfer(&setup.user, &other, &(shares + 1));
}

#[test]
fn test_deflationary_token_deposit_uses_delivered_amounts() {
    let e = Env::default();
    e.mock_all_auths();
    e.cost_estimate().budget().reset_unlimited();

    let admin = Address::generate(&e);
    let user = Address::generate(&e);

    // 1% of every transfer of token A burns in transit
    let mut token_a = create_token(&e, &admin, 100);
    let mut token_b = create_token(&e, &admin, 0);
    if token_a.address > token_b.address {
        core::mem::swap(&mut token_a, &mut token_b);
    }

    let pool = create_liqpool_contract(
        &e,
        &Vec::from_array(&e, [token_a.address.clone(), token_b.address.clone()]),
        30,
    );

    token_a.mint(&user, &1_000_000);
    token_b.mint(&user, &1_000_000);
    token_a.transfer(&user, &pool.address, &1_000_000);
    token_b.transfer(&user, &pool.address, &1_000_000);
    pool.mint(&user);

    // the booked reserve of the fee-bearing side is what actually arrived
    let reserves = pool.get_reserves();
    let fee_side = if token_a.transfer_fee() > 0 { 0 } else { 1 };
    assert_eq!(reserves.get(fee_side).unwrap(), 990_000);
    assert_eq!(reserves.get(1 - fee_side).unwrap(), 1_000_000);
}
