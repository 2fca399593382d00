use crate::admin::{has_admin, require_admin, set_admin};
use crate::pool_interface::{LiquidityPoolClient, PoolFactoryClient};
use crate::pool_utils::{get_deposit_amounts, get_pool, get_reserves};
use crate::quoting;
use crate::storage::{get_factory, set_factory};
use crate::utils::{check_deadline, sort};
use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{
    contract, contractimpl, contractmeta, panic_with_error, Address, BytesN, Env, Symbol, Vec,
};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Router for constant product liquidity pools"
);

pub trait LiquidityPoolRouterTrait {
    // Pure quoting. Read-only, no token movement.
    fn quote(e: Env, amount_a: u128, reserve_a: u128, reserve_b: u128) -> u128;
    fn get_amount_out(e: Env, amount_in: u128, reserve_in: u128, reserve_out: u128) -> u128;
    fn get_amount_in(e: Env, amount_out: u128, reserve_in: u128, reserve_out: u128) -> u128;

    // Resolves a multi-hop path forward: `amounts[0]` is the input, every
    // following element is the output of the corresponding hop.
    fn get_amounts_out(e: Env, amount_in: u128, path: Vec<Address>) -> Vec<u128>;

    // Resolves a path backward from the desired output.
    fn get_amounts_in(e: Env, amount_out: u128, path: Vec<Address>) -> Vec<u128>;

    // Deposits at the current ratio, creating the pool on first use.
    // Returns the consumed amounts and the minted shares.
    fn add_liquidity(
        e: Env,
        account: Address,
        token_a: Address,
        token_b: Address,
        desired_a: u128,
        desired_b: u128,
        min_a: u128,
        min_b: u128,
        to: Address,
        deadline: u64,
    ) -> (u128, u128, u128);

    // Burns `liquidity` shares, paying out pro-rata amounts above the
    // caller's floors. Shares are pulled via a prior approval.
    fn remove_liquidity(
        e: Env,
        account: Address,
        token_a: Address,
        token_b: Address,
        liquidity: u128,
        min_a: u128,
        min_b: u128,
        to: Address,
        deadline: u64,
    ) -> (u128, u128);

    // Same, authorized by a detached signature instead of an approval.
    fn remove_liquidity_with_permit(
        e: Env,
        account: Address,
        token_a: Address,
        token_b: Address,
        liquidity: u128,
        min_a: u128,
        min_b: u128,
        to: Address,
        deadline: u64,
        nonce: u128,
        signature: BytesN<64>,
    ) -> (u128, u128);

    fn swap_exact_tokens_for_tokens(
        e: Env,
        account: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<u128>;

    fn swap_tokens_for_exact_tokens(
        e: Env,
        account: Address,
        amount_out: u128,
        amount_in_max: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<u128>;

    // Exact-input swap for assets that deduct a fee in transit: every hop
    // re-measures what actually arrived at the pool instead of trusting
    // the nominal amount, and the min-out bound is checked against the
    // recipient's measured balance delta. Returns that delta.
    fn swap_exact_tokens_for_tokens_supporting_fee_on_transfer_tokens(
        e: Env,
        account: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> u128;

    // Withdrawal with the min-amount floors checked against the
    // recipient's measured balance deltas, not the nominal burn returns.
    fn remove_liquidity_supporting_fee_on_transfer_tokens(
        e: Env,
        account: Address,
        token_a: Address,
        token_b: Address,
        liquidity: u128,
        min_a: u128,
        min_b: u128,
        to: Address,
        deadline: u64,
    ) -> (u128, u128);

    fn remove_liquidity_with_permit_supporting_fee_on_transfer_tokens(
        e: Env,
        account: Address,
        token_a: Address,
        token_b: Address,
        liquidity: u128,
        min_a: u128,
        min_b: u128,
        to: Address,
        deadline: u64,
        nonce: u128,
        signature: BytesN<64>,
    ) -> (u128, u128);
}

pub trait RouterAdminInterface {
    fn init_admin(e: Env, account: Address);
    fn set_factory(e: Env, factory: Address);
    fn get_factory(e: Env) -> Address;
}

pub trait UpgradeableContract {
    fn version() -> u32;
    fn upgrade(e: Env, new_wasm_hash: BytesN<32>);
}

#[contract]
pub struct LiquidityPoolRouter;

// Pays every hop out of the previous pool directly into the next one; the
// final hop pays the recipient. Reserves were already read by the path
// resolution, they are not re-read here.
fn swap_hops(e: &Env, factory: &Address, path: &Vec<Address>, amounts: &Vec<u128>, to: &Address) {
    let last_hop = path.len() - 2;
    for i in 0..path.len() - 1 {
        let token_in = path.get(i).unwrap();
        let token_out = path.get(i + 1).unwrap();
        let (token_a, _token_b) = sort(e, &token_in, &token_out);
        let pool = get_pool(e, factory, &token_in, &token_out);

        let amount_out = amounts.get(i + 1).unwrap();
        let (out_a, out_b) = if token_out == token_a {
            (amount_out, 0)
        } else {
            (0, amount_out)
        };

        let recipient = if i < last_hop {
            get_pool(e, factory, &token_out, &path.get(i + 2).unwrap())
        } else {
            to.clone()
        };
        LiquidityPoolClient::new(e, &pool).swap(&out_a, &out_b, &recipient);
    }
}

// Pulls the shares onto the pool and burns them. Returns the paid out
// amounts in the pool's sorted token order.
fn withdraw_liquidity(
    e: &Env,
    pool: &Address,
    account: &Address,
    liquidity: u128,
    to: &Address,
) -> (u128, u128) {
    let pool_client = LiquidityPoolClient::new(e, pool);
    pool_client.transfer_from(&e.current_contract_address(), account, pool, &liquidity);
    pool_client.burn(to)
}

fn remove_liquidity_inner(
    e: &Env,
    pool: &Address,
    account: &Address,
    token_a: &Address,
    token_b: &Address,
    liquidity: u128,
    min_a: u128,
    min_b: u128,
    to: &Address,
) -> (u128, u128) {
    let (sorted_a, _sorted_b) = sort(e, token_a, token_b);
    let (out_first, out_second) = withdraw_liquidity(e, pool, account, liquidity, to);
    let (amount_a, amount_b) = if token_a == &sorted_a {
        (out_first, out_second)
    } else {
        (out_second, out_first)
    };

    if amount_a < min_a {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientAAmount);
    }
    if amount_b < min_b {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientBAmount);
    }
    (amount_a, amount_b)
}

#[contractimpl]
impl LiquidityPoolRouterTrait for LiquidityPoolRouter {
    fn quote(e: Env, amount_a: u128, reserve_a: u128, reserve_b: u128) -> u128 {
        quoting::quote(&e, amount_a, reserve_a, reserve_b)
    }

    fn get_amount_out(e: Env, amount_in: u128, reserve_in: u128, reserve_out: u128) -> u128 {
        quoting::get_amount_out(&e, amount_in, reserve_in, reserve_out)
    }

    fn get_amount_in(e: Env, amount_out: u128, reserve_in: u128, reserve_out: u128) -> u128 {
        quoting::get_amount_in(&e, amount_out, reserve_in, reserve_out)
    }

    fn get_amounts_out(e: Env, amount_in: u128, path: Vec<Address>) -> Vec<u128> {
        if path.len() < 2 {
            panic_with_error!(&e, LiquidityPoolValidationError::InvalidPath);
        }
        let factory = get_factory(&e);

        let mut amounts = Vec::new(&e);
        amounts.push_back(amount_in);
        for i in 0..path.len() - 1 {
            let token_in = path.get(i).unwrap();
            let token_out = path.get(i + 1).unwrap();
            let pool = get_pool(&e, &factory, &token_in, &token_out);
            let (reserve_in, reserve_out) = get_reserves(&e, &pool, &token_in, &token_out);
            amounts.push_back(quoting::get_amount_out(
                &e,
                amounts.get(i).unwrap(),
                reserve_in,
                reserve_out,
            ));
        }
        amounts
    }

    fn get_amounts_in(e: Env, amount_out: u128, path: Vec<Address>) -> Vec<u128> {
        if path.len() < 2 {
            panic_with_error!(&e, LiquidityPoolValidationError::InvalidPath);
        }
        let factory = get_factory(&e);

        let mut amounts = Vec::new(&e);
        amounts.push_front(amount_out);
        for i in (0..path.len() - 1).rev() {
            let token_in = path.get(i).unwrap();
            let token_out = path.get(i + 1).unwrap();
            let pool = get_pool(&e, &factory, &token_in, &token_out);
            let (reserve_in, reserve_out) = get_reserves(&e, &pool, &token_in, &token_out);
            amounts.push_front(quoting::get_amount_in(
                &e,
                amounts.get(0).unwrap(),
                reserve_in,
                reserve_out,
            ));
        }
        amounts
    }

    fn add_liquidity(
        e: Env,
        account: Address,
        token_a: Address,
        token_b: Address,
        desired_a: u128,
        desired_b: u128,
        min_a: u128,
        min_b: u128,
        to: Address,
        deadline: u64,
    ) -> (u128, u128, u128) {
        check_deadline(&e, deadline);
        account.require_auth();

        let factory = get_factory(&e);
        let (sorted_a, sorted_b) = sort(&e, &token_a, &token_b);
        let factory_client = PoolFactoryClient::new(&e, &factory);
        let pool = if factory_client.has_pool(&sorted_a, &sorted_b) {
            factory_client.get_pool(&sorted_a, &sorted_b)
        } else {
            factory_client.create_pool(&sorted_a, &sorted_b)
        };

        let reserves = LiquidityPoolClient::new(&e, &pool).get_reserves();
        let (reserve_a, reserve_b) = if token_a == sorted_a {
            (reserves.get(0).unwrap(), reserves.get(1).unwrap())
        } else {
            (reserves.get(1).unwrap(), reserves.get(0).unwrap())
        };

        let (amount_a, amount_b) =
            get_deposit_amounts(&e, desired_a, desired_b, min_a, min_b, reserve_a, reserve_b);

        SorobanTokenClient::new(&e, &token_a).transfer(&account, &pool, &(amount_a as i128));
        SorobanTokenClient::new(&e, &token_b).transfer(&account, &pool, &(amount_b as i128));
        let shares = LiquidityPoolClient::new(&e, &pool).mint(&to);

        e.events().publish(
            (Symbol::new(&e, "add_liquidity"), token_a, token_b, account),
            (pool, amount_a, amount_b, shares),
        );

        (amount_a, amount_b, shares)
    }

    fn remove_liquidity(
        e: Env,
        account: Address,
        token_a: Address,
        token_b: Address,
        liquidity: u128,
        min_a: u128,
        min_b: u128,
        to: Address,
        deadline: u64,
    ) -> (u128, u128) {
        check_deadline(&e, deadline);
        account.require_auth();

        let factory = get_factory(&e);
        let pool = get_pool(&e, &factory, &token_a, &token_b);
        let (amount_a, amount_b) = remove_liquidity_inner(
            &e, &pool, &account, &token_a, &token_b, liquidity, min_a, min_b, &to,
        );

        e.events().publish(
            (Symbol::new(&e, "remove_liquidity"), token_a, token_b, account),
            (pool, liquidity, amount_a, amount_b),
        );

        (amount_a, amount_b)
    }

    fn remove_liquidity_with_permit(
        e: Env,
        account: Address,
        token_a: Address,
        token_b: Address,
        liquidity: u128,
        min_a: u128,
        min_b: u128,
        to: Address,
        deadline: u64,
        nonce: u128,
        signature: BytesN<64>,
    ) -> (u128, u128) {
        check_deadline(&e, deadline);
        account.require_auth();

        let factory = get_factory(&e);
        let pool = get_pool(&e, &factory, &token_a, &token_b);

        // one-time allowance for exactly this withdrawal
        LiquidityPoolClient::new(&e, &pool).permit(
            &account,
            &e.current_contract_address(),
            &liquidity,
            &deadline,
            &nonce,
            &signature,
        );

        let (amount_a, amount_b) = remove_liquidity_inner(
            &e, &pool, &account, &token_a, &token_b, liquidity, min_a, min_b, &to,
        );

        e.events().publish(
            (Symbol::new(&e, "remove_liquidity"), token_a, token_b, account),
            (pool, liquidity, amount_a, amount_b),
        );

        (amount_a, amount_b)
    }

    fn swap_exact_tokens_for_tokens(
        e: Env,
        account: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<u128> {
        check_deadline(&e, deadline);
        account.require_auth();

        let amounts = Self::get_amounts_out(e.clone(), amount_in, path.clone());
        if amounts.last().unwrap() < amount_out_min {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientOutputAmount);
        }

        let factory = get_factory(&e);
        let first_pool = get_pool(&e, &factory, &path.get(0).unwrap(), &path.get(1).unwrap());
        SorobanTokenClient::new(&e, &path.get(0).unwrap()).transfer(
            &account,
            &first_pool,
            &(amount_in as i128),
        );
        swap_hops(&e, &factory, &path, &amounts, &to);

        e.events().publish(
            (Symbol::new(&e, "swap"), account),
            (amount_in, amounts.last().unwrap()),
        );

        amounts
    }

    fn swap_tokens_for_exact_tokens(
        e: Env,
        account: Address,
        amount_out: u128,
        amount_in_max: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<u128> {
        check_deadline(&e, deadline);
        account.require_auth();

        let amounts = Self::get_amounts_in(e.clone(), amount_out, path.clone());
        if amounts.get(0).unwrap() > amount_in_max {
            panic_with_error!(&e, LiquidityPoolValidationError::ExcessiveInputAmount);
        }

        let factory = get_factory(&e);
        let first_pool = get_pool(&e, &factory, &path.get(0).unwrap(), &path.get(1).unwrap());
        SorobanTokenClient::new(&e, &path.get(0).unwrap()).transfer(
            &account,
            &first_pool,
            &(amounts.get(0).unwrap() as i128),
        );
        swap_hops(&e, &factory, &path, &amounts, &to);

        e.events().publish(
            (Symbol::new(&e, "swap"), account),
            (amounts.get(0).unwrap(), amount_out),
        );

        amounts
    }

    fn swap_exact_tokens_for_tokens_supporting_fee_on_transfer_tokens(
        e: Env,
        account: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> u128 {
        check_deadline(&e, deadline);
        account.require_auth();

        if path.len() < 2 {
            panic_with_error!(&e, LiquidityPoolValidationError::InvalidPath);
        }
        let factory = get_factory(&e);

        let first_pool = get_pool(&e, &factory, &path.get(0).unwrap(), &path.get(1).unwrap());
        SorobanTokenClient::new(&e, &path.get(0).unwrap()).transfer(
            &account,
            &first_pool,
            &(amount_in as i128),
        );

        let out_token_client = SorobanTokenClient::new(&e, &path.last().unwrap());
        let balance_before = out_token_client.balance(&to);

        let last_hop = path.len() - 2;
        for i in 0..path.len() - 1 {
            let token_in = path.get(i).unwrap();
            let token_out = path.get(i + 1).unwrap();
            let (token_a, _token_b) = sort(&e, &token_in, &token_out);
            let pool = get_pool(&e, &factory, &token_in, &token_out);
            let (reserve_in, reserve_out) = get_reserves(&e, &pool, &token_in, &token_out);

            // whatever actually landed on the pool is the hop input
            let balance_in = SorobanTokenClient::new(&e, &token_in).balance(&pool) as u128;
            let amount_input = balance_in - reserve_in;
            let amount_output = quoting::get_amount_out(&e, amount_input, reserve_in, reserve_out);

            let (out_a, out_b) = if token_out == token_a {
                (amount_output, 0)
            } else {
                (0, amount_output)
            };
            let recipient = if i < last_hop {
                get_pool(&e, &factory, &token_out, &path.get(i + 2).unwrap())
            } else {
                to.clone()
            };
            LiquidityPoolClient::new(&e, &pool).swap(&out_a, &out_b, &recipient);
        }

        let received = (out_token_client.balance(&to) - balance_before) as u128;
        if received < amount_out_min {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientOutputAmount);
        }

        e.events()
            .publish((Symbol::new(&e, "swap"), account), (amount_in, received));

        received
    }

    fn remove_liquidity_supporting_fee_on_transfer_tokens(
        e: Env,
        account: Address,
        token_a: Address,
        token_b: Address,
        liquidity: u128,
        min_a: u128,
        min_b: u128,
        to: Address,
        deadline: u64,
    ) -> (u128, u128) {
        check_deadline(&e, deadline);
        account.require_auth();

        let factory = get_factory(&e);
        let pool = get_pool(&e, &factory, &token_a, &token_b);

        let token_a_client = SorobanTokenClient::new(&e, &token_a);
        let token_b_client = SorobanTokenClient::new(&e, &token_b);
        let balance_a_before = token_a_client.balance(&to);
        let balance_b_before = token_b_client.balance(&to);

        withdraw_liquidity(&e, &pool, &account, liquidity, &to);

        // what the recipient can actually see is what counts
        let amount_a = (token_a_client.balance(&to) - balance_a_before) as u128;
        let amount_b = (token_b_client.balance(&to) - balance_b_before) as u128;
        if amount_a < min_a {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientAAmount);
        }
        if amount_b < min_b {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientBAmount);
        }

        e.events().publish(
            (Symbol::new(&e, "remove_liquidity"), token_a, token_b, account),
            (pool, liquidity, amount_a, amount_b),
        );

        (amount_a, amount_b)
    }

    fn remove_liquidity_with_permit_supporting_fee_on_transfer_tokens(
        e: Env,
        account: Address,
        token_a: Address,
        token_b: Address,
        liquidity: u128,
        min_a: u128,
        min_b: u128,
        to: Address,
        deadline: u64,
        nonce: u128,
        signature: BytesN<64>,
    ) -> (u128, u128) {
        check_deadline(&e, deadline);
        account.require_auth();

        let factory = get_factory(&e);
        let pool = get_pool(&e, &factory, &token_a, &token_b);
        LiquidityPoolClient::new(&e, &pool).permit(
            &account,
            &e.current_contract_address(),
            &liquidity,
            &deadline,
            &nonce,
            &signature,
        );

        Self::remove_liquidity_supporting_fee_on_transfer_tokens(
            e, account, token_a, token_b, liquidity, min_a, min_b, to, deadline,
        )
    }
}

#[contractimpl]
impl RouterAdminInterface for LiquidityPoolRouter {
    fn init_admin(e: Env, account: Address) {
        if !has_admin(&e) {
            set_admin(&e, &account)
        }
    }

    fn set_factory(e: Env, factory: Address) {
        require_admin(&e);
        set_factory(&e, &factory);
    }

    fn get_factory(e: Env) -> Address {
        get_factory(&e)
    }
}

#[contractimpl]
impl UpgradeableContract for LiquidityPoolRouter {
    fn version() -> u32 {
        100
    }

    fn upgrade(e: Env, new_wasm_hash: BytesN<32>) {
        require_admin(&e);
        e.deployer().update_current_contract_wasm(new_wasm_hash);
    }
}
