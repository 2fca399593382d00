use soroban_sdk::{contractclient, Address, BytesN, Env, Vec};

// Client view of the pair contract, limited to what the router drives.
#[contractclient(name = "LiquidityPoolClient")]
pub trait LiquidityPoolInterface {
    fn get_reserves(e: Env) -> Vec<u128>;

    fn mint(e: Env, to: Address) -> u128;

    fn burn(e: Env, to: Address) -> (u128, u128);

    fn swap(e: Env, out_a: u128, out_b: u128, to: Address);

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: u128);

    fn permit(
        e: Env,
        owner: Address,
        spender: Address,
        value: u128,
        deadline: u64,
        nonce: u128,
        signature: BytesN<64>,
    );
}

// The pool registry capability. Injected at initialization so the core
// stays testable against an in-memory fake.
#[contractclient(name = "PoolFactoryClient")]
pub trait PoolFactoryInterface {
    fn has_pool(e: Env, token_a: Address, token_b: Address) -> bool;

    fn get_pool(e: Env, token_a: Address, token_b: Address) -> Address;

    fn create_pool(e: Env, token_a: Address, token_b: Address) -> Address;
}
