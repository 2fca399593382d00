use soroban_sdk::{Address, BytesN, Env, Vec};

pub trait LiquidityPoolTrait {
    // Sets up the pool for a strictly ascending pair of tokens. One-shot.
    fn initialize(e: Env, tokens: Vec<Address>, fee_fraction: u32);

    fn get_tokens(e: Env) -> Vec<Address>;

    // Booked reserves, in token order. May lag the actual balances until
    // the next mint/burn/swap folds transfers in.
    fn get_reserves(e: Env) -> Vec<u128>;

    fn get_fee_fraction(e: Env) -> u32;

    fn get_total_shares(e: Env) -> u128;

    // Mints shares for whatever was transferred in above the booked
    // reserves. Returns the amount of shares minted.
    fn mint(e: Env, to: Address) -> u128;

    // Burns the shares previously transferred onto the pool address and
    // pays out the pro-rata amounts to `to`.
    fn burn(e: Env, to: Address) -> (u128, u128);

    // Sends out the requested amounts provided the fee-adjusted constant
    // product invariant still holds against what was transferred in.
    fn swap(e: Env, out_a: u128, out_b: u128, to: Address);
}

pub trait ShareTokenTrait {
    fn share_balance(e: Env, user: Address) -> u128;

    fn allowance(e: Env, from: Address, spender: Address) -> u128;

    fn approve(e: Env, from: Address, spender: Address, amount: u128, expiration_ledger: u32);

    fn transfer(e: Env, from: Address, to: Address, amount: u128);

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: u128);
}

pub trait PermitTrait {
    // Binds the ed25519 key future permits for `owner` are verified
    // against. Requires the owner's authorization.
    fn set_permit_key(e: Env, owner: Address, public_key: BytesN<32>);

    // Next expected permit nonce for the owner. Starts at 0, advances by
    // exactly 1 per verified permit.
    fn nonces(e: Env, owner: Address) -> u128;

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
