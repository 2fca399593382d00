//! Internal ledger for pool shares. The pair is its own share token:
//! balances live in persistent storage, allowances in temporary storage
//! with an expiration ledger, total supply in instance storage.
use crate::errors::LiquidityPoolError;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::{bump_instance, bump_persistent};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    ShareBalance(Address),
    TotalShares,
    ShareAllowance(AllowanceDataKey),
}

#[derive(Clone)]
#[contracttype]
struct AllowanceDataKey {
    from: Address,
    spender: Address,
}

#[derive(Clone, Default)]
#[contracttype]
pub struct AllowanceValue {
    pub amount: u128,
    pub expiration_ledger: u32,
}

pub fn get_total_shares(e: &Env) -> u128 {
    bump_instance(e);
    e.storage().instance().get(&DataKey::TotalShares).unwrap_or(0)
}

fn put_total_shares(e: &Env, value: u128) {
    bump_instance(e);
    e.storage().instance().set(&DataKey::TotalShares, &value)
}

pub fn get_user_balance_shares(e: &Env, user: &Address) -> u128 {
    let key = DataKey::ShareBalance(user.clone());
    match e.storage().persistent().get::<DataKey, u128>(&key) {
        Some(balance) => {
            bump_persistent(e, &key);
            balance
        }
        None => 0,
    }
}

fn write_balance_shares(e: &Env, user: &Address, amount: u128) {
    let key = DataKey::ShareBalance(user.clone());
    e.storage().persistent().set(&key, &amount);
    bump_persistent(e, &key);
}

pub fn receive_shares(e: &Env, user: &Address, amount: u128) {
    let balance = get_user_balance_shares(e, user);
    write_balance_shares(e, user, balance + amount);
}

pub fn spend_shares(e: &Env, user: &Address, amount: u128) {
    let balance = get_user_balance_shares(e, user);
    if balance < amount {
        panic_with_error!(e, LiquidityPoolError::InsufficientBalance);
    }
    write_balance_shares(e, user, balance - amount);
}

pub fn mint_shares(e: &Env, to: &Address, amount: u128) {
    put_total_shares(e, get_total_shares(e) + amount);
    receive_shares(e, to, amount);
}

pub fn burn_shares(e: &Env, from: &Address, amount: u128) {
    spend_shares(e, from, amount);
    put_total_shares(e, get_total_shares(e) - amount);
}

pub fn read_allowance(e: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::ShareAllowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    match e.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger < e.ledger().sequence() => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        Some(allowance) => allowance,
        None => AllowanceValue::default(),
    }
}

pub fn write_allowance(
    e: &Env,
    from: &Address,
    spender: &Address,
    amount: u128,
    expiration_ledger: u32,
) {
    if amount > 0 && expiration_ledger < e.ledger().sequence() {
        panic_with_error!(e, LiquidityPoolError::PastTimeNotAllowed);
    }

    let key = DataKey::ShareAllowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    e.storage().temporary().set(
        &key,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );

    if amount > 0 {
        let live_for = expiration_ledger - e.ledger().sequence();
        e.storage().temporary().extend_ttl(&key, live_for, live_for)
    }
}

pub fn spend_allowance(e: &Env, from: &Address, spender: &Address, amount: u128) {
    let allowance = read_allowance(e, from, spender);
    if allowance.amount < amount {
        panic_with_error!(e, LiquidityPoolError::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(
            e,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        );
    }
}
