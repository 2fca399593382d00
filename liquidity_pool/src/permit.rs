//! Signature-based share approvals. An owner binds an ed25519 key once,
//! then detached signatures over (pool, owner, spender, value, nonce,
//! deadline) grant one-time allowances without an on-ledger authorization.
//! The nonce check and its increment happen in the same invocation, so a
//! consumed signature can never be replayed.
use crate::errors::LiquidityPoolError;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{contracttype, panic_with_error, Address, Bytes, BytesN, Env};
use utils::bump::bump_persistent;

#[derive(Clone)]
#[contracttype]
enum DataKey {
    PermitNonce(Address),
    PermitKey(Address),
}

pub fn get_nonce(e: &Env, owner: &Address) -> u128 {
    let key = DataKey::PermitNonce(owner.clone());
    match e.storage().persistent().get::<DataKey, u128>(&key) {
        Some(value) => {
            bump_persistent(e, &key);
            value
        }
        None => 0,
    }
}

pub fn put_nonce(e: &Env, owner: &Address, value: u128) {
    let key = DataKey::PermitNonce(owner.clone());
    e.storage().persistent().set(&key, &value);
    bump_persistent(e, &key);
}

pub fn get_permit_key(e: &Env, owner: &Address) -> BytesN<32> {
    let key = DataKey::PermitKey(owner.clone());
    match e.storage().persistent().get::<DataKey, BytesN<32>>(&key) {
        Some(value) => {
            bump_persistent(e, &key);
            value
        }
        None => panic_with_error!(e, LiquidityPoolError::PermitKeyNotSet),
    }
}

pub fn put_permit_key(e: &Env, owner: &Address, public_key: &BytesN<32>) {
    let key = DataKey::PermitKey(owner.clone());
    e.storage().persistent().set(&key, public_key);
    bump_persistent(e, &key);
}

// The signed message. Serialized with the contract address first so a
// signature for one pool can never authorize a spend on another.
pub fn permit_payload(
    e: &Env,
    pool: &Address,
    owner: &Address,
    spender: &Address,
    value: u128,
    nonce: u128,
    deadline: u64,
) -> Bytes {
    let mut payload = Bytes::new(e);
    payload.append(&pool.clone().to_xdr(e));
    payload.append(&owner.clone().to_xdr(e));
    payload.append(&spender.clone().to_xdr(e));
    payload.append(&value.to_xdr(e));
    payload.append(&nonce.to_xdr(e));
    payload.append(&deadline.to_xdr(e));
    payload
}
