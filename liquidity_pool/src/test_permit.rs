#![cfg(test)]
extern crate std;

use crate::permit::permit_payload;
use crate::test::Setup;
use ed25519_dalek::{Signer, SigningKey};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, BytesN, Env};
use utils::test_utils::jump;

fn permit_keypair(e: &Env, seed: u8) -> (SigningKey, BytesN<32>) {
    let signing_key = SigningKey::from_bytes(&[seed; 32]);
    let public_key = BytesN::from_array(e, &signing_key.verifying_key().to_bytes());
    (signing_key, public_key)
}

fn sign_permit(
    e: &Env,
    signing_key: &SigningKey,
    pool: &Address,
    owner: &Address,
    spender: &Address,
    value: u128,
    nonce: u128,
    deadline: u64,
) -> BytesN<64> {
    let payload = permit_payload(e, pool, owner, spender, value, nonce, deadline);
    let message: std::vec::Vec<u8> = payload.iter().collect();
    BytesN::from_array(e, &signing_key.sign(&message).to_bytes())
}

#[test]
fn test_permit_grants_one_time_allowance() {
    let setup = Setup::default();
    let e = &setup.e;
    let spender = Address::generate(e);

    let (signing_key, public_key) = permit_keypair(e, 7);
    setup.pool.set_permit_key(&setup.user, &public_key);
    assert_eq!(setup.pool.nonces(&setup.user), 0);

    let deadline = e.ledger().timestamp() + 100;
    let signature = sign_permit(
        e,
        &signing_key,
        &setup.pool.address,
        &setup.user,
        &spender,
        500,
        0,
        deadline,
    );
    setup
        .pool
        .permit(&setup.user, &spender, &500, &deadline, &0, &signature);

    assert_eq!(setup.pool.allowance(&setup.user, &spender), 500);
    assert_eq!(setup.pool.nonces(&setup.user), 1);
}

#[test]
fn test_permit_allowance_is_spendable() {
    let setup = Setup::default();
    let e = &setup.e;
    let spender = Address::generate(e);
    let shares = setup.deposit(1_000_000, 1_000_000);
    assert!(shares > 500);

    let (signing_key, public_key) = permit_keypair(e, 7);
    setup.pool.set_permit_key(&setup.user, &public_key);

    let deadline = e.ledger().timestamp() + 100;
    let signature = sign_permit(
        e,
        &signing_key,
        &setup.pool.address,
        &setup.user,
        &spender,
        500,
        0,
        deadline,
    );
    setup
        .pool
        .permit(&setup.user, &spender, &500, &deadline, &0, &signature);

    let other = Address::generate(e);
    setup
        .pool
        .transfer_from(&spender, &setup.user, &other, &500);
    assert_eq!(setup.pool.share_balance(&other), 500);
    assert_eq!(setup.pool.allowance(&setup.user, &spender), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #2010)")]
fn test_permit_replay_rejected() {
    let setup = Setup::default();
    let e = &setup.e;
    let spender = Address::generate(e);

    let (signing_key, public_key) = permit_keypair(e, 7);
    setup.pool.set_permit_key(&setup.user, &public_key);

    let deadline = e.ledger().timestamp() + 100;
    let signature = sign_permit(
        e,
        &signing_key,
        &setup.pool.address,
        &setup.user,
        &spender,
        500,
        0,
        deadline,
    );
    setup
        .pool
        .permit(&setup.user, &spender, &500, &deadline, &0, &signature);

    // the nonce has advanced, the very same signature is dead
    setup
        .pool
        .permit(&setup.user, &spender, &500, &deadline, &0, &signature);
}

#[test]
#[should_panic(expected = "Error(Contract, #2010)")]
fn test_permit_wrong_nonce() {
    let setup = Setup::default();
    let e = &setup.e;
    let spender = Address::generate(e);

    let (signing_key, public_key) = permit_keypair(e, 7);
    setup.pool.set_permit_key(&setup.user, &public_key);

    let deadline = e.ledger().timestamp() + 100;
    let signature = sign_permit(
        e,
        &signing_key,
        &setup.pool.address,
        &setup.user,
        &spender,
        500,
        5,
        deadline,
    );
    setup
        .pool
        .permit(&setup.user, &spender, &500, &deadline, &5, &signature);
}

#[test]
#[should_panic(expected = "Error(Contract, #2009)")]
fn test_permit_expired() {
    let setup = Setup::default();
    let e = &setup.e;
    let spender = Address::generate(e);

    let (signing_key, public_key) = permit_keypair(e, 7);
    setup.pool.set_permit_key(&setup.user, &public_key);

    let deadline = e.ledger().timestamp() + 100;
    let signature = sign_permit(
        e,
        &signing_key,
        &setup.pool.address,
        &setup.user,
        &spender,
        500,
        0,
        deadline,
    );
    jump(e, 200);
    setup
        .pool
        .permit(&setup.user, &spender, &500, &deadline, &0, &signature);
}

#[test]
#[should_panic(expected = "Error(Contract, #2009)")]
fn test_permit_deadline_boundary_is_rejected() {
    let setup = Setup::default();
    let e = &setup.e;
    let spender = Address::generate(e);

    let (signing_key, public_key) = permit_keypair(e, 7);
    setup.pool.set_permit_key(&setup.user, &public_key);

    jump(e, 100);
    // execution exactly at the deadline is already too late
    let deadline = e.ledger().timestamp();
    let signature = sign_permit(
        e,
        &signing_key,
        &setup.pool.address,
        &setup.user,
        &spender,
        500,
        0,
        deadline,
    );
    setup
        .pool
        .permit(&setup.user, &spender, &500, &deadline, &0, &signature);
}

#[test]
#[should_panic(expected = "Error(Crypto")]
fn test_permit_foreign_signature_rejected() {
    let setup = Setup::default();
    let e = &setup.e;
    let spender = Address::generate(e);

    let (_, public_key) = permit_keypair(e, 7);
    let (foreign_key, _) = permit_keypair(e, 9);
    setup.pool.set_permit_key(&setup.user, &public_key);

    let deadline = e.ledger().timestamp() + 100;
    let signature = sign_permit(
        e,
        &foreign_key,
        &setup.pool.address,
        &setup.user,
        &spender,
        500,
        0,
        deadline,
    );
    setup
        .pool
        .permit(&setup.user, &spender, &500, &deadline, &0, &signature);
}

#[test]
#[should_panic(expected = "Error(Contract, #209)")]
fn test_permit_without_bound_key() {
    let setup = Setup::default();
    let e = &setup.e;
    let spender = Address::generate(e);

    let (signing_key, _) = permit_keypair(e, 7);
    let deadline = e.ledger().timestamp() + 100;
    let signature = sign_permit(
        e,
        &signing_key,
        &setup.pool.address,
        &setup.user,
        &spender,
        500,
        0,
        deadline,
    );
    setup
        .pool
        .permit(&setup.user, &spender, &500, &deadline, &0, &signature);
}

#[test]
#[should_panic(expected = "Error(Crypto")]
fn test_permit_tampered_value_rejected() {
    let setup = Setup::default();
    let e = &setup.e;
    let spender = Address::generate(e);

    let (signing_key, public_key) = permit_keypair(e, 7);
    setup.pool.set_permit_key(&setup.user, &public_key);

    let deadline = e.ledger().timestamp() + 100;
    let signature = sign_permit(
        e,
        &signing_key,
        &setup.pool.address,
        &setup.user,
        &spender,
        500,
        0,
        deadline,
    );
    // signed for 500, presented for 5000
    setup
        .pool
        .permit(&setup.user, &spender, &5000, &deadline, &0, &signature);
}
