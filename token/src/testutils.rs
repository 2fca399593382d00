#![cfg(any(test, feature = "testutils"))]

use crate::TokenClient;
use soroban_sdk::{Address, Env, IntoVal};

pub fn create_token<'a>(e: &Env, admin: &Address, transfer_fee: u32) -> TokenClient<'a> {
    let token = TokenClient::new(e, &e.register(crate::contract::Token {}, ()));
    token.initialize(
        admin,
        &7,
        &"Test Token".into_val(e),
        &"TEST".into_val(e),
        &transfer_fee,
    );
    token
}
