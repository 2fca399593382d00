use crate::storage::{get_token_a, get_token_b};
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{Address, Env};

pub fn get_balance(e: &Env, contract: &Address) -> u128 {
    SorobanTokenClient::new(e, contract).balance(&e.current_contract_address()) as u128
}

pub fn get_balance_a(e: &Env) -> u128 {
    get_balance(e, &get_token_a(e))
}

pub fn get_balance_b(e: &Env) -> u128 {
    get_balance(e, &get_token_b(e))
}

fn transfer(e: &Env, contract: &Address, to: &Address, amount: u128) {
    SorobanTokenClient::new(e, contract).transfer(
        &e.current_contract_address(),
        to,
        &(amount as i128),
    );
}

pub fn transfer_a(e: &Env, to: &Address, amount: u128) {
    transfer(e, &get_token_a(e), to, amount);
}

pub fn transfer_b(e: &Env, to: &Address, amount: u128) {
    transfer(e, &get_token_b(e), to, amount);
}
