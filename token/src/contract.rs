//! Soroban token with an optional burn-on-transfer fee. With a zero fee the
//! contract behaves as a plain standard token; with a non-zero fee every
//! transfer delivers `amount - fee` and burns the fee from the total
//! balance, which is how deflationary assets misreport delivered value.
use crate::admin::{get_admin, has_admin, set_admin};
use crate::allowance::{read_allowance, spend_allowance, write_allowance};
use crate::balance::{
    decrease_total_balance, increase_total_balance, read_balance, read_total_balance,
    receive_balance, spend_balance, write_total_balance,
};
use crate::errors::TokenError;
use crate::metadata::{read_decimal, read_name, read_symbol, write_metadata};
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::token::{self, Interface as _};
use soroban_sdk::{
    contract, contractimpl, contracttype, panic_with_error, Address, Env, String,
};
use soroban_token_sdk::metadata::TokenMetadata;
use soroban_token_sdk::TokenUtils;
use utils::bump::bump_instance;

// 0.01% = 1; 1% = 100
pub(crate) const FEE_MULTIPLIER: u128 = 10_000;

#[derive(Clone)]
#[contracttype]
enum DataKey {
    TransferFee,
}

fn check_nonnegative_amount(e: &Env, amount: i128) {
    if amount < 0 {
        panic_with_error!(e, TokenError::NegativeNotAllowed);
    }
}

fn read_transfer_fee(e: &Env) -> u32 {
    bump_instance(e);
    e.storage().instance().get(&DataKey::TransferFee).unwrap_or(0)
}

fn write_transfer_fee(e: &Env, value: u32) {
    bump_instance(e);
    e.storage().instance().set(&DataKey::TransferFee, &value)
}

// Moves `amount` out of `from`, delivers `amount - fee` to `to` and burns
// the fee. Returns the delivered amount.
fn transfer_balance(e: &Env, from: &Address, to: &Address, amount: i128) -> i128 {
    spend_balance(e, from.clone(), amount);

    let fee_fraction = read_transfer_fee(e) as u128;
    let fee = (amount as u128).fixed_mul_floor(e, &fee_fraction, &FEE_MULTIPLIER) as i128;
    let delivered = amount - fee;

    receive_balance(e, to.clone(), delivered);
    if fee > 0 {
        decrease_total_balance(e, fee);
        TokenUtils::new(e).events().burn(from.clone(), fee);
    }
    TokenUtils::new(e)
        .events()
        .transfer(from.clone(), to.clone(), delivered);
    delivered
}

#[contract]
pub struct Token;

#[contractimpl]
impl Token {
    pub fn initialize(
        e: Env,
        admin: Address,
        decimal: u32,
        name: String,
        symbol: String,
        transfer_fee: u32,
    ) {
        if has_admin(&e) {
            panic_with_error!(&e, TokenError::AlreadyInitialized);
        }
        set_admin(&e, &admin);
        if decimal > u8::MAX.into() {
            panic_with_error!(&e, TokenError::DecimalTooLarge);
        }
        if transfer_fee as u128 >= FEE_MULTIPLIER {
            panic_with_error!(&e, TokenError::FeeOutOfBounds);
        }
        write_transfer_fee(&e, transfer_fee);
        write_total_balance(&e, 0);

        write_metadata(
            &e,
            TokenMetadata {
                decimal,
                name,
                symbol,
            },
        )
    }

    pub fn mint(e: Env, to: Address, amount: i128) {
        check_nonnegative_amount(&e, amount);
        let admin = get_admin(&e);
        admin.require_auth();

        bump_instance(&e);

        receive_balance(&e, to.clone(), amount);
        increase_total_balance(&e, amount);
        TokenUtils::new(&e).events().mint(admin, to, amount);
    }

    pub fn transfer_fee(e: Env) -> u32 {
        read_transfer_fee(&e)
    }

    pub fn total_balance(e: Env) -> i128 {
        read_total_balance(&e)
    }
}

#[contractimpl]
impl token::Interface for Token {
    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        bump_instance(&e);
        read_allowance(&e, from, spender).amount
    }

    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();

        check_nonnegative_amount(&e, amount);

        bump_instance(&e);

        write_allowance(&e, from.clone(), spender.clone(), amount, expiration_ledger);
        TokenUtils::new(&e)
            .events()
            .approve(from, spender, amount, expiration_ledger);
    }

    fn balance(e: Env, id: Address) -> i128 {
        bump_instance(&e);
        read_balance(&e, id)
    }

    fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        check_nonnegative_amount(&e, amount);

        bump_instance(&e);

        transfer_balance(&e, &from, &to, amount);
    }

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();

        check_nonnegative_amount(&e, amount);

        bump_instance(&e);

        spend_allowance(&e, from.clone(), spender, amount);
        transfer_balance(&e, &from, &to, amount);
    }

    fn burn(e: Env, from: Address, amount: i128) {
        from.require_auth();

        check_nonnegative_amount(&e, amount);

        bump_instance(&e);

        spend_balance(&e, from.clone(), amount);
        decrease_total_balance(&e, amount);
        TokenUtils::new(&e).events().burn(from, amount);
    }

    fn burn_from(e: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();

        check_nonnegative_amount(&e, amount);

        bump_instance(&e);

        spend_allowance(&e, from.clone(), spender, amount);
        spend_balance(&e, from.clone(), amount);
        decrease_total_balance(&e, amount);
        TokenUtils::new(&e).events().burn(from, amount)
    }

    fn decimals(e: Env) -> u32 {
        read_decimal(&e)
    }

    fn name(e: Env) -> String {
        read_name(&e)
    }

    fn symbol(e: Env) -> String {
        read_symbol(&e)
    }
}
