use crate::constants::{FEE_MULTIPLIER, MINIMUM_LIQUIDITY, PERMIT_ALLOWANCE_LEDGERS};
use crate::errors::LiquidityPoolError;
use crate::permit::{get_nonce, get_permit_key, permit_payload, put_nonce, put_permit_key};
use crate::pool_interface::{LiquidityPoolTrait, PermitTrait, ShareTokenTrait};
use crate::share::{
    burn_shares, get_total_shares, get_user_balance_shares, mint_shares, read_allowance,
    receive_shares, spend_allowance, spend_shares, write_allowance,
};
use crate::storage::{
    get_fee_fraction, get_reserve_a, get_reserve_b, get_token_a, get_token_b, has_tokens,
    put_fee_fraction, put_reserve_a, put_reserve_b, put_token_a, put_token_b,
};
use crate::token::{get_balance_a, get_balance_b, transfer_a, transfer_b};
use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{
    contract, contractimpl, contractmeta, panic_with_error, symbol_short, Address, BytesN, Env,
    Vec, U256,
};
use utils::u256_math::ExtraMath;

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Constant product pair with permit-capable share ledger"
);

#[contract]
pub struct LiquidityPool;

#[contractimpl]
impl LiquidityPoolTrait for LiquidityPool {
    fn initialize(e: Env, tokens: Vec<Address>, fee_fraction: u32) {
        if has_tokens(&e) {
            panic_with_error!(&e, LiquidityPoolError::AlreadyInitialized);
        }

        if tokens.len() != 2 {
            panic_with_error!(&e, LiquidityPoolValidationError::WrongInputVecSize);
        }

        let token_a = tokens.get(0).unwrap();
        let token_b = tokens.get(1).unwrap();

        // the pair is addressed by the sorted tuple, reserves inherit the order
        if token_a >= token_b {
            panic_with_error!(&e, LiquidityPoolError::TokensNotSorted);
        }

        if fee_fraction as u128 >= FEE_MULTIPLIER {
            panic_with_error!(&e, LiquidityPoolValidationError::FeeOutOfBounds);
        }
        put_fee_fraction(&e, fee_fraction);

        put_token_a(&e, token_a);
        put_token_b(&e, token_b);
        put_reserve_a(&e, 0);
        put_reserve_b(&e, 0);
    }

    fn get_tokens(e: Env) -> Vec<Address> {
        Vec::from_array(&e, [get_token_a(&e), get_token_b(&e)])
    }

    fn get_reserves(e: Env) -> Vec<u128> {
        Vec::from_array(&e, [get_reserve_a(&e), get_reserve_b(&e)])
    }

    fn get_fee_fraction(e: Env) -> u32 {
        // 0.01% = 1; 1% = 100; 0.3% = 30
        get_fee_fraction(&e)
    }

    fn get_total_shares(e: Env) -> u128 {
        get_total_shares(&e)
    }

    fn mint(e: Env, to: Address) -> u128 {
        let (reserve_a, reserve_b) = (get_reserve_a(&e), get_reserve_b(&e));
        let (balance_a, balance_b) = (get_balance_a(&e), get_balance_b(&e));

        // whatever arrived above the booked reserves is the deposit. Tokens
        // that deduct a fee in transit are accounted at their delivered
        // value automatically.
        let amount_a = balance_a - reserve_a;
        let amount_b = balance_b - reserve_b;

        let total_shares = get_total_shares(&e);
        let shares = if total_shares == 0 {
            // product of two u128 values, its square root fits back into u128
            let initial = U256::from_u128(&e, amount_a)
                .mul(&U256::from_u128(&e, amount_b))
                .sqrt()
                .to_u128()
                .unwrap();
            if initial <= MINIMUM_LIQUIDITY {
                panic_with_error!(&e, LiquidityPoolError::InsufficientLiquidityMinted);
            }
            // locked forever: the supply can never return to zero
            mint_shares(&e, &e.current_contract_address(), MINIMUM_LIQUIDITY);
            initial - MINIMUM_LIQUIDITY
        } else {
            let shares_a = amount_a.fixed_mul_floor(&e, &total_shares, &reserve_a);
            let shares_b = amount_b.fixed_mul_floor(&e, &total_shares, &reserve_b);
            shares_a.min(shares_b)
        };

        if shares == 0 {
            panic_with_error!(&e, LiquidityPoolError::InsufficientLiquidityMinted);
        }
        mint_shares(&e, &to, shares);
        put_reserve_a(&e, balance_a);
        put_reserve_b(&e, balance_b);

        e.events().publish(
            (symbol_short!("deposit"), to),
            (amount_a, amount_b, shares),
        );

        shares
    }

    fn burn(e: Env, to: Address) -> (u128, u128) {
        let total_shares = get_total_shares(&e);
        if total_shares == 0 {
            panic_with_error!(&e, LiquidityPoolError::InsufficientLiquidityBurned);
        }

        // shares transferred onto the pool address are the ones to burn;
        // the locked minimum stays behind
        let liquidity =
            get_user_balance_shares(&e, &e.current_contract_address()) - MINIMUM_LIQUIDITY;
        if liquidity == 0 {
            panic_with_error!(&e, LiquidityPoolError::InsufficientLiquidityBurned);
        }

        let (balance_a, balance_b) = (get_balance_a(&e), get_balance_b(&e));
        let amount_a = balance_a.fixed_mul_floor(&e, &liquidity, &total_shares);
        let amount_b = balance_b.fixed_mul_floor(&e, &liquidity, &total_shares);
        if amount_a == 0 || amount_b == 0 {
            panic_with_error!(&e, LiquidityPoolError::InsufficientLiquidityBurned);
        }

        burn_shares(&e, &e.current_contract_address(), liquidity);
        transfer_a(&e, &to, amount_a);
        transfer_b(&e, &to, amount_b);
        put_reserve_a(&e, balance_a - amount_a);
        put_reserve_b(&e, balance_b - amount_b);

        e.events().publish(
            (symbol_short!("withdraw"), to),
            (liquidity, amount_a, amount_b),
        );

        (amount_a, amount_b)
    }

    fn swap(e: Env, out_a: u128, out_b: u128, to: Address) {
        if out_a == 0 && out_b == 0 {
            panic_with_error!(&e, LiquidityPoolValidationError::ZeroAmount);
        }

        let (reserve_a, reserve_b) = (get_reserve_a(&e), get_reserve_b(&e));
        if out_a >= reserve_a || out_b >= reserve_b {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientLiquidity);
        }

        let (balance_a, balance_b) = (get_balance_a(&e), get_balance_b(&e));
        let in_a = balance_a - reserve_a;
        let in_b = balance_b - reserve_b;
        if in_a == 0 && in_b == 0 {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientInputAmount);
        }

        let new_balance_a = balance_a - out_a;
        let new_balance_b = balance_b - out_b;

        // invariant on fee-adjusted balances, scaled up by FEE_MULTIPLIER
        // to avoid fractions: (bal*M - in*fee) products must not shrink k
        let fee_fraction = get_fee_fraction(&e) as u128;
        let multiplier = U256::from_u128(&e, FEE_MULTIPLIER);
        let adjusted = |new_balance: u128, in_amount: u128| {
            U256::from_u128(&e, new_balance)
                .mul(&multiplier)
                .sub(&U256::from_u128(&e, in_amount).mul(&U256::from_u128(&e, fee_fraction)))
        };

        let adjusted_a = adjusted(new_balance_a, in_a);
        let adjusted_b = adjusted(new_balance_b, in_b);
        let old_invariant = U256::from_u128(&e, reserve_a)
            .mul(&U256::from_u128(&e, reserve_b))
            .mul(&multiplier)
            .mul(&multiplier);

        if adjusted_a.mul(&adjusted_b) < old_invariant {
            panic_with_error!(&e, LiquidityPoolError::InvariantDoesNotHold);
        }

        if out_a > 0 {
            transfer_a(&e, &to, out_a);
        }
        if out_b > 0 {
            transfer_b(&e, &to, out_b);
        }
        put_reserve_a(&e, new_balance_a);
        put_reserve_b(&e, new_balance_b);

        e.events()
            .publish((symbol_short!("trade"), to), (in_a, in_b, out_a, out_b));
    }
}

#[contractimpl]
impl ShareTokenTrait for LiquidityPool {
    fn share_balance(e: Env, user: Address) -> u128 {
        get_user_balance_shares(&e, &user)
    }

    fn allowance(e: Env, from: Address, spender: Address) -> u128 {
        read_allowance(&e, &from, &spender).amount
    }

    fn approve(e: Env, from: Address, spender: Address, amount: u128, expiration_ledger: u32) {
        from.require_auth();

        write_allowance(&e, &from, &spender, amount, expiration_ledger);
        e.events().publish(
            (symbol_short!("approve"), from, spender),
            (amount, expiration_ledger),
        );
    }

    fn transfer(e: Env, from: Address, to: Address, amount: u128) {
        from.require_auth();

        spend_shares(&e, &from, amount);
        receive_shares(&e, &to, amount);
        e.events()
            .publish((symbol_short!("transfer"), from, to), amount);
    }

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: u128) {
        spender.require_auth();

        spend_allowance(&e, &from, &spender, amount);
        spend_shares(&e, &from, amount);
        receive_shares(&e, &to, amount);
        e.events()
            .publish((symbol_short!("transfer"), from, to), amount);
    }
}

#[contractimpl]
impl PermitTrait for LiquidityPool {
    fn set_permit_key(e: Env, owner: Address, public_key: BytesN<32>) {
        owner.require_auth();
        put_permit_key(&e, &owner, &public_key);
    }

    fn nonces(e: Env, owner: Address) -> u128 {
        get_nonce(&e, &owner)
    }

    fn permit(
        e: Env,
        owner: Address,
        spender: Address,
        value: u128,
        deadline: u64,
        nonce: u128,
        signature: BytesN<64>,
    ) {
        if e.ledger().timestamp() >= deadline {
            panic_with_error!(&e, LiquidityPoolValidationError::Expired);
        }

        let current_nonce = get_nonce(&e, &owner);
        if nonce != current_nonce {
            panic_with_error!(&e, LiquidityPoolValidationError::InvalidSignature);
        }

        let public_key = get_permit_key(&e, &owner);
        let payload = permit_payload(
            &e,
            &e.current_contract_address(),
            &owner,
            &spender,
            value,
            nonce,
            deadline,
        );
        // aborts the invocation when the signature does not match the key
        e.crypto().ed25519_verify(&public_key, &payload, &signature);

        // consumed in the same invocation as the verification: the exact
        // same signature can never be accepted twice
        put_nonce(&e, &owner, current_nonce + 1);
        write_allowance(
            &e,
            &owner,
            &spender,
            value,
            e.ledger().sequence() + PERMIT_ALLOWANCE_LEDGERS,
        );

        e.events()
            .publish((symbol_short!("permit"), owner, spender), (value, nonce));
    }
}
