//! Pure conversions between reserve ratios and swap amounts. No state, no
//! token movement; everything is integer math with U256 intermediates so
//! products never truncate before the final division.
use crate::constants::{FEE_FRACTION, FEE_MULTIPLIER};
use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, Env, U256};
use utils::math_errors::MathError;

// Proportional-deposit quoting: the equivalent amount of B for a given
// amount of A at the current reserve ratio. No fee involved.
pub fn quote(e: &Env, amount_a: u128, reserve_a: u128, reserve_b: u128) -> u128 {
    if amount_a == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientAmount);
    }
    if reserve_a == 0 || reserve_b == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientLiquidity);
    }
    amount_a.fixed_mul_floor(e, &reserve_b, &reserve_a)
}

// Maximum output for an exact input, fee taken on the input side. Rounds
// down: the pool is always favored.
pub fn get_amount_out(e: &Env, amount_in: u128, reserve_in: u128, reserve_out: u128) -> u128 {
    if amount_in == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientInputAmount);
    }
    if reserve_in == 0 || reserve_out == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientLiquidity);
    }

    let multiplier_with_fee = FEE_MULTIPLIER - FEE_FRACTION;
    let amount_in_with_fee =
        U256::from_u128(e, amount_in).mul(&U256::from_u128(e, multiplier_with_fee));
    let numerator = amount_in_with_fee.mul(&U256::from_u128(e, reserve_out));
    let denominator = U256::from_u128(e, reserve_in)
        .mul(&U256::from_u128(e, FEE_MULTIPLIER))
        .add(&amount_in_with_fee);

    match numerator.div(&denominator).to_u128() {
        Some(v) => v,
        None => panic_with_error!(e, MathError::NumberOverflow),
    }
}

// Required input for an exact output. Rounds the result up so the pool can
// never be underpaid by one stroopy of truncation.
pub fn get_amount_in(e: &Env, amount_out: u128, reserve_in: u128, reserve_out: u128) -> u128 {
    if amount_out == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientOutputAmount);
    }
    if reserve_in == 0 || reserve_out == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientLiquidity);
    }
    // draining the whole reserve is unpriceable, reject before the
    // denominator hits zero
    if amount_out >= reserve_out {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientLiquidity);
    }

    let numerator = U256::from_u128(e, reserve_in)
        .mul(&U256::from_u128(e, amount_out))
        .mul(&U256::from_u128(e, FEE_MULTIPLIER));
    let denominator = U256::from_u128(e, reserve_out - amount_out)
        .mul(&U256::from_u128(e, FEE_MULTIPLIER - FEE_FRACTION));

    match numerator.div(&denominator).to_u128() {
        Some(v) => v + 1,
        None => panic_with_error!(e, MathError::NumberOverflow),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn quote_matches_reserve_ratio() {
        let e = Env::default();
        assert_eq!(quote(&e, 1, 100, 200), 2);
        assert_eq!(quote(&e, 2, 200, 100), 1);
    }

    #[test]
    fn quote_rounding_stays_within_one_reserve_unit() {
        let e = Env::default();
        for (amount_a, reserve_a, reserve_b) in
            [(7, 100, 333), (1, 3, 1), (999, 1000, 1), (123_456, 777, 13)]
        {
            let quoted = quote(&e, amount_a, reserve_a, reserve_b);
            let exact = amount_a * reserve_b;
            assert!(quoted * reserve_a <= exact);
            assert!(exact - quoted * reserve_a < reserve_a);
        }
    }

    #[test]
    fn amount_out_golden_values() {
        let e = Env::default();
        assert_eq!(get_amount_out(&e, 2, 100, 100), 1);
        assert_eq!(get_amount_out(&e, 10_000, 1_000_000, 1_000_000), 9871);
    }

    #[test]
    fn amount_in_golden_values() {
        let e = Env::default();
        assert_eq!(get_amount_in(&e, 1, 100, 100), 2);
        assert_eq!(get_amount_in(&e, 9871, 1_000_000, 1_000_000), 10_000);
    }

    #[test]
    fn round_trip_rounding_always_favors_the_pool() {
        let e = Env::default();
        for amount_in in [1u128, 2, 997, 10_000, 123_456, 5_000_000] {
            for (reserve_in, reserve_out) in [
                (10_000_000u128, 20_000_000u128),
                (20_000_000, 10_000_000),
                (10_000_000, 10_000_000),
            ] {
                let out = get_amount_out(&e, amount_in, reserve_in, reserve_out);
                if out == 0 {
                    continue;
                }
                // the input computed for `out` must actually buy `out`
                let back = get_amount_in(&e, out, reserve_in, reserve_out);
                assert!(get_amount_out(&e, back, reserve_in, reserve_out) >= out);
                // and it never underpays the pool: in * fee * (r_out - out)
                // covers r_in * M * out with the fee applied
                assert!(
                    back * (FEE_MULTIPLIER - FEE_FRACTION) * (reserve_out - out)
                        >= reserve_in * FEE_MULTIPLIER * out
                );
            }
        }
    }

    #[test]
    fn reversing_the_documented_scenario_is_exact() {
        let e = Env::default();
        // reversing a shallow forward quote never yields a smaller input
        assert_eq!(
            get_amount_in(&e, get_amount_out(&e, 2, 100, 100), 100, 100),
            2
        );
        assert_eq!(
            get_amount_in(
                &e,
                get_amount_out(&e, 10_000, 1_000_000, 1_000_000),
                1_000_000,
                1_000_000
            ),
            10_000
        );
    }
}
