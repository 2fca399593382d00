// 0.01% = 1; 1% = 100; 0.3% = 30
pub(crate) const FEE_MULTIPLIER: u128 = 10_000;

// First-deposit shares locked on the pool address so the total supply can
// never return to zero once a pool has been seeded.
pub(crate) const MINIMUM_LIQUIDITY: u128 = 1000;

// Allowances written by permit expire after roughly a day of ledgers.
pub(crate) const PERMIT_ALLOWANCE_LEDGERS: u32 = 17280;
