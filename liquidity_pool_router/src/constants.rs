// Fee convention shared with the pools: 0.01% = 1; 1% = 100; 0.3% = 30.
// The router quotes with the standard fraction; a pool configured with a
// different fee still defends itself through its own invariant check.
pub(crate) const FEE_MULTIPLIER: u128 = 10_000;
pub(crate) const FEE_FRACTION: u128 = 30;
