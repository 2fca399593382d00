use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LiquidityPoolError {
    AlreadyInitialized = 201,
    TokensNotSorted = 202,
    InvariantDoesNotHold = 204,
    InsufficientLiquidityMinted = 205,
    InsufficientLiquidityBurned = 206,
    InsufficientBalance = 207,
    InsufficientAllowance = 208,
    PermitKeyNotSet = 209,
    PastTimeNotAllowed = 210,
}
