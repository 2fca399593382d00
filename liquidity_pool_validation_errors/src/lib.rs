#![no_std]

use soroban_sdk::contracterror;

// Validation failures shared by the router and the pools. Every code is
// terminal for the current invocation; callers resubmit with adjusted
// bounds, path or deadline.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum LiquidityPoolValidationError {
    InsufficientAmount = 2001,
    InsufficientLiquidity = 2002,
    InsufficientInputAmount = 2003,
    InsufficientOutputAmount = 2004,
    InvalidPath = 2005,
    InsufficientAAmount = 2006,
    InsufficientBAmount = 2007,
    ExcessiveInputAmount = 2008,
    Expired = 2009,
    InvalidSignature = 2010,
    IdenticalTokens = 2011,
    PoolNotFound = 2012,
    ZeroAmount = 2013,
    WrongInputVecSize = 2014,
    FeeOutOfBounds = 2015,
}
