#![no_std]

mod constants;
mod contract;
mod errors;
mod permit;
mod pool_interface;
mod share;
mod storage;
mod test;
mod test_permit;
pub mod testutils;
mod token;

pub use crate::contract::{LiquidityPool, LiquidityPoolClient};
pub use crate::errors::LiquidityPoolError;
pub use crate::permit::permit_payload;
