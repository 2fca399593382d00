#![no_std]

mod admin;
mod constants;
mod contract;
mod pool_interface;
mod pool_utils;
mod quoting;
mod storage;
mod storage_types;
mod testutils;
mod utils;

pub use crate::contract::{LiquidityPoolRouter, LiquidityPoolRouterClient};
