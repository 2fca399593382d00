#![no_std]

mod admin;
mod allowance;
mod balance;
mod contract;
mod errors;
mod metadata;
pub mod testutils;

pub use crate::contract::{Token, TokenClient};
pub use crate::errors::TokenError;
