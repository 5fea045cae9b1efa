//! Order Pricing Module
//!
//! Pricing happens per dish line: merge the recipe with order-time extras,
//! match the offer catalog against the merged quantities, compute one
//! discount per eligible offer, then deduct sequentially with a zero floor.

mod aggregate;
mod calculator;
mod engine;
pub mod matcher;

pub use aggregate::*;
pub use calculator::*;
pub use engine::*;
pub use matcher::*;

#[cfg(test)]
mod tests;
