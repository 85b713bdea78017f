pub mod liquidity;
pub mod math;
pub mod swap;
