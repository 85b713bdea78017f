pub mod amm;
pub mod pda;
pub mod pool;

pub use amm::*;
pub use pool::*;
