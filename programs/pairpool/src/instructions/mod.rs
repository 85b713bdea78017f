pub mod create_amm;
pub mod create_pool;
pub mod create_pool_vaults;
pub mod liquidity_add;
pub mod liquidity_remove;
pub mod swap;

pub use create_amm::*;
pub use create_pool::*;
pub use create_pool_vaults::*;
pub use liquidity_add::*;
pub use liquidity_remove::*;
pub use swap::*;
