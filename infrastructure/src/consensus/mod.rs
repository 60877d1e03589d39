//! Consensus runtime adapters

mod validator_pool;

pub use validator_pool::ValidatorPoolRuntime;
