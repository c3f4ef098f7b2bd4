//! Trait contracts implemented by model providers

mod provider;

pub use provider::ModelProvider;
