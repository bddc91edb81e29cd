//! Signing material, bearer tokens, token factories, and authorization providers.

pub mod factory;
pub mod material;
pub mod provider;
pub mod secret;
pub mod token;

pub use factory::*;
pub use material::*;
pub use provider::*;
pub use secret::*;
pub use token::*;
