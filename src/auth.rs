//! Client credentials, token wire types, and the client-credentials exchange.

pub mod credentials;
pub mod grant;
pub mod provider;
pub mod token;

pub use credentials::*;
pub use grant::*;
pub use provider::*;
pub use token::*;
