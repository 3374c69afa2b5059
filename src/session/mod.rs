mod session;
mod token_store;

pub use session::Session;
pub use token_store::TokenStore;
