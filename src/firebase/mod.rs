mod auth;
mod client;
mod error_response;
mod firestore;

pub use auth::FirebaseAuth;
pub use client::new_client;
pub use firestore::Firestore;
