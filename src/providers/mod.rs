mod document_store;
#[cfg(test)]
pub mod fakes;
mod identity;
mod location;
mod map_view;
mod timeout;

pub use document_store::DocumentStore;
pub use identity::IdentityProvider;
pub use location::{LocationProvider, PermissionStatus};
pub use map_view::MapView;
pub use timeout::with_timeout;
