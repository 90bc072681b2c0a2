//! Bindings to the hosted document store and identity provider SDK.

pub mod bindings;
pub mod context;
pub mod identity;
pub mod store;

pub use context::FirebaseContext;
pub use identity::{AuthError, FirebaseIdentity, SessionUser, SessionWatch};
pub use store::FirestoreStore;
