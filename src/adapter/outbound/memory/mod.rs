//! In-process store and cache used by the default deployment.

mod cache;
mod store;

pub use cache::InMemoryBookingCache;
pub use store::InMemoryBookingStore;
