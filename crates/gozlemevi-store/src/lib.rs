//! Persistent wish storage used by Gözlemevi.
//!
//! A [`Persisted`] value mirrors one named slot of a [`SlotStorage`] backend.
//! Reads repair corrupted slots by erasing them, writes go through to the
//! backend immediately and never roll back the in-memory value. [`WishBook`]
//! layers the wish-wall operations on top of a persisted `Vec<Wish>`.

mod archive;
mod book;
mod clock;
mod slot;
mod store_json;
mod wish;

pub use archive::*;
pub use book::*;
pub use clock::*;
pub use slot::*;
pub use store_json::*;
pub use wish::*;
