//! Namespaced resource identifiers and the ordered map keyed by them.
//!
//! A [`ResourceLocation`] is the `namespace:path` pair every pack asset is
//! addressed by. [`ResourceMap`] stores values under their normalized
//! location and iterates them in insertion order.

pub mod error;
mod location;
mod map;

pub use error::LocationError;
pub use location::{ResourceLocation, ToResourceLocation, DEFAULT_NAMESPACE};
pub use map::ResourceMap;
