//! Containers which are used to keep track of values keyed by the identifier
//! types of the crate (e.g. [`Subject`] and [`Day`]).
//!
//! [`Subject`]: crate::problem::Subject
//! [`Day`]: crate::problem::Day

mod keyed_vec;

pub use keyed_vec::KeyedVec;
pub use keyed_vec::StorageKey;
