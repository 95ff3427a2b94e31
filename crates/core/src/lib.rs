//! Domain primitives shared by the persistence and HTTP layers.

pub mod error;
pub mod payment;
pub mod slug;
pub mod types;
