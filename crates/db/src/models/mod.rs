//! Domain model structs, DTOs, and row mappers.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for request bodies
//! - Joined-row structs and the mappers that fold them into response shapes

pub mod company;
pub mod industry;
pub mod invoice;
