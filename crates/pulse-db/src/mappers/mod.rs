//! Entity to model mappers
//!
//! Conversions between domain entities (pulse-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod comment;
mod poll;
mod post;
mod reaction;
mod user;

pub use post::PostInsert;
pub use user::UserInsert;
