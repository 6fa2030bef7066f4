//! Data models for the Re:lation API.
//!
//! Records are built from API responses through [`crate::mapper`]: absent
//! or malformed optional fields never fail mapping. Every top-level record
//! keeps unmodeled keys in an `extra` map.

mod chat;
mod codes;
mod common;
mod customer;
mod message_box;
mod ticket;
mod user;

pub use chat::*;
pub use codes::*;
pub use common::*;
pub use customer::*;
pub use message_box::*;
pub use ticket::*;
pub use user::*;
