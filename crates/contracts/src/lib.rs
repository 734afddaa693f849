//! Wire types shared between the admin console and the REST backend.

pub mod domain;
pub mod shared;
pub mod system;
