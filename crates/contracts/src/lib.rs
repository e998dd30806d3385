//! Wire contracts and form logic shared by the catalog admin dashboard.
//!
//! Everything in this crate is plain Rust with no browser dependencies, so the
//! editing rules (languages, slugs, pagination, validation) are unit-tested on
//! the host.

pub mod domain;
pub mod shared;
pub mod system;
