//! Theme state: the preference value, its configuration, and the toggler.
//!
//! DESIGN
//! ======
//! Everything here is plain Rust with no browser dependency. Browser access
//! goes through the capability traits in `util`, so the state machine can be
//! driven by tests without a DOM.

pub mod config;
pub mod theme;
pub mod toggler;
