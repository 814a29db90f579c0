//! Browser capabilities and presentation helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, body mutation) behind
//! small traits so the toggler logic can run and be tested without a DOM.

pub mod page_body;
pub mod presentation;
pub mod storage;
