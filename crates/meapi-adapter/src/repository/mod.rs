//! Repository Adapters - Implementations of the portfolio port
//!
//! The HTTP implementation lives in `gateway/`; this holds the offline one.

pub mod in_memory;
