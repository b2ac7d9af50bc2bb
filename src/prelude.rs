//! Crate-local prelude (for alloc-dependent types like `Vec` and `String`)

pub use alloc::string::String;
pub use alloc::vec::Vec;
