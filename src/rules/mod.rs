//! Destructuring lint rules
//!
//! Rules ported from the ESLint sort-destructure-keys rule

pub mod sort_destructure_keys;

// Re-export rule structs
pub use sort_destructure_keys::{Order, SortDestructureKeys, SortDestructureKeysConfig};
