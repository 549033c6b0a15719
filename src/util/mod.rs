//! Small helpers shared by the repository and service layers.

pub mod key_lock;
pub mod parse;
pub mod validate;
