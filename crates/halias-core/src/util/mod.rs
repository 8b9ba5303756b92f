//! Path handling and vault discovery.
//!
//! # Modules
//!
//! - [`paths`]: Generic path utilities (tilde expansion, marker search)
//! - [`resolver`]: Vault root and settings file resolution

pub mod paths;
pub mod resolver;
