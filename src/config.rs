//! Configuration module
//!
//! The alias table lives in a plain `alias = value` file. `store` reads and
//! appends raw lines, `parser` turns them into an [`AliasTable`] and
//! `template` holds the document written on first use.

pub mod parser;
pub mod store;
pub mod template;

pub use parser::{parse, AliasTable};
pub use store::ConfigStore;
