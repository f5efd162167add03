// Command handlers module
// Each handler prints its directive only after every fallible step succeeded

pub mod add;
pub mod common;
pub mod edit;
pub mod goto;
pub mod list;
pub mod shell_init;
