// Domain modules: resolving requests into shell directives

pub mod alias;
pub mod directive;
pub mod target;
