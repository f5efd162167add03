// Export modules for testing
pub mod cli;
pub mod color;
pub mod context;
pub mod error;

// Config file access and parsing
pub mod config;

// Command modules
pub mod commands;

// Domain modules
pub mod domain;
