//! Application layer: the command registration table.

pub mod commands;
