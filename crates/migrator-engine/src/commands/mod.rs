//! Commands that touch the database
//!
//! `migrate` and `status` take an open executor and a repository;
//! `engine_command` opens both from validated inputs.

pub mod engine_command;
pub mod migrate;
pub mod status;
