// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod database;

#[cfg(test)]
pub mod testing;

pub use database::*;
