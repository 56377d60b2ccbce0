//! To-do lists and their tasks.
//!
//! Users create named lists, add tasks to the selected list, and delete
//! either; deleting a list removes its tasks first. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Persistence orchestration in [`services`]
//! - Reactive view state in [`board`]

pub mod adapters;
pub mod board;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
