//! Driver module - Adapters that feed a board from outside events.
//!
//! Both adapters only call the public [`LifeEngine`](crate::compute::LifeEngine)
//! API; they hold no cell state of their own.

mod input;
mod scheduler;

pub use input::*;
pub use scheduler::*;
