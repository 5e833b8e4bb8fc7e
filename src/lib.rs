//! Roster
//!
//! Terminal browser for a list of user records fetched from a JSON
//! endpoint or file: search, paginate, select, edit and delete in memory.
//!
//! Pure Core / Impure Shell: `model`, `parser` and `state` hold no I/O;
//! `source`, `view`, `config` and `logging` talk to the outside world.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;

// Re-export main loop integration
pub mod integration;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
