//! Model Referee: pick a fake news detection model for your constraints
//!
//! The binary wires the shells in `referee-api` and `referee-tui` to the
//! shared engine in `referee-core` behind one command line.

pub mod cli;
