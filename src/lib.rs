//! Parser for PJe intimation exports and the public defender deadline rule.
//!
//! Text pasted from the portal's notification list goes through
//! [`parser::parse_intimations`]; each resulting [`Intimation`] can then be
//! given a deadline with [`deadline::deadline_for`] once the caller knows the
//! act type, or reshaped into a [`task::TaskEntry`] for the case dashboard.

pub mod acts;
pub mod area;
pub mod config;
pub mod deadline;
pub mod parser;
pub mod record;
pub mod task;

pub use record::Intimation;
