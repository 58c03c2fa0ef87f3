//! Output formatting
//!
//! Console, CSV, and JSON rendering of a finished sweep.

pub mod csv;
pub mod json;
pub mod text;
