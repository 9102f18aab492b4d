//! Split a multi-page payslip PDF into one single-page file per employee.
//!
//! The roster file names the outputs: page i of the source is paired with
//! the i-th name of the lexicographically sorted employee list, and each
//! output is written as `{name}_{Mon-YYYY}.pdf`.
//!
//! - [`employees`]: roster loading and validation
//! - [`label`]: date label formatting
//! - [`pdf`]: PDF document wrapper
//! - [`split`]: the split operation
//! - [`cli`]: command-line interface and orchestration
//! - [`error`]: error types and Result alias

pub mod cli;
pub mod employees;
pub mod error;
pub mod label;
pub mod pdf;
pub mod split;

pub use error::{Result, SplitError};
