//! Report data structures for commands.
//!
//! Operations build reports; commands render them to an output.

mod check;
mod generate;
mod list;
mod output;

pub use check::CheckReport;
pub use generate::{GenerateReport, MockOutcome};
pub use list::ListReport;
pub use output::{Report, TerminalOutput};
