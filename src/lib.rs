//! Candidate vote-total extraction from election results pages.
//!
//! The extraction core lives in [`extract`] and is pure: HTML text and
//! an ordered candidate list in, an ordered tally out. Everything else
//! wraps it — [`acquisition`] loads the page from a URL or a file,
//! [`report`] shapes the JSON output, and [`cli`] drives a single run.

pub mod acquisition;
pub mod cli;
pub mod extract;
pub mod report;
