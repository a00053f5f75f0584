//! Retext: Text File Processing Library
//!
//! A library for safely reading text files, applying simple
//! transformations, and writing the results to derived output files.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
