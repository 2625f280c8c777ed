//! Test modules for the feed parser

pub mod matcher_tests;
pub mod parser_tests;
