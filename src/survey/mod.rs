pub mod parser;
pub mod report;
