pub mod base;
pub mod chamber;
pub mod constants;
pub mod growth;
pub mod heat;
pub mod parser;
pub mod report;
pub mod rules;
pub mod search;
pub mod solver;
