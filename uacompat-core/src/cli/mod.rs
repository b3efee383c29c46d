pub mod conf;
pub mod parse;
pub mod stats;
