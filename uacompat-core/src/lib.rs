pub mod access_log;
pub mod cli;
pub mod conf;
pub mod logging;
pub mod query;
pub mod report;
pub mod user_agent;
