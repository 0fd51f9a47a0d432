pub mod add;
pub mod applicant;
pub mod calc;
pub mod config;
pub mod del;
pub mod export;
pub mod holidays;
pub mod init;
pub mod list;
pub mod log;
