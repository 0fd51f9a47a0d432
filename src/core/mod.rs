pub mod add;
pub mod calculator;
pub mod config;
pub mod del;
pub mod holiday;
pub mod ledger;
pub mod log;
pub mod logic;
