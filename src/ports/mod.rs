pub mod config_port;
pub mod roster_port;
pub mod report_port;
