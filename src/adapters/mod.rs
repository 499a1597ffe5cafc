pub mod csv_roster_adapter;
pub mod file_config_adapter;
pub mod text_report_adapter;
