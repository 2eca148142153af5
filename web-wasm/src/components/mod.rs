pub mod conveyor_belt;
pub mod file_list;
pub mod header;
pub mod results_table;
pub mod summary_panel;
pub mod toast;
pub mod upload_area;
