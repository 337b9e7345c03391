pub mod handlers;
pub mod header;
pub mod input_form;
pub mod result_panel;
pub mod utils;
