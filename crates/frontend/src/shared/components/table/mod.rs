pub mod number_format;
pub mod table_header_checkbox;

pub use number_format::*;
pub use table_header_checkbox::TableHeaderCheckbox;
