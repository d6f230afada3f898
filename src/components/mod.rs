pub mod filter_bar;
pub mod navigation;
pub mod pager;
pub mod record_form;
pub mod record_table;
