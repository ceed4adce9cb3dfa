pub mod code_snippet;
pub mod demo_list;
pub mod footer;
pub mod header;
pub mod help;
pub mod result_view;
pub mod sidebar;
