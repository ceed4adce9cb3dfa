pub mod basic_queries;
pub mod bulk_operations;
pub mod change_tracker;
pub mod compiled_queries;
pub mod crud_operations;
pub mod global_filters;
pub mod pagination;
pub mod raw_sql;
pub mod related_data;
pub mod stored_procedures;
pub mod tracking;
pub mod transactions;
