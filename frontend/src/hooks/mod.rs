pub mod use_session;
pub mod use_table_rows;
