pub mod daily_expense_chart;
pub mod expense_edit_row;
pub mod expense_form;
pub mod expense_list;
pub mod expense_summary;
