pub mod fixed_expense_form;
pub mod fixed_expense_list;
pub mod fixed_expense_row;
