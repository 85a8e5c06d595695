pub mod credit_card_form;
pub mod credit_card_list;
pub mod credit_card_row;
