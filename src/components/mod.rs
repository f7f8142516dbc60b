//! UI Components
//!
//! Leptos components for the to-do board.

mod new_item_form;
mod todo_board;
mod todo_card;
mod edit_field;

pub use new_item_form::NewItemForm;
pub use todo_board::TodoBoard;
pub use todo_card::TodoCard;
pub use edit_field::EditField;
