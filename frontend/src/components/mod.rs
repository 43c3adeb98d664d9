pub mod filter_bar;
pub mod modal;
pub mod navbar;
pub mod pagination;
pub mod searchable_select;
