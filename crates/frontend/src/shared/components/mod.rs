pub mod form_fields;
pub mod multilang_editor;
pub mod page_header;
pub mod pagination_controls;
pub mod relation_select;
pub mod search_input;
pub mod stat_card;
pub mod ui;
