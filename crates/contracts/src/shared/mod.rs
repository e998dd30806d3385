pub mod api;
pub mod form;
pub mod localized;
pub mod multilang;
pub mod pagination;
pub mod relation;
pub mod slug;
pub mod validation;
