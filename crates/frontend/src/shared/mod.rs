pub mod api_client;
pub mod components;
pub mod entity_pages;
pub mod icons;
pub mod list_state;
pub mod notice;
pub mod page_frame;
pub mod resource;
