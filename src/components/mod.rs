pub mod app;
pub mod carousel;
pub mod feed_list;
pub mod settings_modal;
