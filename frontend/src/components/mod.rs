// Reusable components live here.

pub mod error_banner;
pub mod footer;
pub mod header;
pub mod language_switch;
pub mod link_list;
pub mod segmented_switch;
pub mod theme_switch;
