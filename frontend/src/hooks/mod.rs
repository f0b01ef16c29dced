pub mod use_booking;
pub mod use_scrolled;
pub mod use_theme;
