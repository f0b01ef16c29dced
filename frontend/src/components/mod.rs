pub mod about;
pub mod booking;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod projects;
pub mod skills;

/// Modifier class every section root carries for its light/dark variant
pub fn theme_class(dark_mode: bool) -> &'static str {
    if dark_mode {
        "theme-dark"
    } else {
        "theme-light"
    }
}
