pub mod grid;
pub mod navbar;
pub mod sidebar;
pub mod viewer;
