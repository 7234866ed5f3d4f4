//! Page bodies, one renderer per page

pub mod home_render;
pub mod reality_check_render;
pub mod vibe_check_render;
