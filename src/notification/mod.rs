//! Notification module for eat-your-feelings
//!
//! Displays transient messages (degraded service, config problems) in the
//! top-right corner. Any component can push one.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationKind, NotificationState};
