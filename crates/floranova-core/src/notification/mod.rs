//! Notification domain module.
//!
//! - `model`: `Notification`, its symbolic icon tag and opaque screen target
//! - `center`: `NotificationCenter`, the owned alert list and read tracking

mod center;
mod model;

pub use center::NotificationCenter;
pub use model::{Notification, NotificationIcon, NotificationId, ScreenTarget};
