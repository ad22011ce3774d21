//! User session domain module.
//!
//! # Module Structure
//!
//! - `model`: profile, subscription plan and scan-mode types
//! - `session`: `UserSessionState`, the gating authority for premium features
//!
//! # Usage
//!
//! ```ignore
//! use floranova_core::user::{UserSessionState, ScanDecision, Plan};
//! ```

mod model;
mod session;

// Re-export public API
pub use model::{Plan, ScanMode, UserProfile};
pub use session::{FREE_SCAN_LIMIT, ScanDecision, UserSessionState};
