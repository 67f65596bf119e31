//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod guard;
pub mod loading;
pub mod nav;
pub mod toast;

pub use guard::Guarded;
pub use loading::ListSkeleton;
pub use nav::Nav;
pub use toast::Toast;
