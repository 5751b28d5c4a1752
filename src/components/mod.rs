//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering
//! logic. The callback wired from parent to child is the only channel a
//! child has back into parent-owned behavior.

pub mod child;
pub mod layout;
pub mod parent;
pub mod quit_dialog;

pub use child::ChildComponent;
pub use layout::{calculate_main_layout, centered_popup, split_parent_area, MainLayout};
pub use parent::ParentComponent;
pub use quit_dialog::QuitDialog;
