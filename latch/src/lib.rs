//! latch - a dropdown/select widget kit for terminal UIs.
//!
//! The widget owns its interactive state (open/close lifecycle, search
//! text, ordered selection, hint-reveal one-shot) and derives a
//! sorted/filtered view of the caller's options for rendering. The host
//! environment supplies the event loop, outside-click detection, and a
//! wakeup channel for redraws.

pub mod config;
pub mod events;
pub mod option;
pub mod render;
mod reveal;
pub mod state;
pub mod text;
pub mod theme;
pub mod variant;
pub mod view;
pub mod wakeup;

pub use config::{SelectConfig, Sorting, ViewField};
pub use events::{EventResult, SelectionChange};
pub use option::{OptionsError, SelectOption};
pub use state::{Select, SelectId};
pub use variant::Variant;

pub mod prelude {
    pub use crate::config::{SelectConfig, Sorting, ViewField};
    pub use crate::events::{EventResult, SelectionChange};
    pub use crate::option::{OptionsError, SelectOption};
    pub use crate::state::{Select, SelectId};
    pub use crate::theme::Palette;
    pub use crate::variant::Variant;
    pub use crate::wakeup::{WakeupHandle, WakeupReceiver, WakeupSender};
}
