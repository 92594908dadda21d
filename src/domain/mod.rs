pub mod collection;
pub mod enums;
pub mod error;
pub mod gating;
pub mod item;
pub mod timer;
pub mod views;

pub use collection::ItemList;
pub use enums::{ListKind, Route, TimeField, UiMode};
pub use error::{FieldError, ValidationError};
pub use gating::{allowed_ops, AllowedOps};
pub use item::Item;
pub use timer::{CountdownTimer, TimerEvent, TimerFields, TimerState};
pub use views::{check_glyph, clamp_selection, format_clock, progress_track};
