//! Flowbar is a flow/wrap layout engine for button bars and other rows of fixed-size items.
//!
//! Items are laid out left to right and wrap onto a new row when the next one would overflow
//! the available width. Widths and heights can be equalized across items, and leftover space
//! can be placed before the content (trailing alignment).
//!
//! # Pipeline overview
//!
//! 1. **Measure**: `items + constraints -> Size` ([`Arrange::measure`])
//! 2. **Arrange**: `items + bounds -> Vec<Rect>` ([`Arrange::arrange`])
//!
//! [`FlowLayout`] memoizes the last solve. The memo is keyed on a content fingerprint of the
//! items, config and sizing options, so a changed item set can never be answered from a stale
//! entry; [`Arrange::invalidate`] still flushes it explicitly.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Integer pixels**: all geometry is `i32` arithmetic, saturating on overflow.
//! - **No IO in the engine**: only the CLI touches the filesystem.
#![forbid(unsafe_code)]

mod foundation;

/// Button bar owner model.
pub mod bar;
/// Flow layout engine.
pub mod layout;
/// JSON request/result model.
pub mod model;
/// Escaped-delimiter preference string format.
pub mod serial;

pub use bar::{BarItem, ButtonBar};
pub use foundation::core::{Alignment, Constraint, Rect, Size};
pub use foundation::error::{FlowError, FlowResult};
pub use layout::cache::{ItemsFingerprint, LayoutCache};
pub use layout::config::{LayoutConfig, LayoutOptions};
pub use layout::engine::{Arrange, CacheStats, FlowLayout};
pub use layout::flow::{Grid, solve};
pub use model::{LayoutRequest, LayoutResult, run_request};
pub use serial::array::{ArrayDeserializer, ArraySerializer};
pub use serial::object::{ObjectDeserializer, ObjectSerializer};
