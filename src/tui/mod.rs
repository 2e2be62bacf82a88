//! Interactive terminal browser for scan matches, built on ratatui.
//!
//! # Architecture
//!
//! The browser is split into pure components that are composed by
//! [`BrowserState`]:
//!
//! - [`TableModel`] - selection, windowing, paging and search over the store
//! - [`DetailPane`] - every field of the selected match
//! - [`PaneSplit`] - how the terminal height is shared between panes
//! - [`TextInput`] - the filter expression editor
//!
//! [`step`] applies one [`Event`] and returns the next state together with a
//! rendered [`Frame`]. Only [`run_tui`] talks to the terminal.

mod app;
mod details;
mod events;
mod frame;
mod input;
mod layout;
mod table;
pub mod theme;
mod ui;

pub use app::{step, Action, BrowserState, Effect, KeyBindings, Mode, Step};
pub use details::DetailPane;
pub use events::{Event, EventHandler, Key};
pub use frame::{clip_to_width, pad_cell, Frame, FrameLine, LineKind};
pub use input::{TextInput, FILTER_PLACEHOLDER, FILTER_PROMPT};
pub use layout::PaneSplit;
pub use table::TableModel;
pub use theme::{ColorScheme, RenderConfig};
pub use ui::{run_tui, Outcome};
