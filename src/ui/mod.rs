//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, file actions
//! - **[`panes`]**: stateless render functions for each visible pane (source,
//!   output, tokens, diagnostics, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Pipeline`] and the source file, then call [`App::run`] to start the
//! event loop.
//!
//! [`Pipeline`]: crate::pipeline::Pipeline
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
