//! TUI pane rendering modules
//!
//! Stateless render functions, one module per visible pane.
//!
//! # Pane Modules
//!
//! - [`source`]: Java source with syntax highlighting and error-line markers
//! - [`output`]: generated Python, or the simulation view
//! - [`tokens`]: token table
//! - [`diagnostics`]: lexical and syntax error tables
//! - [`status`]: status bar with keybindings and pipeline state
//!
//! Each pane clamps its own scroll offset to the content it has, so callers
//! can scroll freely (e.g. set `usize::MAX` to jump to the bottom).

pub mod diagnostics;
pub mod output;
pub mod source;
pub mod status;
pub mod tokens;

pub use diagnostics::render_diagnostics_pane;
pub use output::render_output_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block whose border color shows focus.
pub(crate) fn pane_block(title: String, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Rows available inside a bordered pane, minus `reserved` header rows.
pub(crate) fn visible_rows(area: Rect, reserved: u16) -> usize {
    area.height.saturating_sub(2 + reserved).max(1) as usize
}

/// Clamp `offset` so the last page stays full.
pub(crate) fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}
