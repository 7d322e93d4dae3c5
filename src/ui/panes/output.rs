//! Generated Python / simulation pane rendering

use super::{clamp_scroll, pane_block, visible_rows};
use crate::report::{SIMULATION_BANNER, SIMULATION_NOTE};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Padding},
    Frame,
};

/// What the output pane is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputView {
    /// Generated code, or the placeholder on failure
    Translation,
    /// Banner + code + note
    Simulation,
}

impl OutputView {
    fn title(self) -> &'static str {
        match self {
            OutputView::Translation => " Python Output ",
            OutputView::Simulation => " Execution Simulation ",
        }
    }
}

/// Render the output pane. `succeeded` is false when `text` is the placeholder.
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    text: &str,
    view: OutputView,
    succeeded: bool,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(view.title().to_string(), is_focused).padding(Padding::new(1, 0, 0, 0));

    let all_items: Vec<ListItem> = text
        .lines()
        .map(|line| {
            let style = if !succeeded {
                Style::default().fg(DEFAULT_THEME.error)
            } else if line.trim_start().starts_with('#') {
                Style::default().fg(DEFAULT_THEME.comment)
            } else if view == OutputView::Simulation && is_frame_line(line) {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(line.to_string()).style(style)
        })
        .collect();

    let visible_height = visible_rows(area, 0);
    clamp_scroll(scroll_offset, all_items.len(), visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}

/// Banner, separator and note lines of the simulation view.
fn is_frame_line(line: &str) -> bool {
    line == SIMULATION_BANNER || line == SIMULATION_NOTE || line == "---"
}
