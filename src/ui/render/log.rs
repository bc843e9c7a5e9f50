use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

/// Render log widget according to state, newest entries at the bottom.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .title("Log (d: hide)")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    let widget = TuiLoggerWidget::default()
        .block(block)
        .style(styling::muted_text_style(theme))
        .style_warn(Style::default().fg(theme.warning.to_color()))
        .style_error(Style::default().fg(theme.accent.to_color()))
        .output_separator(' ')
        .output_timestamp(Some("%H:%M:%S%.3f".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false);
    frame.render_widget(widget, size);
}
