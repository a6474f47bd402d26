use egui::text::{LayoutJob, TextFormat};
use egui::{Response, TextStyle, Ui};
use roster_business::Highlighter;

use crate::utils::colors::{COLOR_HIGHLIGHT, COLOR_HIGHLIGHT_TEXT};

/// Builds the text of a cell with matched runs drawn on a highlight background.
pub fn highlighted_job(ui: &Ui, text: &str, highlighter: &Highlighter) -> LayoutJob {
    let font_id = TextStyle::Body.resolve(ui.style());
    let text_color = ui.visuals().text_color();

    let mut job = LayoutJob::default();
    for segment in highlighter.segments(text) {
        let format = if segment.matched {
            TextFormat {
                font_id: font_id.clone(),
                color: COLOR_HIGHLIGHT_TEXT,
                background: COLOR_HIGHLIGHT,
                ..TextFormat::default()
            }
        } else {
            TextFormat::simple(font_id.clone(), text_color)
        };
        job.append(segment.text, 0.0, format);
    }
    job
}

#[inline]
pub fn render_highlighted_cell(ui: &mut Ui, text: &str, highlighter: &Highlighter) -> Response {
    let job = highlighted_job(ui, text, highlighter);
    ui.label(job)
}
