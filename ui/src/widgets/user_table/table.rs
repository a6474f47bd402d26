//! Column layout, header and rows of the user table.

use egui::{Align, Layout, Ui};
use egui_extras::{Column, TableBuilder, TableRow};
use roster_business::{FilterField, Highlighter, User, UserFilter};

use super::cells::render_highlighted_cell;

pub const MIN_COLUMN_WIDTH: f32 = 120.0;
pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Renders `rows` with each cell highlighted by the matching column of
/// `highlight`. An empty `rows` leaves just the header.
pub fn users_table(ui: &mut Ui, rows: &[&User], highlight: &UserFilter) {
    let highlighters = FilterField::ALL.map(|field| (field, Highlighter::new(highlight.get(field))));

    TableBuilder::new(ui)
        .id_salt("user_table")
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(
            Column::remainder().at_least(MIN_COLUMN_WIDTH).clip(true),
            FilterField::ALL.len(),
        )
        .header(HEADER_HEIGHT, |mut header| {
            render_table_header(&mut header);
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let user = rows[row.index()];
                for (field, highlighter) in &highlighters {
                    row.col(|ui| {
                        render_highlighted_cell(ui, field.value(user), highlighter);
                    });
                }
            });
        });
}

pub fn render_table_header(header: &mut TableRow<'_, '_>) {
    for field in FilterField::ALL {
        header.col(|ui| {
            ui.strong(field.label());
        });
    }
}
