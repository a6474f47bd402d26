use egui::{Response, TextEdit, Ui};
use roster_business::{FilterField, UserTableState};

/// Room kept next to a non-empty input for its clear button.
const CLEAR_BUTTON_WIDTH: f32 = 24.0;

/// Lays out one filter input per column, side by side.
pub fn filter_inputs(ui: &mut Ui, state: &mut UserTableState) {
    ui.columns(FilterField::ALL.len(), |columns| {
        for (ui, field) in columns.iter_mut().zip(FilterField::ALL) {
            filter_input(ui, state, field);
        }
    });
}

/// A single-line filter with a clear button shown while it has text.
pub fn filter_input(ui: &mut Ui, state: &mut UserTableState, field: FilterField) -> Response {
    let mut cleared = false;

    let response = ui
        .horizontal(|ui| {
            let has_text = !state.input(field).text.is_empty();
            let width = if has_text {
                ui.available_width() - CLEAR_BUTTON_WIDTH
            } else {
                ui.available_width()
            };

            let response = ui.add(
                TextEdit::singleline(state.input_mut(field))
                    .id_salt(("user_filter", field.key()))
                    .hint_text(field.placeholder())
                    .desired_width(width.max(0.0)),
            );

            if has_text
                && ui
                    .small_button("✖")
                    .on_hover_text(format!("Clear {} filter", field.key()))
                    .clicked()
            {
                cleared = true;
            }

            response
        })
        .inner;

    if cleared {
        state.clear(field);
    }

    response
}
