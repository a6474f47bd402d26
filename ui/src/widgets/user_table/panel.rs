use std::time::Duration;

use egui::{Response, Ui};
use log::error;
use roster_business::{FetchUsersCommand, LoadStatus, UserTableState, UsersState};
use roster_states::{StateCtx, Time};

use super::filters::filter_inputs;
use super::table::users_table;
use crate::utils::colors::COLOR_RED;

/// How often to repaint while waiting on the users request.
const LOADING_REPAINT: Duration = Duration::from_millis(100);

/// Displays the user table: triggers the initial fetch, then shows a loading
/// indicator, the fetch error, or the filters and the filtered table.
pub fn user_table(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.heading("User Management Table");
        ui.add_space(8.0);

        let status = state_ctx.state::<UsersState>().status;
        match status {
            LoadStatus::Idle => {
                if let Err(err) = state_ctx.dispatch(&FetchUsersCommand) {
                    error!("user_table: cannot dispatch users fetch: {err}");
                }
                loading(ui);
            }
            LoadStatus::Loading => loading(ui),
            LoadStatus::Failed => {
                let users = state_ctx.state::<UsersState>();
                let message = users.error_message().unwrap_or("unknown error");
                ui.colored_label(COLOR_RED, format!("Error: {message}"));
            }
            LoadStatus::Succeeded => loaded(state_ctx, ui),
        }
    })
    .response
}

fn loading(ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label("Loading...");
    });
    ui.ctx().request_repaint_after(LOADING_REPAINT);
}

fn loaded(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let now = *state_ctx.state::<Time>().as_ref();

    let table_state = state_ctx.state_mut::<UserTableState>();
    filter_inputs(ui, table_state);
    table_state.tick(now);

    // Wake up when a pending filter is due even if nothing else happens.
    if let Some(wait) = table_state
        .next_deadline(now)
        .and_then(|delta| delta.to_std().ok())
    {
        ui.ctx().request_repaint_after(wait);
    }

    let applied = table_state.applied_filter();
    let live = table_state.live_filter();

    ui.add_space(12.0);

    let rows = applied.apply(state_ctx.state::<UsersState>().users());
    users_table(ui, &rows, &live);
}
