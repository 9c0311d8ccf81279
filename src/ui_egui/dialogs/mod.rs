//! Modal dialogs and the event detail popup.

pub mod break_confirm;
pub mod cancel_modal;
pub mod delete_dialog;
pub mod detail_popup;
pub mod reschedule_modal;

pub use cancel_modal::CancelModalState;
pub use reschedule_modal::RescheduleModalState;

use crate::ui_egui::app::CalendarApp;

/// Render whichever dialog is open this frame.
pub fn show(ctx: &egui::Context, app: &mut CalendarApp) {
    detail_popup::show(ctx, app);
    cancel_modal::show(ctx, app);
    reschedule_modal::show(ctx, app);
    delete_dialog::show(ctx, app);
    break_confirm::show(ctx, app);
}
