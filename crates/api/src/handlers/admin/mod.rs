//! Admin CRUD handlers.
//!
//! Per-entity create/list/get/update/delete with search and filter
//! parameters, the singleton guard on site settings, and the
//! auto-translation hook on content writes.

pub mod fields;
pub mod labs;
pub mod news;
pub mod projects;
pub mod site;
pub mod submissions;
pub mod team;

use institut_assistant::{fill_missing_translations, FieldTriple};

use crate::state::AppState;

/// Run the auto-translation hook over an entity's translatable fields,
/// honoring the configuration toggle. Failures never surface.
pub(crate) async fn autofill(state: &AppState, fields: &mut [FieldTriple<'_>]) {
    if state.config.assistant.auto_translate {
        fill_missing_translations(&state.translator, fields).await;
    }
}
