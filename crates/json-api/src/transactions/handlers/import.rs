//! Seed Import Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError, extensions::*, state::State, transactions::responses::ImportResponse,
};

const IMPORTED_MESSAGE: &str = "Database initialized with seed data.";

/// Seed Import Handler
///
/// Replaces every stored transaction with the contents of the seed feed.
/// On failure the previously stored transactions are left untouched.
#[endpoint(tags("transactions"), summary = "Import Seed Data")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ImportResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let imported = state
        .app
        .import_transactions()
        .await
        .or_500("Failed to initialize the database.")?;

    Ok(Json(ImportResponse {
        message: IMPORTED_MESSAGE.to_string(),
        imported,
    }))
}
