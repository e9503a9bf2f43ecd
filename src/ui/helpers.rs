//! Spawn helpers for background network tasks.
//!
//! Every mutation is an isolated round trip: the task issues one request,
//! then reports the settled result over the `AppEvent` channel. Nothing is
//! retried, cancelled, or serialized against other in-flight requests;
//! results apply to app state in whichever order they arrive.

use crate::api::{ApiClient, ProductDraft};
use crate::app::AppEvent;
use tokio::sync::mpsc;

/// Spawn a create request for the given draft.
pub(super) fn spawn_create(api: ApiClient, draft: ProductDraft, tx: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        let result = api.create_product(&draft).await;
        if let Err(e) = tx.send(AppEvent::ProductCreated(result)).await {
            tracing::warn!(error = %e, "Failed to send create result (receiver dropped)");
        }
    });
}

/// Spawn an update request for the product with the given id.
pub(super) fn spawn_update(
    api: ApiClient,
    id: u64,
    draft: ProductDraft,
    tx: mpsc::Sender<AppEvent>,
) {
    tokio::spawn(async move {
        let result = api.update_product(id, &draft).await;
        if let Err(e) = tx.send(AppEvent::ProductUpdated { id, result }).await {
            tracing::warn!(error = %e, id, "Failed to send update result (receiver dropped)");
        }
    });
}

/// Spawn a delete request for the product with the given id.
pub(super) fn spawn_delete(api: ApiClient, id: u64, tx: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        let result = api.delete_product(id).await;
        if let Err(e) = tx.send(AppEvent::ProductDeleted { id, result }).await {
            tracing::warn!(error = %e, id, "Failed to send delete result (receiver dropped)");
        }
    });
}
