//! Application event handling.
//!
//! This module applies settled network results to app state. Successful
//! mutations patch the local product list in place; failures leave state
//! untouched and surface a status message plus a tracing event. The list is
//! never re-fetched after a mutation — the server response is merged
//! directly.

use crate::app::{App, AppEvent};

/// Handle application events from background tasks.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::ProductsLoaded(Ok(products)) => {
            tracing::info!(count = products.len(), "Product list loaded");
            app.products = products;
            app.clamp_selection();
        }
        AppEvent::ProductsLoaded(Err(e)) => {
            tracing::warn!(error = %e, "Failed to load products");
            app.set_status(format!("Failed to load products: {}", e));
        }

        AppEvent::CategoriesLoaded(Ok(categories)) => {
            tracing::info!(count = categories.len(), "Category list loaded");
            app.categories = categories;
        }
        AppEvent::CategoriesLoaded(Err(e)) => {
            tracing::warn!(error = %e, "Failed to load categories");
            app.set_status(format!("Failed to load categories: {}", e));
        }

        AppEvent::ProductCreated(Ok(product)) => {
            app.set_status(format!("Added \"{}\"", product.title));
            app.apply_created(product);
        }
        AppEvent::ProductCreated(Err(e)) => {
            // Form content is preserved so the user can retry
            tracing::warn!(error = %e, "Create request failed");
            app.set_status(format!("Add failed: {}", e));
        }

        AppEvent::ProductUpdated { result: Ok(product), .. } => {
            app.set_status(format!("Updated \"{}\"", product.title));
            app.apply_updated(product);
        }
        AppEvent::ProductUpdated { id, result: Err(e) } => {
            // Editing marker and form stay as they were
            tracing::warn!(error = %e, id, "Update request failed");
            app.set_status(format!("Update failed: {}", e));
        }

        AppEvent::ProductDeleted { id, result: Ok(()) } => {
            app.apply_deleted(id);
            app.set_status("Product deleted");
        }
        AppEvent::ProductDeleted { id, result: Err(e) } => {
            tracing::warn!(error = %e, id, "Delete request failed");
            app.set_status(format!("Delete failed: {}", e));
        }
    }
}
