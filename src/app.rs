use crate::api::{ApiClient, ApiError, Product, ProductDraft};
use std::borrow::Cow;
use tokio::time::Instant;

// ============================================================================
// Focus and Form Types
// ============================================================================

/// Which panel has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Filter,
    Form,
    Table,
}

impl Focus {
    /// Next panel in the Tab cycle: Search → Filter → Form → Table.
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Filter,
            Focus::Filter => Focus::Form,
            Focus::Form => Focus::Table,
            Focus::Table => Focus::Search,
        }
    }

    /// Previous panel in the Shift+Tab cycle.
    pub fn prev(self) -> Self {
        match self {
            Focus::Search => Focus::Table,
            Focus::Filter => Focus::Search,
            Focus::Form => Focus::Filter,
            Focus::Table => Focus::Form,
        }
    }
}

/// The form field currently receiving keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Price,
    Category,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Price,
            FormField::Price => FormField::Category,
            FormField::Category => FormField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Category,
            FormField::Price => FormField::Title,
            FormField::Category => FormField::Price,
        }
    }
}

/// Transient form content mirroring a product's editable fields.
///
/// `price` is held as raw text (the user types it) and parsed to `f64` only
/// at submit time. Reset to empty after every successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub price: String,
    pub category: String,
}

impl FormState {
    /// Mutable access to the field the cursor is on.
    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Price => &mut self.price,
            FormField::Category => &mut self.category,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Price => &self.price,
            FormField::Category => &self.category,
        }
    }

    /// Reset all fields to empty.
    pub fn clear(&mut self) {
        self.title.clear();
        self.price.clear();
        self.category.clear();
    }

    /// Validate the form and build the request payload.
    ///
    /// All three fields are required and the price must parse as a
    /// non-negative number. The error string is suitable for the status bar.
    pub fn to_draft(&self) -> Result<ProductDraft, &'static str> {
        if self.title.trim().is_empty()
            || self.price.trim().is_empty()
            || self.category.trim().is_empty()
        {
            return Err("All fields are required");
        }
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| "Price must be a number")?;
        if !price.is_finite() || price < 0.0 {
            return Err("Price must be a non-negative number");
        }
        Ok(ProductDraft {
            title: self.title.trim().to_string(),
            price,
            category: self.category.trim().to_string(),
        })
    }
}

// ============================================================================
// Background Task Events
// ============================================================================

/// Events from spawned network tasks.
///
/// Each mutation carries the server's `Result` so the handler can either
/// patch local state (success) or leave it untouched and surface the error
/// (failure). Responses apply in arrival order; overlapping requests are
/// last-response-wins by design.
pub enum AppEvent {
    /// Initial product list fetch settled.
    ProductsLoaded(Result<Vec<Product>, ApiError>),
    /// Initial category list fetch settled.
    CategoriesLoaded(Result<Vec<String>, ApiError>),
    /// Create request settled.
    ProductCreated(Result<Product, ApiError>),
    /// Update request settled for the given id.
    ProductUpdated {
        id: u64,
        result: Result<Product, ApiError>,
    },
    /// Delete request settled for the given id.
    ProductDeleted {
        id: u64,
        result: Result<(), ApiError>,
    },
}

// ============================================================================
// Filter Projection
// ============================================================================

/// Project the visible product list from the full list.
///
/// A product is visible when its title contains `search` case-insensitively
/// and, if a category is selected, its category matches exactly. Order is
/// preserved from the input list. Pure function; recomputed on every render.
pub fn visible<'a>(
    products: &'a [Product],
    search: &str,
    category: Option<&str>,
) -> Vec<&'a Product> {
    let needle = search.to_lowercase();
    products
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&needle))
        .filter(|p| category.is_none_or(|c| p.category == c))
        .collect()
}

// ============================================================================
// Application State
// ============================================================================

/// Central application state.
///
/// Owned by the UI loop and mutated only from the main control flow, either
/// directly by input handlers or when a spawned network task's `AppEvent`
/// arrives. The product list is the rendering source of truth: replaced
/// wholesale on initial fetch, patched in place on mutations, never
/// re-fetched afterwards.
pub struct App {
    pub api: ApiClient,

    // Data
    pub products: Vec<Product>,
    /// Fetched once, never mutated locally. Populates the filter selector.
    pub categories: Vec<String>,

    // Filters
    pub search_input: String,
    /// Index into `categories`, or None for the "All" sentinel.
    pub category_filter: Option<usize>,

    // Form
    pub form: FormState,
    pub form_field: FormField,
    /// None = create mode, Some(id) = edit mode for that product.
    pub editing_id: Option<u64>,

    // UI state
    pub focus: Focus,
    /// Selected row in the *visible* (filtered) list.
    pub selected_row: usize,
    /// Status message with expiry — Cow avoids allocation for static literals.
    pub status_message: Option<(Cow<'static, str>, Instant)>,
    /// Dirty flag to skip unnecessary frame renders.
    pub needs_redraw: bool,
}

impl App {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            products: Vec::new(),
            categories: Vec::new(),
            search_input: String::new(),
            category_filter: None,
            form: FormState::default(),
            form_field: FormField::Title,
            editing_id: None,
            focus: Focus::Table,
            selected_row: 0,
            status_message: None,
            needs_redraw: true,
        }
    }

    /// The category label currently filtered on, or None for "All".
    pub fn category_filter_label(&self) -> Option<&str> {
        self.category_filter
            .and_then(|idx| self.categories.get(idx))
            .map(String::as_str)
    }

    /// The currently visible (filtered) product list, order preserved.
    pub fn visible_products(&self) -> Vec<&Product> {
        visible(
            &self.products,
            &self.search_input,
            self.category_filter_label(),
        )
    }

    /// Currently selected product in the visible list (bounds-checked).
    pub fn selected_product(&self) -> Option<&Product> {
        self.visible_products().get(self.selected_row).copied()
    }

    /// Clamp the table selection to the visible list.
    ///
    /// Call after any change to the product list or the filters; filtering
    /// can shrink the visible list underneath the selection.
    pub fn clamp_selection(&mut self) {
        let len = self.visible_products().len();
        self.selected_row = if len == 0 {
            0
        } else {
            self.selected_row.min(len - 1)
        };
    }

    /// Move table selection up.
    pub fn select_prev(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Move table selection down.
    pub fn select_next(&mut self) {
        let len = self.visible_products().len();
        if len > 0 {
            self.selected_row = self.selected_row.saturating_add(1).min(len - 1);
        }
    }

    /// Cycle the category filter forward: All → cat[0] → … → cat[n-1] → All.
    pub fn cycle_category_next(&mut self) {
        self.category_filter = match self.category_filter {
            None if self.categories.is_empty() => None,
            None => Some(0),
            Some(idx) if idx + 1 < self.categories.len() => Some(idx + 1),
            Some(_) => None,
        };
        self.clamp_selection();
    }

    /// Cycle the category filter backward.
    pub fn cycle_category_prev(&mut self) {
        self.category_filter = match self.category_filter {
            None if self.categories.is_empty() => None,
            None => Some(self.categories.len() - 1),
            Some(0) => None,
            Some(idx) => Some(idx - 1),
        };
        self.clamp_selection();
    }

    // ------------------------------------------------------------------
    // Mutations (applied only after a settled network call)
    // ------------------------------------------------------------------

    /// Create succeeded: prepend the server's product and reset the form.
    pub fn apply_created(&mut self, product: Product) {
        self.products.insert(0, product);
        self.form.clear();
        self.form_field = FormField::Title;
        self.clamp_selection();
    }

    /// Update succeeded: replace the matching entry with the server's
    /// product, clear the editing marker, reset the form.
    pub fn apply_updated(&mut self, product: Product) {
        if let Some(entry) = self.products.iter_mut().find(|p| p.id == product.id) {
            *entry = product;
        } else {
            // The row was removed while the update was in flight (e.g. a
            // concurrent delete settled first). Last response wins.
            tracing::debug!(id = product.id, "Updated product no longer in list");
        }
        self.editing_id = None;
        self.form.clear();
        self.form_field = FormField::Title;
        self.clamp_selection();
    }

    /// Delete succeeded: remove the matching entry.
    ///
    /// If the deleted product was being edited, the editing marker is also
    /// cleared and the form reset — a stale marker would turn the next
    /// submit into an update of a removed id.
    pub fn apply_deleted(&mut self, id: u64) {
        self.products.retain(|p| p.id != id);
        if self.editing_id == Some(id) {
            self.editing_id = None;
            self.form.clear();
            self.form_field = FormField::Title;
        }
        self.clamp_selection();
    }

    /// Enter edit mode for the selected row.
    ///
    /// Copies the product's editable fields into the form, overwriting any
    /// unsaved content. Pure local transition, no network call.
    pub fn begin_edit_selected(&mut self) -> bool {
        let Some(product) = self.selected_product().cloned() else {
            return false;
        };
        self.editing_id = Some(product.id);
        self.form = FormState {
            title: product.title,
            price: format_price(product.price),
            category: product.category,
        };
        self.form_field = FormField::Title;
        true
    }

    /// Leave edit mode without submitting, resetting the form.
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.form.clear();
        self.form_field = FormField::Title;
    }

    /// Submit button label: "Add" in create mode, "Update" in edit mode.
    pub fn submit_label(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Update"
        } else {
            "Add"
        }
    }

    /// Form panel heading.
    pub fn form_heading(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Edit Product"
        } else {
            "Add Product"
        }
    }

    // ------------------------------------------------------------------
    // Status messages
    // ------------------------------------------------------------------

    /// Set status message (will auto-expire after 3 seconds).
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired (older than 3 seconds).
    /// Returns true if a message was actually cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= 3 {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

/// Render a price for the form's text field without trailing noise:
/// whole prices as "10", fractional ones with their decimals.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{}", price as i64)
    } else {
        format!("{}", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::time::Duration;
    use tokio::time;
    use url::Url;

    fn test_app() -> App {
        let api = ApiClient::new(
            Url::parse("http://localhost:9").unwrap(),
            Duration::from_secs(1),
        )
        .unwrap();
        App::new(api)
    }

    fn product(id: u64, title: &str, price: f64, category: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            category: category.to_string(),
        }
    }

    fn sample_products() -> Vec<Product> {
        vec![
            product(1, "Hat", 10.0, "clothing"),
            product(2, "Mug", 5.0, "kitchen"),
        ]
    }

    // Filtering tests
    #[test]
    fn test_empty_filter_is_identity() {
        let products = sample_products();
        let vis = visible(&products, "", None);
        assert_eq!(vis.len(), 2);
        assert_eq!(vis[0].id, 1);
        assert_eq!(vis[1].id, 2);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let products = sample_products();
        let vis = visible(&products, "mu", None);
        assert_eq!(vis.len(), 1);
        assert_eq!(vis[0].id, 2);

        let vis = visible(&products, "MU", None);
        assert_eq!(vis.len(), 1);
        assert_eq!(vis[0].id, 2);
    }

    #[test]
    fn test_category_filter_is_exact_match() {
        let products = sample_products();
        let vis = visible(&products, "", Some("clothing"));
        assert_eq!(vis.len(), 1);
        assert_eq!(vis[0].id, 1);

        // No partial category matches
        let vis = visible(&products, "", Some("cloth"));
        assert!(vis.is_empty());
    }

    #[test]
    fn test_search_and_category_compose() {
        let mut products = sample_products();
        products.push(product(3, "Mug rack", 12.0, "clothing"));

        let vis = visible(&products, "mug", Some("clothing"));
        assert_eq!(vis.len(), 1);
        assert_eq!(vis[0].id, 3);
    }

    proptest! {
        // Visible list contains exactly the matching products, in input order.
        #[test]
        fn prop_visible_is_ordered_subset(
            titles in prop::collection::vec("[a-zA-Z]{0,6}", 0..20),
            search in "[a-zA-Z]{0,3}",
            pick_category in prop::bool::ANY,
        ) {
            let cats = ["clothing", "kitchen", "misc"];
            let products: Vec<Product> = titles
                .iter()
                .enumerate()
                .map(|(i, t)| product(i as u64, t, i as f64, cats[i % cats.len()]))
                .collect();
            let category = pick_category.then_some("kitchen");

            let vis = visible(&products, &search, category);

            let needle = search.to_lowercase();
            let expected: Vec<u64> = products
                .iter()
                .filter(|p| p.title.to_lowercase().contains(&needle))
                .filter(|p| category.is_none_or(|c| p.category == c))
                .map(|p| p.id)
                .collect();
            let got: Vec<u64> = vis.iter().map(|p| p.id).collect();
            prop_assert_eq!(got, expected);
        }
    }

    // Form validation tests
    #[test]
    fn test_form_requires_all_fields() {
        let form = FormState {
            title: "Shirt".to_string(),
            price: String::new(),
            category: "clothing".to_string(),
        };
        assert_eq!(form.to_draft(), Err("All fields are required"));
    }

    #[test]
    fn test_form_rejects_non_numeric_price() {
        let form = FormState {
            title: "Shirt".to_string(),
            price: "cheap".to_string(),
            category: "clothing".to_string(),
        };
        assert_eq!(form.to_draft(), Err("Price must be a number"));
    }

    #[test]
    fn test_form_rejects_negative_price() {
        let form = FormState {
            title: "Shirt".to_string(),
            price: "-1".to_string(),
            category: "clothing".to_string(),
        };
        assert!(form.to_draft().is_err());
    }

    #[test]
    fn test_form_builds_draft() {
        let form = FormState {
            title: "Shirt".to_string(),
            price: "19.99".to_string(),
            category: "clothing".to_string(),
        };
        let draft = form.to_draft().unwrap();
        assert_eq!(draft.title, "Shirt");
        assert_eq!(draft.price, 19.99);
        assert_eq!(draft.category, "clothing");
    }

    // Mutation tests
    #[test]
    fn test_apply_created_prepends_and_resets_form() {
        let mut app = test_app();
        app.products = sample_products();
        app.form = FormState {
            title: "Shirt".to_string(),
            price: "19.99".to_string(),
            category: "clothing".to_string(),
        };

        app.apply_created(product(31, "Shirt", 19.99, "clothing"));

        assert_eq!(app.products.len(), 3);
        assert_eq!(app.products[0].id, 31); // Prepended
        assert_eq!(app.form, FormState::default());
    }

    #[test]
    fn test_apply_updated_replaces_by_id_and_clears_marker() {
        let mut app = test_app();
        app.products = sample_products();
        app.editing_id = Some(1);
        app.form.title = "New Title".to_string();

        app.apply_updated(product(1, "New Title", 10.0, "clothing"));

        assert_eq!(app.products.len(), 2);
        assert_eq!(app.products[0].title, "New Title");
        assert_eq!(app.products[1].id, 2); // Others untouched
        assert_eq!(app.editing_id, None);
        assert_eq!(app.form, FormState::default());
    }

    #[test]
    fn test_apply_updated_missing_id_leaves_list_alone() {
        let mut app = test_app();
        app.products = sample_products();

        app.apply_updated(product(99, "Ghost", 1.0, "misc"));

        assert_eq!(app.products.len(), 2);
        assert!(app.products.iter().all(|p| p.id != 99));
    }

    #[test]
    fn test_apply_deleted_removes_exactly_one() {
        let mut app = test_app();
        app.products = sample_products();

        app.apply_deleted(2);

        assert_eq!(app.products.len(), 1);
        assert_eq!(app.products[0].id, 1);
    }

    #[test]
    fn test_apply_deleted_clears_editing_marker_for_deleted_row() {
        let mut app = test_app();
        app.products = sample_products();
        assert!(app.begin_edit_selected());
        assert_eq!(app.editing_id, Some(1));

        app.apply_deleted(1);

        assert_eq!(app.editing_id, None);
        assert_eq!(app.form, FormState::default());
    }

    #[test]
    fn test_apply_deleted_keeps_marker_for_other_rows() {
        let mut app = test_app();
        app.products = sample_products();
        app.editing_id = Some(1);
        app.form.title = "in progress".to_string();

        app.apply_deleted(2);

        assert_eq!(app.editing_id, Some(1));
        assert_eq!(app.form.title, "in progress");
    }

    // Edit initiation tests
    #[test]
    fn test_begin_edit_copies_fields_into_form() {
        let mut app = test_app();
        app.products = sample_products();
        app.form.title = "unsaved draft".to_string();
        app.selected_row = 1;

        assert!(app.begin_edit_selected());

        assert_eq!(app.editing_id, Some(2));
        assert_eq!(app.form.title, "Mug"); // Unsaved content overwritten
        assert_eq!(app.form.price, "5");
        assert_eq!(app.form.category, "kitchen");
        assert_eq!(app.submit_label(), "Update");
        assert_eq!(app.form_heading(), "Edit Product");
    }

    #[test]
    fn test_begin_edit_on_empty_list_is_noop() {
        let mut app = test_app();
        assert!(!app.begin_edit_selected());
        assert_eq!(app.editing_id, None);
        assert_eq!(app.submit_label(), "Add");
    }

    #[test]
    fn test_begin_edit_respects_filter() {
        let mut app = test_app();
        app.products = sample_products();
        app.search_input = "mu".to_string();
        app.selected_row = 0; // First *visible* row is the Mug

        assert!(app.begin_edit_selected());
        assert_eq!(app.editing_id, Some(2));
    }

    // Selection tests
    #[test]
    fn test_clamp_selection_after_filter_shrinks_list() {
        let mut app = test_app();
        app.products = sample_products();
        app.selected_row = 1;

        app.search_input = "hat".to_string();
        app.clamp_selection();

        assert_eq!(app.selected_row, 0);
    }

    #[test]
    fn test_select_next_stops_at_end() {
        let mut app = test_app();
        app.products = sample_products();
        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected_row, 1);
    }

    // Category cycling tests
    #[test]
    fn test_cycle_category_wraps_through_all() {
        let mut app = test_app();
        app.categories = vec!["clothing".to_string(), "kitchen".to_string()];

        assert_eq!(app.category_filter_label(), None);
        app.cycle_category_next();
        assert_eq!(app.category_filter_label(), Some("clothing"));
        app.cycle_category_next();
        assert_eq!(app.category_filter_label(), Some("kitchen"));
        app.cycle_category_next();
        assert_eq!(app.category_filter_label(), None); // Back to All
    }

    #[test]
    fn test_cycle_category_with_no_categories() {
        let mut app = test_app();
        app.cycle_category_next();
        assert_eq!(app.category_filter, None);
        app.cycle_category_prev();
        assert_eq!(app.category_filter, None);
    }

    // Concrete scenario: two products, search then category filter
    #[test]
    fn test_search_then_category_scenario() {
        let mut app = test_app();
        app.products = sample_products();
        app.categories = vec!["clothing".to_string(), "kitchen".to_string()];

        app.search_input = "mu".to_string();
        let vis = app.visible_products();
        assert_eq!(vis.len(), 1);
        assert_eq!(vis[0].id, 2);

        app.search_input.clear();
        app.category_filter = Some(0); // "clothing"
        let vis = app.visible_products();
        assert_eq!(vis.len(), 1);
        assert_eq!(vis[0].id, 1);
    }

    // Status message expiry with time control
    #[tokio::test]
    async fn test_status_expires_after_3_seconds() {
        let mut app = test_app();
        time::pause();
        app.set_status("Test message");

        assert!(app.status_message.is_some());

        time::advance(Duration::from_secs(2)).await;
        app.clear_expired_status();
        assert!(app.status_message.is_some()); // Still present at 2s

        time::advance(Duration::from_secs(2)).await;
        app.clear_expired_status();
        assert!(app.status_message.is_none()); // Expired after 3s
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(10.0), "10");
        assert_eq!(format_price(19.99), "19.99");
    }
}
