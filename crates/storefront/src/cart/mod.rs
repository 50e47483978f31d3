//! The quotation cart.
//!
//! Kranian Farms sells by quote request: the cart collects line items with
//! per-item attributes (stem length, head size) that the sales team prices
//! later. The manager owns the in-memory line items, mirrors every mutation
//! to a [`CartStore`], and emits a [`NotificationSink`] event per change.
//!
//! In-memory state is the source of truth. Storage is a best-effort mirror:
//! a failed save is logged and never rolled back, and an unreadable persisted
//! blob hydrates as an empty cart.

pub mod notify;
pub mod store;

use kranian_core::{CurrencyCode, Price, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
pub use notify::{LogSink, NotificationKind, NotificationSink};
pub use store::{CartStore, FileStore, MemoryStore, StoreError};

/// Fixed storage key for the persisted cart blob. Owned exclusively by the
/// cart manager; no other component reads or writes it.
pub const CART_STORAGE_KEY: &str = "kranian_cart";

/// Stem length (cm) applied when a flower is first added without one.
pub const DEFAULT_STEM_LENGTH: u32 = 60;

/// Flower head size options offered on the product page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HeadSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl std::fmt::Display for HeadSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        })
    }
}

/// One product entry in the cart.
///
/// Holds a snapshot of the product taken at add time, so later catalog
/// changes never rewrite a quote in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product: Product,
    /// Always >= 1 while the item is in the cart.
    pub quantity: u32,
    /// Stem length in cm.
    pub stem_length: u32,
    pub head_size: HeadSize,
}

impl CartLineItem {
    /// Extended amount for this line: unit price x quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.extended(self.quantity)
    }
}

/// Owns the cart line items and keeps derived aggregates consistent.
///
/// Constructed once per session via [`CartManager::new`], which hydrates from
/// the store before any mutation is reachable. All operations are synchronous
/// and observed in invocation order; there is exactly one in-process writer.
pub struct CartManager {
    items: Vec<CartLineItem>,
    currency: CurrencyCode,
    store: Box<dyn CartStore>,
    sink: Box<dyn NotificationSink>,
}

impl std::fmt::Debug for CartManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartManager")
            .field("items", &self.items)
            .field("currency", &self.currency)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl CartManager {
    /// Create a manager, hydrating once from the store.
    ///
    /// A missing key or an unreadable blob both yield an empty cart; neither
    /// is surfaced to the caller.
    #[must_use]
    pub fn new(
        store: Box<dyn CartStore>,
        sink: Box<dyn NotificationSink>,
        currency: CurrencyCode,
    ) -> Self {
        let items = hydrate(store.as_ref());
        Self {
            items,
            currency,
            store,
            sink,
        }
    }

    /// Add `quantity` units of a product to the quote.
    ///
    /// If the product is already in the cart the quantities merge and the
    /// attributes are overwritten only when supplied; otherwise a new line is
    /// appended with `stem_length` defaulting to [`DEFAULT_STEM_LENGTH`] and
    /// `head_size` to [`HeadSize::Medium`].
    ///
    /// `quantity == 0` is rejected as a logged no-op; the UI boundary is
    /// expected to keep it out.
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: u32,
        stem_length: Option<u32>,
        head_size: Option<HeadSize>,
    ) {
        if quantity == 0 {
            tracing::warn!(product = %product.id, "ignoring add with zero quantity");
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity = item.quantity.saturating_add(quantity);
            if let Some(stem_length) = stem_length {
                item.stem_length = stem_length;
            }
            if let Some(head_size) = head_size {
                item.head_size = head_size;
            }
            self.sink.notify(
                NotificationKind::Updated,
                &format!("Updated quantity of {} in your quotation.", product.name),
            );
        } else {
            self.items.push(CartLineItem {
                product: product.clone(),
                quantity,
                stem_length: stem_length.unwrap_or(DEFAULT_STEM_LENGTH),
                head_size: head_size.unwrap_or_default(),
            });
            self.sink.notify(
                NotificationKind::Added,
                &format!("{} has been added to your quote.", product.name),
            );
        }

        self.persist();
    }

    /// Remove a product's line item. Idempotent: absent ids are a no-op.
    pub fn remove_item(&mut self, product_id: ProductId) {
        let Some(pos) = self.items.iter().position(|i| i.product.id == product_id) else {
            return;
        };
        let removed = self.items.remove(pos);
        self.sink.notify(
            NotificationKind::Removed,
            &format!("{} has been removed from your cart.", removed.product.name),
        );
        self.persist();
    }

    /// Set a line item's quantity (absolute, not a delta).
    ///
    /// A quantity of zero or below means "take it out" and delegates to
    /// [`Self::remove_item`]. Unknown ids are a no-op. Quantities above
    /// `u32::MAX` are clamped to `u32::MAX`.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
            self.persist();
        }
    }

    /// Set a line item's stem length. Unknown ids are a no-op.
    pub fn update_stem_length(&mut self, product_id: ProductId, stem_length: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.stem_length = stem_length;
            self.persist();
        }
    }

    /// Set a line item's head size. Unknown ids are a no-op.
    pub fn update_head_size(&mut self, product_id: ProductId, head_size: HeadSize) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.head_size = head_size;
            self.persist();
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
        self.sink.notify(
            NotificationKind::Cleared,
            "All items have been removed from your cart.",
        );
        self.persist();
    }

    /// Sum of unit price x quantity over all line items.
    #[must_use]
    pub fn total(&self) -> Price {
        let amount: Decimal = self.items.iter().map(CartLineItem::line_total).sum();
        Price::new(amount, self.currency)
    }

    /// Number of distinct line items (not the sum of quantities).
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Write the full cart snapshot to the store, best-effort.
    fn persist(&self) {
        let bytes = match serde_json::to_vec(&self.items) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize cart, skipping save");
                return;
            }
        };
        if let Err(e) = self.store.save(CART_STORAGE_KEY, &bytes) {
            tracing::warn!(error = %e, "failed to persist cart");
        }
    }
}

/// One-time load of the persisted cart. Never fails past this boundary.
fn hydrate(store: &dyn CartStore) -> Vec<CartLineItem> {
    match store.load(CART_STORAGE_KEY) {
        Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(error = %e, "persisted cart is unreadable, starting empty");
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to load persisted cart, starting empty");
            Vec::new()
        }
    }
}
