//! End-to-end cart flows: quoting against the real catalog, persistence
//! across simulated restarts, and recovery from a damaged cart blob.

use kranian_core::{CurrencyCode, ProductId};
use kranian_storefront::cart::{
    CART_STORAGE_KEY, CartManager, CartStore, FileStore, HeadSize, LogSink,
};
use kranian_storefront::{AppState, Catalog, StorefrontConfig};
use kranian_storefront::content::ContentStore;

fn file_manager(dir: &std::path::Path) -> CartManager {
    CartManager::new(
        Box::new(FileStore::new(dir.to_path_buf())),
        Box::new(LogSink),
        CurrencyCode::KES,
    )
}

#[test]
fn cart_survives_a_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bouquet;

    {
        let catalog = Catalog::kranian();
        bouquet = catalog
            .get_by_id(ProductId::new(7))
            .expect("demo bouquet")
            .clone();

        let mut cart = file_manager(dir.path());
        cart.add_item(&bouquet, 1, None, None);
        cart.add_item(&bouquet, 2, Some(80), None);
        cart.remove_item(ProductId::new(3)); // not in the cart
        cart.update_head_size(ProductId::new(7), HeadSize::Large);
        // manager dropped here: "session ends"
    }

    let cart = file_manager(dir.path());
    assert_eq!(cart.item_count(), 1);

    let item = &cart.items()[0];
    assert_eq!(item.product.id, ProductId::new(7));
    assert_eq!(item.quantity, 3);
    assert_eq!(item.stem_length, 80);
    assert_eq!(item.head_size, HeadSize::Large);
    assert_eq!(cart.total().amount, bouquet.price.extended(3));
}

#[test]
fn cleared_cart_stays_cleared() {
    let dir = tempfile::tempdir().expect("tempdir");
    let catalog = Catalog::kranian();
    let lilies = catalog.get_by_id(ProductId::new(5)).expect("lilies");
    let gypsophila = catalog.get_by_id(ProductId::new(9)).expect("baby's breath");

    {
        let mut cart = file_manager(dir.path());
        cart.add_item(lilies, 1, None, None);
        cart.add_item(gypsophila, 1, None, None);
        cart.clear();
    }

    let cart = file_manager(dir.path());
    assert!(cart.is_empty());
    assert_eq!(cart.item_count(), 0);
    assert_eq!(cart.total().amount, rust_decimal::Decimal::ZERO);
}

#[test]
fn damaged_cart_blob_starts_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileStore::new(dir.path().to_path_buf());
    store
        .save(CART_STORAGE_KEY, b"\xff\xfe definitely not json")
        .expect("seed damaged blob");

    let cart = file_manager(dir.path());
    assert!(cart.is_empty());
}

#[test]
fn app_state_wires_cart_to_the_data_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = StorefrontConfig {
        data_dir: dir.path().to_path_buf(),
        currency: CurrencyCode::KES,
    };

    {
        let state = AppState::new(config.clone());
        let rose = state
            .catalog()
            .get_by_id(ProductId::new(1))
            .cloned()
            .expect("demo rose");
        state.cart().add_item(&rose, 2, None, None);
    }

    // A fresh state over the same data dir sees the same quote.
    let state = AppState::new(config);
    assert_eq!(state.cart().item_count(), 1);
    assert_eq!(state.cart().items()[0].quantity, 2);

    // Sidebar and contact data are available to the view layer too.
    assert!(!ContentStore::kranian().recent_posts(3).is_empty());
    assert!(state.catalog().bestsellers().count() >= 3);
}
