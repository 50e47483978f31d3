//! Product catalog.
//!
//! The catalog is read-only for the lifetime of the process: products are
//! loaded once at startup and handed out by reference. The cart stores its
//! own snapshot of a product at add time, so nothing here is mutated by
//! cart operations.

use kranian_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Flowers,
    Bouquets,
    Vegetables,
    Herbs,
}

impl Category {
    /// Lowercase name, matching catalog URLs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flowers => "flowers",
            Self::Bouquets => "bouquets",
            Self::Vegetables => "vegetables",
            Self::Herbs => "herbs",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: Category,
    pub in_stock: bool,
    /// Path to the product image, relative to the static root.
    pub image: String,
    pub description: String,
    /// Featured on the home page.
    pub bestseller: bool,
}

/// The product catalog: loaded once, read from everywhere.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a list of products.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in Kranian Farms product range.
    #[must_use]
    pub fn kranian() -> Self {
        Self::new(demo_products())
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in a category, in catalog order.
    pub fn get_by_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Products featured on the home page.
    pub fn bestsellers(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.bestseller)
    }

    /// Same-category products shown under "You may also like", excluding
    /// the product itself.
    #[must_use]
    pub fn related(&self, id: ProductId, limit: usize) -> Vec<&Product> {
        let Some(product) = self.get_by_id(id) else {
            return Vec::new();
        };
        self.get_by_category(product.category)
            .filter(|p| p.id != id)
            .take(limit)
            .collect()
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }
}

/// Kenyan shilling price helper for the built-in catalog.
fn kes(amount_cents: i64) -> Price {
    Price::new(
        rust_decimal::Decimal::new(amount_cents, 2),
        kranian_core::CurrencyCode::KES,
    )
}

fn demo_products() -> Vec<Product> {
    let product = |id: i32,
                   name: &str,
                   price: Price,
                   category: Category,
                   image: &str,
                   description: &str,
                   bestseller: bool| Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price,
        category,
        in_stock: true,
        image: format!("images/products/{image}"),
        description: description.to_string(),
        bestseller,
    };

    vec![
        product(
            1,
            "Red Naomi Roses",
            kes(45_000),
            Category::Flowers,
            "red-naomi-roses.jpg",
            "Premium long-stemmed red roses grown at high altitude.",
            true,
        ),
        product(
            2,
            "White Athena Roses",
            kes(42_000),
            Category::Flowers,
            "white-athena-roses.jpg",
            "Elegant white roses with large heads, ideal for events.",
            true,
        ),
        product(
            3,
            "Pink Carnations",
            kes(28_000),
            Category::Flowers,
            "pink-carnations.jpg",
            "Ruffled carnations with a long vase life.",
            false,
        ),
        product(
            5,
            "Oriental Lilies",
            kes(55_000),
            Category::Flowers,
            "oriental-lilies.jpg",
            "Fragrant lilies shipped in bud for maximum freshness.",
            true,
        ),
        product(
            7,
            "Summer Garden Bouquet",
            kes(85_000),
            Category::Bouquets,
            "summer-garden-bouquet.jpg",
            "A mixed seasonal bouquet arranged by our florists.",
            true,
        ),
        product(
            9,
            "Baby's Breath",
            kes(18_000),
            Category::Flowers,
            "babys-breath.jpg",
            "Delicate filler stems, sold in generous bunches.",
            false,
        ),
        product(
            11,
            "French Beans",
            kes(12_000),
            Category::Vegetables,
            "french-beans.jpg",
            "Extra-fine beans packed for export the day they are picked.",
            false,
        ),
        product(
            12,
            "Fresh Basil",
            kes(9_500),
            Category::Herbs,
            "fresh-basil.jpg",
            "Aromatic sweet basil from our Hurlingham greenhouses.",
            false,
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::kranian();
        let product = catalog.get_by_id(ProductId::new(7)).unwrap();
        assert_eq!(product.name, "Summer Garden Bouquet");
        assert!(catalog.get_by_id(ProductId::new(999)).is_none());
    }

    #[test]
    fn test_get_by_category() {
        let catalog = Catalog::kranian();
        let flowers: Vec<_> = catalog.get_by_category(Category::Flowers).collect();
        assert!(flowers.iter().all(|p| p.category == Category::Flowers));
        assert!(flowers.len() >= 4);
    }

    #[test]
    fn test_bestsellers_are_flagged() {
        let catalog = Catalog::kranian();
        let bestsellers: Vec<_> = catalog.bestsellers().collect();
        assert!(!bestsellers.is_empty());
        assert!(bestsellers.iter().all(|p| p.bestseller));
    }

    #[test]
    fn test_related_excludes_self() {
        let catalog = Catalog::kranian();
        let related = catalog.related(ProductId::new(1), 3);
        assert!(!related.is_empty());
        assert!(related.iter().all(|p| p.id != ProductId::new(1)));
        assert!(related.iter().all(|p| p.category == Category::Flowers));
    }

    #[test]
    fn test_related_unknown_product_is_empty() {
        let catalog = Catalog::kranian();
        assert!(catalog.related(ProductId::new(404), 3).is_empty());
    }
}
