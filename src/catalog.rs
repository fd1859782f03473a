//! Read-only product catalog
//!
//! The catalog is constructed once at startup and handed to the handlers
//! through shared state rather than living in a module-level global. After
//! construction it is never mutated.

use std::collections::HashMap;
use std::path::Path;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::Product;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The full product list plus an id index for lookups.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        let index = products
            .iter()
            .enumerate()
            .map(|(pos, p)| (p.id.clone(), pos))
            .collect();
        Self { products, index }
    }

    /// Loads the catalog from a JSON array of products. A file that does not
    /// read or parse is a startup error, never a runtime one.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let products: Vec<Product> = serde_json::from_str(&raw)?;
        Ok(Self::new(products))
    }

    /// The built-in demo catalog.
    pub fn builtin() -> Self {
        Self::new(vec![
            Product {
                id: "1".into(),
                name: "Brass Diya".into(),
                description: "Handcrafted traditional brass diya for your daily pooja.".into(),
                price: Decimal::new(1599, 2),
                image: "https://images.unsplash.com/photo-1605142859862-978be7eba909?auto=format&fit=crop&q=80&w=400".into(),
                category: "Diya".into(),
            },
            Product {
                id: "2".into(),
                name: "Incense Sticks (Agarbatti)".into(),
                description: "Fragrant sandalwood incense sticks for a peaceful atmosphere.".into(),
                price: Decimal::new(549, 2),
                image: "https://images.unsplash.com/photo-1602810318383-e386cc2a3ccf?auto=format&fit=crop&q=80&w=400".into(),
                category: "Incense".into(),
            },
            Product {
                id: "3".into(),
                name: "Pooja Thali Set".into(),
                description: "Complete stainless steel pooja thali with all essentials.".into(),
                price: Decimal::new(2999, 2),
                image: "https://images.unsplash.com/photo-1561336313-0bd5e0b27ec8?auto=format&fit=crop&q=80&w=400".into(),
                category: "Thali".into(),
            },
            Product {
                id: "4".into(),
                name: "Ganesh Idol".into(),
                description: "Beautifully carved marble Ganesh idol for your home altar.".into(),
                price: Decimal::new(4500, 2),
                image: "https://images.unsplash.com/photo-1567591974574-e85263d493ad?auto=format&fit=crop&q=80&w=400".into(),
                category: "Idols".into(),
            },
        ])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.index.get(id).and_then(|&pos| self.products.get(pos))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
