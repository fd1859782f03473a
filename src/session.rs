//! Shopping session state
//!
//! The presentation-facing side of the store: a catalog snapshot fetched at
//! startup, a loading flag, and the cart the user mutates. All cart edits
//! are local and synchronous; only the catalog fetch and the checkout
//! submission touch the network.

use rust_decimal::Decimal;

use crate::client::{ApiClient, ClientError};
use crate::domain::{Cart, CartItem, Product};
use crate::routes::CheckoutResponse;

pub struct StoreSession {
    client: ApiClient,
    catalog: Vec<Product>,
    cart: Cart,
    loading: bool,
}

impl StoreSession {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            catalog: vec![],
            cart: Cart::new(),
            loading: true,
        }
    }

    /// Fetches the catalog. A failed fetch leaves the catalog empty; the
    /// loading flag clears either way and the session stays usable.
    pub async fn load_catalog(&mut self) {
        match self.client.fetch_products().await {
            Ok(products) => self.catalog = products,
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch catalog");
                self.catalog.clear();
            }
        }
        self.loading = false;
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn find_product(&self, id: &str) -> Option<&Product> {
        self.catalog.iter().find(|p| p.id == id)
    }

    /// Adds one unit of the catalog product with this id to the cart.
    /// Returns false when the id is not in the catalog.
    pub fn add_to_cart(&mut self, id: &str) -> bool {
        match self.find_product(id).cloned() {
            Some(product) => {
                self.cart.add(product);
                true
            }
            None => false,
        }
    }

    pub fn remove_from_cart(&mut self, id: &str) {
        self.cart.remove(id);
    }

    pub fn update_quantity(&mut self, id: &str, delta: i64) {
        self.cart.update_quantity(id, delta);
    }

    pub fn cart_items(&self) -> Vec<&CartItem> {
        self.cart.items()
    }

    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    /// Submits the cart. A successful checkout clears the cart; a failed one
    /// leaves it untouched so the user can retry.
    pub async fn checkout(&mut self) -> Result<CheckoutResponse, ClientError> {
        let confirmation = self
            .client
            .submit_checkout(self.cart.lines(), self.cart.total())
            .await?;
        self.cart.clear();
        Ok(confirmation)
    }
}
