use crate::model::{Product, ProductDraft};

/// In-memory product store
///
/// Holds products in insertion order; the list operation exposes that order
/// verbatim. Identifiers are assigned on create as one more than the current
/// maximum (1 when empty), so they stay unique even after deletions —
/// deriving ids from the collection length would collide once a record is
/// removed.
///
/// The store itself is not synchronized; callers running on a multi-threaded
/// server wrap it in a lock (see [`crate::state::AppState`]) and hold a
/// single write guard across any check-then-act sequence.
#[derive(Debug, Default)]
pub struct ProductStore {
    items: Vec<Product>,
}

impl ProductStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the sample catalog
    pub fn with_catalog() -> Self {
        Self {
            items: vec![
                Product {
                    id: 1,
                    name: "Laptop".to_string(),
                    description: "A high-performance laptop with 16GB RAM".to_string(),
                    price: 1200.0,
                    category: "Electronics".to_string(),
                    in_stock: true,
                },
                Product {
                    id: 2,
                    name: "Smartphone".to_string(),
                    description: "Latest model with 128GB storage".to_string(),
                    price: 800.0,
                    category: "Electronics".to_string(),
                    in_stock: true,
                },
                Product {
                    id: 3,
                    name: "Coffee Maker".to_string(),
                    description: "Programmable coffee maker with timer".to_string(),
                    price: 50.0,
                    category: "Kitchen".to_string(),
                    in_stock: false,
                },
            ],
        }
    }

    /// All products in insertion order
    pub fn list(&self) -> &[Product] {
        &self.items
    }

    /// Look up a product by id
    pub fn get(&self, id: u64) -> Option<&Product> {
        self.items.iter().find(|p| p.id == id)
    }

    /// Insert a new product, assigning a fresh id
    pub fn create(&mut self, draft: ProductDraft) -> Product {
        let product = Product {
            id: self.next_id(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            in_stock: draft.in_stock,
        };
        self.items.push(product.clone());
        product
    }

    /// Replace the mutable fields of an existing product in place
    ///
    /// The id is immutable. Returns `None` when no product has the given id.
    pub fn update(&mut self, id: u64, draft: ProductDraft) -> Option<Product> {
        let product = self.items.iter_mut().find(|p| p.id == id)?;
        product.name = draft.name;
        product.description = draft.description;
        product.price = draft.price;
        product.category = draft.category;
        product.in_stock = draft.in_stock;
        Some(product.clone())
    }

    /// Remove a product by id; `false` when absent
    pub fn delete(&mut self, id: u64) -> bool {
        match self.items.iter().position(|p| p.id == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    fn next_id(&self) -> u64 {
        self.items.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            description: "A sufficiently long description".to_string(),
            price: 10.0,
            category: "Test".to_string(),
            in_stock: true,
        }
    }

    #[test]
    fn test_empty_store_assigns_id_one() {
        let mut store = ProductStore::new();
        let product = store.create(draft("First"));
        assert_eq!(product.id, 1);
    }

    #[test]
    fn test_create_appends_in_insertion_order() {
        let mut store = ProductStore::with_catalog();
        let product = store.create(draft("Kettle"));
        assert_eq!(product.id, 4);
        let ids: Vec<u64> = store.list().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_ids_stay_unique_after_middle_deletion() {
        let mut store = ProductStore::with_catalog();
        assert!(store.delete(2));
        // Length-derived ids would collide with the surviving id 3 here.
        let product = store.create(draft("Blender"));
        assert_eq!(product.id, 4);
        assert!(store.get(3).is_some());
        assert!(store.get(4).is_some());
    }

    #[test]
    fn test_get_uses_numeric_equality() {
        let store = ProductStore::with_catalog();
        assert_eq!(store.get(2).map(|p| p.name.as_str()), Some("Smartphone"));
        assert!(store.get(99).is_none());
    }

    #[test]
    fn test_update_keeps_id_immutable() {
        let mut store = ProductStore::with_catalog();
        let updated = store.update(2, draft("Tablet")).unwrap();
        assert_eq!(updated.id, 2);
        assert_eq!(updated.name, "Tablet");
        assert_eq!(store.get(2).unwrap().name, "Tablet");
    }

    #[test]
    fn test_update_missing_id_is_none() {
        let mut store = ProductStore::with_catalog();
        assert!(store.update(99, draft("Ghost")).is_none());
        assert_eq!(store.list().len(), 3);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = ProductStore::with_catalog();
        assert!(store.delete(3));
        assert_eq!(store.list().len(), 2);
        // Not idempotent: the record is already gone.
        assert!(!store.delete(3));
    }
}
