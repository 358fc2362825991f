use crate::config::toml_config::ProductEntry;
use crate::domain::model::Product;
use crate::utils::error::{FeedbackError, Result};

const SEED_PRODUCTS: [(&str, &str); 3] = [
    ("RING001", "Aurora Gold Ring"),
    ("EARR002", "Luna Silver Earrings"),
    ("NECK003", "Solstice Necklace"),
];

/// Read-only product catalog. Ids are assigned from 1 in listing order.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Catalog {
    pub fn seeded() -> Self {
        Self::from_pairs(SEED_PRODUCTS.iter().map(|(sku, name)| (*sku, *name)))
    }

    /// Builds the catalog from config entries, falling back to the seed
    /// products when none are configured.
    pub fn from_entries(entries: &[ProductEntry]) -> Self {
        if entries.is_empty() {
            tracing::debug!("No products configured, using seed catalog");
            return Self::seeded();
        }
        Self::from_pairs(entries.iter().map(|e| (e.sku.as_str(), e.name.as_str())))
    }

    fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let products = pairs
            .into_iter()
            .zip(1u32..)
            .map(|((sku, name), id)| Product {
                id,
                sku: sku.to_string(),
                name: name.to_string(),
            })
            .collect();
        Self { products }
    }

    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn find_by_sku(&self, sku: &str) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.sku == sku)
            .ok_or_else(|| FeedbackError::UnknownProduct {
                sku: sku.to_string(),
            })
    }

    pub fn get(&self, id: u32) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(FeedbackError::ProductNotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.list().len(), 3);

        let ring = catalog.find_by_sku("RING001").unwrap();
        assert_eq!(ring.id, 1);
        assert_eq!(ring.name, "Aurora Gold Ring");
        assert_eq!(catalog.get(3).unwrap().sku, "NECK003");
    }

    #[test]
    fn test_configured_entries_replace_seed() {
        let entries = vec![ProductEntry {
            sku: "BRAC004".to_string(),
            name: "Equinox Bracelet".to_string(),
        }];
        let catalog = Catalog::from_entries(&entries);

        assert_eq!(catalog.list().len(), 1);
        assert_eq!(catalog.find_by_sku("BRAC004").unwrap().id, 1);
        assert!(catalog.find_by_sku("RING001").is_err());
    }

    #[test]
    fn test_lookups_are_exact() {
        let catalog = Catalog::seeded();
        assert!(matches!(
            catalog.find_by_sku("ring001"),
            Err(FeedbackError::UnknownProduct { .. })
        ));
        assert!(matches!(
            catalog.get(0),
            Err(FeedbackError::ProductNotFound { id: 0 })
        ));
    }
}
