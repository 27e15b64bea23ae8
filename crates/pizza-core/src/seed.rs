//! # Default Catalog
//!
//! The starter menu used when no catalog file exists yet.

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::Catalog;

/// Default pizzas in menu order, priced in cents.
pub const DEFAULT_PIZZAS: &[(&str, i64)] = &[
    ("Margherita", 1000),
    ("Pepperoni", 1250),
    ("Hawaiian", 1300),
    ("Quattro Stagioni", 1450),
    ("Vegetarian", 1150),
    ("Meat Lovers", 1600),
];

/// Builds the six-pizza starter catalog.
///
/// Goes through [`Catalog::add`] so the defaults obey the same name, price,
/// uniqueness and capacity rules as anything a user adds.
pub fn default_catalog() -> CoreResult<Catalog> {
    let mut catalog = Catalog::new();
    seed_defaults(&mut catalog)?;
    Ok(catalog)
}

/// Appends the default pizzas to an existing catalog.
pub fn seed_defaults(catalog: &mut Catalog) -> CoreResult<()> {
    for (name, cents) in DEFAULT_PIZZAS {
        catalog.add(name, Money::from_cents(*cents))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_contents() {
        let catalog = default_catalog().unwrap();

        let entries: Vec<(&str, i64, bool)> = catalog
            .iter()
            .map(|p| (p.name.as_str(), p.price.cents(), p.available))
            .collect();

        assert_eq!(
            entries,
            vec![
                ("Margherita", 1000, true),
                ("Pepperoni", 1250, true),
                ("Hawaiian", 1300, true),
                ("Quattro Stagioni", 1450, true),
                ("Vegetarian", 1150, true),
                ("Meat Lovers", 1600, true),
            ]
        );
    }

    #[test]
    fn test_seeding_twice_hits_uniqueness_rule() {
        let mut catalog = default_catalog().unwrap();
        assert!(seed_defaults(&mut catalog).is_err());
        assert_eq!(catalog.len(), DEFAULT_PIZZAS.len());
    }
}
