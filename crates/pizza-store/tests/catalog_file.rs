use std::fs;

use pizza_core::seed::default_catalog;
use pizza_core::{Catalog, Money, Order, PizzaType};
use pizza_store::{CatalogOrigin, CatalogStore};
use tempfile::TempDir;

fn entries(catalog: &Catalog) -> Vec<(String, i64, bool)> {
    catalog
        .iter()
        .map(|p| (p.name.clone(), p.price.cents(), p.available))
        .collect()
}

#[test]
fn first_run_seeds_and_persists_defaults() {
    let dir = TempDir::new().unwrap();
    let store = CatalogStore::new(dir.path().join("pizza_menu.txt"));

    let loaded = store.load();
    assert!(!loaded.found);
    assert!(loaded.catalog.is_empty());

    let opened = store.load_or_seed().unwrap();
    assert!(matches!(opened.origin, CatalogOrigin::Seeded));
    assert_eq!(opened.catalog, default_catalog().unwrap());

    let reloaded = store.load();
    assert!(reloaded.found);
    assert_eq!(reloaded.catalog, default_catalog().unwrap());
}

#[test]
fn second_run_reads_file_instead_of_seeding() {
    let dir = TempDir::new().unwrap();
    let store = CatalogStore::new(dir.path().join("pizza_menu.txt"));

    let mut catalog = store.load_or_seed().unwrap().catalog;
    catalog.remove("Hawaiian").unwrap();
    store.save(&catalog).unwrap();

    let opened = store.load_or_seed().unwrap();
    assert!(matches!(opened.origin, CatalogOrigin::File));
    assert_eq!(opened.catalog.len(), 5);
    assert!(opened.catalog.find_by_name("Hawaiian").is_none());
}

#[test]
fn empty_file_stays_empty() {
    let dir = TempDir::new().unwrap();
    let store = CatalogStore::new(dir.path().join("pizza_menu.txt"));
    fs::write(store.path(), "").unwrap();

    let opened = store.load_or_seed().unwrap();
    assert!(matches!(opened.origin, CatalogOrigin::File));
    assert!(opened.catalog.is_empty());
}

#[test]
fn save_then_load_preserves_order_and_flags() {
    let dir = TempDir::new().unwrap();
    let store = CatalogStore::new(dir.path().join("pizza_menu.txt"));

    let mut catalog = default_catalog().unwrap();
    catalog.add("Diavola", Money::from_cents(1350)).unwrap();
    catalog.set_available("Pepperoni", false).unwrap();
    catalog.remove("Margherita").unwrap();
    store.save(&catalog).unwrap();

    let loaded = store.load();
    assert_eq!(entries(&loaded.catalog), entries(&catalog));
    assert_eq!(loaded.catalog.pizzas()[0].name, "Pepperoni");
    assert!(!loaded.catalog.pizzas()[0].available);
    assert_eq!(loaded.catalog.pizzas()[5].name, "Diavola");
}

#[test]
fn failed_save_leaves_previous_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pizza_menu.txt");
    fs::write(&path, "Margherita,10.00,1\n").unwrap();

    // A directory sitting on the temp file name makes the create step fail.
    fs::create_dir(dir.path().join("pizza_menu.txt.tmp")).unwrap();

    let store = CatalogStore::new(&path);
    assert!(store.save(&default_catalog().unwrap()).is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "Margherita,10.00,1\n");
}

#[test]
fn loaded_catalog_feeds_an_order() {
    let dir = TempDir::new().unwrap();
    let store = CatalogStore::new(dir.path().join("pizza_menu.txt"));
    fs::write(
        store.path(),
        "Margherita,10.00,1\nPepperoni,12.50,1\nHawaiian,13.00,0\n",
    )
    .unwrap();

    let catalog = store.load().catalog;
    let mut order = Order::start();
    order.add_line_item(&catalog, 1, 3).unwrap();
    assert!(order.add_line_item(&catalog, 2, 1).is_err());
    order.set_party_size(3).unwrap();

    let split = order.split_bill().unwrap();
    assert_eq!(split.total, Money::from_cents(3750));
    assert_eq!(split.per_person, Money::from_cents(1250));
}

#[test]
fn only_storable_names_reach_the_file() {
    let dir = TempDir::new().unwrap();
    let store = CatalogStore::new(dir.path().join("pizza_menu.txt"));

    let long_name = "N".repeat(60);
    let mut catalog = Catalog::new();
    for name in [long_name.as_str(), "Ham, Pineapple", "Two\nLines", "Crudo É Rucola"] {
        let _ = catalog.insert(PizzaType::new(name, Money::from_cents(1000)));
    }
    assert_eq!(catalog.len(), 1);

    store.save(&catalog).unwrap();
    assert_eq!(store.load().catalog, catalog);
}
