//! Integration tests walking the cart through the storefront's everyday flows.

use rusty_money::iso::VND;
use testresult::TestResult;

use storefront_cart::prelude::*;

fn drink(id: u64, name: &str, price: i64) -> ProductRef {
    ProductRef {
        product_id: ProductId::new(id),
        name: name.to_string(),
        unit_price: Price::from_minor(price, VND),
        image_url: format!("/media/products/{id}.jpg"),
    }
}

fn lines(store: &CartStore<MemoryStorage>) -> Vec<(u64, u32)> {
    store
        .items()
        .iter()
        .map(|item| (item.product_id().get(), item.quantity()))
        .collect()
}

fn new_store() -> CartStore<MemoryStorage> {
    CartStore::initialize(MemoryStorage::new(), CartOptions::default())
}

#[test]
fn milk_tea_add_decrease_remove() {
    let mut store = new_store();
    let tea = drink(1, "Trà sữa", 25_000);

    store.add_item(tea.clone());
    assert_eq!(lines(&store), vec![(1, 1)]);
    assert_eq!(store.total_amount(), Price::from_minor(25_000, VND));

    store.add_item(tea);
    assert_eq!(lines(&store), vec![(1, 2)]);
    assert_eq!(store.total_amount(), Price::from_minor(50_000, VND));

    store.change_quantity(ProductId::new(1), QuantityChange::Decrease);
    assert_eq!(lines(&store), vec![(1, 1)]);
    assert_eq!(store.total_amount(), Price::from_minor(25_000, VND));

    store.remove_item(ProductId::new(1));
    assert_eq!(lines(&store), Vec::<(u64, u32)>::new());
    assert_eq!(store.total_amount(), Price::from_minor(0, VND));
}

#[test]
fn decreasing_a_single_unit_is_a_noop() {
    let mut store = new_store();
    store.add_item(drink(2, "Trà đào", 30_000));

    for _ in 0..3 {
        assert!(!store.change_quantity(ProductId::new(2), QuantityChange::Decrease));
    }

    assert_eq!(lines(&store), vec![(2, 1)]);
    assert_eq!(store.total_amount(), Price::from_minor(30_000, VND));
}

#[test]
fn clear_resets_every_reading() {
    let mut store = new_store();
    store.add_item(drink(1, "Trà sữa", 25_000));
    store.add_item(drink(2, "Trà đào", 30_000));

    store.clear();

    assert_eq!(store.total_item_count(), 0);
    assert_eq!(store.total_amount(), Price::from_minor(0, VND));
    assert!(store.items().is_empty());
    assert!(store.snapshot_for_order().is_empty());
}

#[test]
fn snapshot_is_restartable_and_ordered() -> TestResult {
    let mut store = new_store();
    store.add_item(drink(5, "Cà phê sữa", 20_000));
    store.add_item(drink(3, "Matcha", 35_000));
    store.add_item(drink(5, "Cà phê sữa", 20_000));

    let snapshot = store.snapshot_for_order();

    let first: Vec<OrderLine> = snapshot.iter().collect();
    let second: Vec<OrderLine> = snapshot.iter().collect();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first)?,
        r#"[{"product_id":5,"quantity":2},{"product_id":3,"quantity":1}]"#
    );

    Ok(())
}

#[test]
fn catalog_products_added_by_id() -> TestResult {
    let catalog = load_catalog("fixtures/products/drinks.yml")?;
    let mut store = new_store();

    assert!(store.add_product(&catalog, ProductId::new(5)));
    assert!(!store.add_product(&catalog, ProductId::new(999)));

    let peach = catalog.product(ProductId::new(5)).ok_or("missing product 5")?;
    let line = store.get(ProductId::new(5)).ok_or("missing line")?;

    assert_eq!(line.name(), peach.name);
    assert_eq!(line.unit_price(), &peach.price);
    assert_eq!(store.len(), 1);

    Ok(())
}

#[test]
fn badges_follow_the_cart() -> TestResult {
    let catalog = load_catalog("fixtures/products/drinks.yml")?;
    let badge = std::rc::Rc::new(std::cell::RefCell::new(CartBadge::default()));
    let mut store = new_store();
    store.subscribe(std::rc::Rc::clone(&badge));

    store.add_product(&catalog, ProductId::new(1));
    store.add_product(&catalog, ProductId::new(1));

    let tea = catalog.product(ProductId::new(1)).ok_or("missing product 1")?;

    assert_eq!(badge.borrow().text(), "2");
    assert_eq!(
        selection_badge(tea, store.contains(tea.id)).class,
        "size-badge selected-badge"
    );

    store.remove_item(ProductId::new(1));

    assert_eq!(badge.borrow().class(), None);
    assert_eq!(selection_badge(tea, store.contains(tea.id)).class, "size-badge");

    Ok(())
}
