//! End-to-end listing behaviour over normalized records.

use rock_catalog::prelude::*;

fn record(id: &str, category: &str, price: f64) -> ExternalLaptopRecord {
    ExternalLaptopRecord {
        id: LaptopId::new(id),
        image: format!("https://img.test/{}.png", id),
        category: category.into(),
        brand: "ASUS".into(),
        model: format!("Zenbook {}", id),
        processor: "Intel Core Ultra 7".into(),
        ram_gb: 16,
        storage_gb: 512,
        price,
        screen_inches: 14.0,
        graphics: None,
        description: None,
    }
}

fn seven_item_catalog() -> Vec<DisplayLaptop> {
    let records = vec![
        record("1", "Gaming", 1499.0),
        record("2", "trabajo", 999.0),
        record("3", "estudiantes", 649.0),
        record("4", "GAMING", 1899.0),
        record("5", "creadores", 2199.0),
        record("6", "otros", 499.0),
        record("7", "trabajo", 1199.0),
    ];
    normalize_all(&records, Locale::Es)
}

#[test]
fn seven_laptops_two_gaming() {
    let mut engine = ListingEngine::new(ListingConfig::default());
    engine.catalog_refreshed(seven_item_catalog());

    let p = engine.pagination();
    assert_eq!(p.total_pages, 2);
    assert_eq!(engine.current_page_items().len(), 6);

    assert!(engine.go_to_page(2));
    assert_eq!(engine.current_page_items().len(), 1);

    engine.select_category("gaming");
    assert_eq!(engine.page(), 1);
    let ids: Vec<_> = engine.current_page_items().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "4"]);
    assert_eq!(engine.pagination().total_pages, 1);
    assert!(engine.pagination().page_window().is_empty());
}

#[test]
fn empty_ai_result_then_clear() {
    let mut engine = ListingEngine::new(ListingConfig::default());
    engine.catalog_refreshed(seven_item_catalog());
    engine.select_category("trabajo");

    let query = SearchQuery::parse("portátil con 64GB de RAM").unwrap();
    engine.apply_ai_results(query.clone(), Vec::new());

    let empty = engine.empty_state().unwrap();
    assert_eq!(empty, EmptyState::NoAiResults { query });
    assert_eq!(empty.recovery(), Some(Recovery::ClearSearch));
    assert!(!engine.category_controls_enabled());

    engine.clear_ai_search();
    assert_eq!(*engine.mode(), FilterMode::AllItems);
    assert_eq!(engine.active_len(), 7);
    assert_eq!(engine.page(), 1);
}

#[test]
fn page_stays_in_range_across_transitions() {
    let mut engine = ListingEngine::new(ListingConfig::default().with_page_size(2));
    engine.catalog_refreshed(seven_item_catalog());

    for page in [4, 9, 0, 2] {
        engine.go_to_page(page);
        let p = engine.pagination();
        assert!(p.contains(engine.page()));
    }
    assert_eq!(engine.page(), 2);

    engine.select_category("estudiantes");
    assert_eq!(engine.page(), 1);
    assert!(!engine.next_page());
}

#[test]
fn normalized_prices_render_in_euros() {
    let catalog = seven_item_catalog();
    assert_eq!(catalog[0].price.display(Locale::Es), "\u{20ac}1.499");
    assert_eq!(catalog[0].category, "gaming");
    assert_eq!(catalog[0].graphics, "Integrada");
}
