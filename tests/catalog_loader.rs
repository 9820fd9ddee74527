mod common;

use common::temp_file;
use std::path::PathBuf;
use vitrine::catalog::{Catalog, CatalogError, ProductId};

const PRODUCTS_TOML: &str = r#"
[[featured]]
id = "lamp"
name = "Lampe Halo"
price = "39,00 €"
description = "Lumière douce."
image = "https://img.example.com/lamp.jpg"
tag = "Promo"

[[catalog]]
id = "desk"
name = "Bureau Assis-Debout"
price = "399,00 €"
description = "Plateau en chêne."
image = "https://img.example.com/desk.jpg"

[[catalog]]
id = "chair"
name = "Chaise Ergo"
price = "249,00 €"
"#;

#[test]
fn builtin_catalog_has_both_lists() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.featured.len(), 3);
    assert_eq!(catalog.items.len(), 5);
    assert!(catalog.validate().is_ok());
    assert!(catalog.shared_ids().is_empty());
}

#[test]
fn find_searches_both_lists() {
    let catalog = Catalog::builtin();
    assert_eq!(
        catalog.find("watch-pro").map(|p| p.name.as_str()),
        Some("Montre Connectée Pro")
    );
    assert_eq!(
        catalog.find("gaming-pad").map(|p| p.price.as_str()),
        Some("69,90 €")
    );
    assert!(catalog.find("missing").is_none());
}

#[test]
fn loads_toml_product_file() {
    let (_dir, path) = temp_file("products.toml", PRODUCTS_TOML);
    let catalog = Catalog::load_from(&path).expect("products should load");

    assert_eq!(catalog.featured.len(), 1);
    assert_eq!(catalog.featured[0].tag.as_deref(), Some("Promo"));
    assert_eq!(catalog.items.len(), 2);
    assert_eq!(catalog.items[1].id, ProductId::from("chair"));
    assert!(catalog.items[1].description.is_empty());
    assert!(catalog.items[1].tag.is_none());
}

#[test]
fn loads_json_product_file() {
    let (_dir, path) = temp_file(
        "products.json",
        r#"{
            "featured": [],
            "catalog": [
                {"id": "desk", "name": "Bureau", "price": "399,00 €", "description": "", "image": ""}
            ]
        }"#,
    );
    let catalog = Catalog::load_from(&path).expect("products should load");
    assert!(catalog.featured.is_empty());
    assert_eq!(catalog.items[0].name, "Bureau");
}

#[test]
fn duplicate_id_within_a_list_is_rejected() {
    let (_dir, path) = temp_file(
        "products.toml",
        r#"
[[catalog]]
id = "desk"
name = "A"

[[catalog]]
id = "desk"
name = "B"
"#,
    );
    let err = Catalog::load_from(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Validation { .. }));
    assert!(err.to_string().contains("desk"));
}

#[test]
fn empty_id_is_rejected() {
    let (_dir, path) = temp_file("products.toml", "[[featured]]\nid = \"\"\nname = \"A\"\n");
    assert!(matches!(
        Catalog::load_from(&path),
        Err(CatalogError::Validation { .. })
    ));
}

#[test]
fn same_id_in_both_lists_is_allowed() {
    let (_dir, path) = temp_file(
        "products.toml",
        r#"
[[featured]]
id = "desk"
name = "Bureau"

[[catalog]]
id = "desk"
name = "Bureau"
"#,
    );
    let catalog = Catalog::load_from(&path).expect("cross-list ids are accepted");
    assert_eq!(catalog.featured.len(), 1);
    assert_eq!(catalog.items.len(), 1);
    assert_eq!(catalog.shared_ids(), vec![&ProductId::from("desk")]);
}

#[test]
fn missing_file_is_read_error() {
    let result = Catalog::load_from(&PathBuf::from("/nonexistent/products.toml"));
    assert!(matches!(result, Err(CatalogError::Read { .. })));
}

#[test]
fn malformed_file_is_parse_error() {
    let (_dir, path) = temp_file("products.json", "{ not json");
    assert!(matches!(
        Catalog::load_from(&path),
        Err(CatalogError::Parse { .. })
    ));
}
