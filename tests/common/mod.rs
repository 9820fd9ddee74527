//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;
use tempfile::TempDir;
use vitrine::catalog::{Catalog, Product, ProductId};
use vitrine::config::UiConfig;
use vitrine::ui::app::App;
use vitrine::ui::render::render_snapshot;

pub fn product(id: &str, name: &str) -> Product {
    Product {
        id: ProductId::from(id),
        name: name.to_string(),
        price: "10,00 €".to_string(),
        description: format!("Description de {}", name),
        image: format!("https://img.example.com/{}.jpg", id),
        tag: None,
    }
}

pub fn watch_pro() -> Product {
    Catalog::builtin()
        .find("watch-pro")
        .cloned()
        .expect("built-in catalog has watch-pro")
}

/// App over the built-in catalog, sized to a `cols`×`rows` terminal.
pub fn make_app(cols: u16, rows: u16) -> App {
    let mut app = App::new(Catalog::builtin(), &UiConfig::default());
    app.on_resize(cols, rows);
    app
}

pub fn snapshot(app: &mut App, cols: u16, rows: u16) -> String {
    render_snapshot(app, cols, rows)
}

/// Writes `content` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
