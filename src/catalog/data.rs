//! Compiled-in product data used when no product file is configured.

use crate::catalog::product::{Product, ProductId};

struct Entry {
    id: &'static str,
    name: &'static str,
    price: &'static str,
    description: &'static str,
    image: &'static str,
    tag: Option<&'static str>,
}

const FEATURED: &[Entry] = &[
    Entry {
        id: "audio-elite",
        name: "Casque Audio Élite",
        price: "129,90 €",
        description: "Bluetooth 5.3, ANC, autonomie 30h.",
        image: "https://images.unsplash.com/photo-1519677100203-a0e668c92439?auto=format&fit=crop&w=800&q=80",
        tag: Some("Best-seller"),
    },
    Entry {
        id: "watch-pro",
        name: "Montre Connectée Pro",
        price: "199,00 €",
        description: "Suivi santé avancé & GPS intégré.",
        image: "https://images.unsplash.com/photo-1523475472560-d2df97ec485c?auto=format&fit=crop&w=800&q=80",
        tag: Some("Nouveauté"),
    },
    Entry {
        id: "speaker-mini",
        name: "Enceinte Nomade Mini",
        price: "59,90 €",
        description: "Son 360° & résistance IP67.",
        image: "https://images.unsplash.com/photo-1519996529931-28324d5a630e?auto=format&fit=crop&w=800&q=80",
        tag: Some("Édition limitée"),
    },
];

const CATALOG: &[Entry] = &[
    Entry {
        id: "buds-lite",
        name: "Écouteurs Buds Lite",
        price: "79,00 €",
        description: "Charge rapide & réduction de bruit adaptative.",
        image: "https://images.unsplash.com/photo-1484704849700-f032a568e944?auto=format&fit=crop&w=800&q=80",
        tag: None,
    },
    Entry {
        id: "tablet-x",
        name: "Tablette X 11\"",
        price: "449,00 €",
        description: "Écran 120Hz, 256 Go, stylet inclus.",
        image: "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?auto=format&fit=crop&w=800&q=80",
        tag: None,
    },
    Entry {
        id: "camera-pocket",
        name: "Caméra Pocket 4K",
        price: "349,00 €",
        description: "Stabilisation gyroscopique & HDR10+.",
        image: "https://images.unsplash.com/photo-1481277542470-605612bd2d61?auto=format&fit=crop&w=800&q=80",
        tag: None,
    },
    Entry {
        id: "smart-home",
        name: "Pack Maison Connectée",
        price: "229,00 €",
        description: "Hub, ampoules et capteurs intelligents.",
        image: "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?auto=format&fit=crop&w=800&q=80",
        tag: None,
    },
    Entry {
        id: "gaming-pad",
        name: "Manette Gaming Pad+",
        price: "69,90 €",
        description: "Compatibilité multi-plateformes & rétroéclairage.",
        image: "https://images.unsplash.com/photo-1511512578047-dfb367046420?auto=format&fit=crop&w=800&q=80",
        tag: None,
    },
];

fn to_products(entries: &[Entry]) -> Vec<Product> {
    entries
        .iter()
        .map(|entry| Product {
            id: ProductId::from(entry.id),
            name: entry.name.to_string(),
            price: entry.price.to_string(),
            description: entry.description.to_string(),
            image: entry.image.to_string(),
            tag: entry.tag.map(str::to_string),
        })
        .collect()
}

pub fn featured_products() -> Vec<Product> {
    to_products(FEATURED)
}

pub fn catalog_products() -> Vec<Product> {
    to_products(CATALOG)
}
