//! Built-in product list used when no catalog file is configured.

use crate::domain::catalog::{ProductEntry, QualityTier};
use crate::domain::intake::{BikeType, Category, ItemType, Usage};

use BikeType::{Adventure as AdventureBike, Cruiser, Scooter, Sport};
use QualityTier::{Budget, Premium, Value};
use Usage::{Adventure, City, Touring};

const AMAZON: (&str, &str) = ("Amazon", "https://www.amazon.com");
const FC_MOTO: (&str, &str) = ("FC-Moto", "https://www.fc-moto.de");
const REVZILLA: (&str, &str) = ("RevZilla", "https://www.revzilla.com");

#[allow(clippy::too_many_arguments)]
fn safety(
    id: &str,
    item_type: ItemType,
    brand: &str,
    name: &str,
    description: &str,
    tier: QualityTier,
    usage_tags: &[Usage],
    bike_type_tags: &[BikeType],
    price: f64,
    (store, url): (&str, &str),
) -> ProductEntry {
    ProductEntry {
        id: id.to_string(),
        category: Category::Safety,
        item_type,
        brand: brand.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        quality_tier: tier,
        usage_tags: usage_tags.to_vec(),
        bike_type_tags: bike_type_tags.to_vec(),
        price,
        currency: "USD".to_string(),
        store: store.to_string(),
        url: url.to_string(),
    }
}

pub fn products() -> Vec<ProductEntry> {
    use ItemType::{Boots, Gloves, HelmetFullface, Jacket};

    vec![
        // Full-face helmets, touring and highway
        safety(
            "helmet-ls2-ff353-rapid",
            HelmetFullface,
            "LS2",
            "LS2 FF353 Rapid",
            "Light full-face helmet with good ventilation at an entry price.",
            Budget,
            &[Touring, City],
            &[Sport, Scooter, Cruiser],
            95.0,
            AMAZON,
        ),
        safety(
            "helmet-hjc-c70",
            HelmetFullface,
            "HJC",
            "HJC C70",
            "Full-face helmet with internal sun visor, balanced price and features.",
            Value,
            &[Touring, City],
            &[Sport, Cruiser, Scooter],
            180.0,
            FC_MOTO,
        ),
        safety(
            "helmet-shoei-gt-air-2",
            HelmetFullface,
            "Shoei",
            "Shoei GT-Air II",
            "Premium full-face helmet, quiet and comfortable over long distances.",
            Premium,
            &[Touring],
            &[Sport, Cruiser, AdventureBike],
            550.0,
            REVZILLA,
        ),
        // Full-face helmets, city and daily riding
        safety(
            "helmet-agv-k1",
            HelmetFullface,
            "AGV",
            "AGV K1",
            "Sport-styled full-face helmet for city and highway.",
            Value,
            &[City, Touring],
            &[Sport],
            210.0,
            AMAZON,
        ),
        safety(
            "helmet-ls2-storm-ff800",
            HelmetFullface,
            "LS2",
            "LS2 FF800 Storm",
            "Touring full-face helmet with solid features at a mid price.",
            Value,
            &[Touring, City],
            &[Sport, Cruiser, Scooter],
            160.0,
            FC_MOTO,
        ),
        // Full-face helmets leaning adventure
        safety(
            "helmet-icon-airflite",
            HelmetFullface,
            "Icon",
            "Icon Airflite",
            "Aggressive full-face design for mixed city and highway riding.",
            Value,
            &[Touring, City],
            &[Sport, AdventureBike, Cruiser],
            260.0,
            REVZILLA,
        ),
        // Jackets
        safety(
            "jacket-hwk-adv",
            Jacket,
            "HWK",
            "HWK Adventure/Touring Jacket",
            "Textile jacket with armor for touring and adventure.",
            Value,
            &[Touring, Adventure],
            &[],
            89.0,
            AMAZON,
        ),
        safety(
            "jacket-alpinestars-t-gp-plus",
            Jacket,
            "Alpinestars",
            "Alpinestars T-GP Plus R v3",
            "Sport textile jacket with CE armor.",
            Premium,
            &[],
            &[],
            299.0,
            REVZILLA,
        ),
        safety(
            "jacket-borasco",
            Jacket,
            "Borasco",
            "BORASCO Basic Riding Jacket",
            "Entry-level riding jacket.",
            Budget,
            &[],
            &[],
            59.0,
            AMAZON,
        ),
        // Gloves
        safety(
            "gloves-budget-basic",
            Gloves,
            "Generic",
            "Motorcycle Protective Gloves Basic",
            "Basic protective gloves.",
            Budget,
            &[],
            &[],
            35.0,
            AMAZON,
        ),
        safety(
            "gloves-alpinestars-sp2",
            Gloves,
            "Alpinestars",
            "Alpinestars SP-2 V3 Gloves",
            "Leather sport gloves.",
            Value,
            &[],
            &[],
            130.0,
            REVZILLA,
        ),
        safety(
            "gloves-dainese-carbon",
            Gloves,
            "Dainese",
            "Dainese Carbon D1 Long Gloves",
            "Long-cuff carbon protection gloves.",
            Premium,
            &[],
            &[],
            220.0,
            REVZILLA,
        ),
        // Boots
        safety(
            "boots-budget-basic",
            Boots,
            "Generic",
            "Entry-Level Motorcycle Riding Boots",
            "Basic riding boots.",
            Budget,
            &[],
            &[],
            85.0,
            AMAZON,
        ),
        safety(
            "boots-forma-adventure",
            Boots,
            "Forma",
            "Forma Adventure Boots",
            "Waterproof adventure boots.",
            Value,
            &[Adventure, Touring],
            &[],
            279.0,
            FC_MOTO,
        ),
        safety(
            "boots-alpinestars-tech7",
            Boots,
            "Alpinestars",
            "Alpinestars Tech 7 Enduro Boots",
            "Enduro boots with full ankle support.",
            Premium,
            &[Adventure],
            &[AdventureBike],
            430.0,
            REVZILLA,
        ),
    ]
}
