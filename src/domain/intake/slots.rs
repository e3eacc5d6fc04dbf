//! Slot vocabulary for a purchase request.
//!
//! A [`SlotSet`] is an optional-field record: every recognized slot is
//! enumerated and `None` means absent. `Some("")` is an explicitly blank
//! value and stays distinguishable from absence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Generates the canonical-order list, wire string and parser for a
/// closed slot value enum.
macro_rules! slot_enum {
    ($name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $name {
            /// Returns all values in canonical order.
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }

            /// Wire representation.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            /// Case-insensitive parse of the wire representation.
            pub fn parse(raw: &str) -> Option<Self> {
                let raw = raw.trim();
                Self::all()
                    .iter()
                    .copied()
                    .find(|value| value.as_str().eq_ignore_ascii_case(raw))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Top-level request classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Safety,
    SparePart,
    Accessory,
    None,
}

slot_enum!(Category {
    Safety => "safety",
    SparePart => "spare-part",
    Accessory => "accessory",
    None => "none",
});

impl Category {
    /// Returns true when the request could not be classified.
    pub fn is_none(&self) -> bool {
        matches!(self, Category::None)
    }
}

/// Sub-kind within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemType {
    HelmetFullface,
    HelmetOpenface,
    HelmetModular,
    /// A helmet was asked for without naming a style.
    HelmetUnknown,
    Jacket,
    Gloves,
    Boots,
    SparePart,
    Accessory,
}

slot_enum!(ItemType {
    HelmetFullface => "helmet-fullface",
    HelmetOpenface => "helmet-openface",
    HelmetModular => "helmet-modular",
    HelmetUnknown => "helmet-unknown",
    Jacket => "jacket",
    Gloves => "gloves",
    Boots => "boots",
    SparePart => "spare-part",
    Accessory => "accessory",
});

impl ItemType {
    /// The category this item type belongs to.
    pub fn category(&self) -> Category {
        match self {
            ItemType::HelmetFullface
            | ItemType::HelmetOpenface
            | ItemType::HelmetModular
            | ItemType::HelmetUnknown
            | ItemType::Jacket
            | ItemType::Gloves
            | ItemType::Boots => Category::Safety,
            ItemType::SparePart => Category::SparePart,
            ItemType::Accessory => Category::Accessory,
        }
    }

    pub fn is_helmet(&self) -> bool {
        self.gear_intent() == GearIntent::Helmet
    }

    /// The protective-gear sub-intent this item type expresses.
    pub fn gear_intent(&self) -> GearIntent {
        match self {
            ItemType::HelmetFullface
            | ItemType::HelmetOpenface
            | ItemType::HelmetModular
            | ItemType::HelmetUnknown => GearIntent::Helmet,
            ItemType::Jacket => GearIntent::Jacket,
            ItemType::Gloves => GearIntent::Gloves,
            ItemType::Boots => GearIntent::Boots,
            ItemType::SparePart | ItemType::Accessory => GearIntent::None,
        }
    }
}

/// Riding usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Usage {
    City,
    Touring,
    Adventure,
}

slot_enum!(Usage {
    City => "city",
    Touring => "touring",
    Adventure => "adventure",
});

/// Kind of motorcycle the rider owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BikeType {
    Sport,
    Cruiser,
    Scooter,
    Adventure,
}

slot_enum!(BikeType {
    Sport => "sport",
    Cruiser => "cruiser",
    Scooter => "scooter",
    Adventure => "adventure",
});

/// Protective-gear sub-intent, produced once by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GearIntent {
    Helmet,
    Jacket,
    Gloves,
    Boots,
    None,
}

impl GearIntent {
    /// Maps the intent to an item type. Helmets need the style, if any.
    pub fn item_type(&self, helmet_style: Option<HelmetStyle>) -> Option<ItemType> {
        match self {
            GearIntent::Helmet => Some(match helmet_style {
                Some(HelmetStyle::FullFace) => ItemType::HelmetFullface,
                Some(HelmetStyle::Modular) => ItemType::HelmetModular,
                Some(HelmetStyle::OpenFace) => ItemType::HelmetOpenface,
                None => ItemType::HelmetUnknown,
            }),
            GearIntent::Jacket => Some(ItemType::Jacket),
            GearIntent::Gloves => Some(ItemType::Gloves),
            GearIntent::Boots => Some(ItemType::Boots),
            GearIntent::None => None,
        }
    }
}

/// Named helmet construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelmetStyle {
    FullFace,
    Modular,
    OpenFace,
}

/// Name of a single slot, serialized the way it appears in `missingInfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotName {
    Category,
    ItemType,
    Usage,
    BikeType,
    BikeBrand,
    BikeModel,
    BikeYear,
    PartName,
}

slot_enum!(SlotName {
    Category => "category",
    ItemType => "itemType",
    Usage => "usage",
    BikeType => "bikeType",
    BikeBrand => "bikeBrand",
    BikeModel => "bikeModel",
    BikeYear => "bikeYear",
    PartName => "partName",
});

/// Request attributes for one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bike_type: Option<BikeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bike_brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bike_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bike_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_name: Option<String>,
    /// Protective-gear brand (Shoei, AGV, ...); never required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gear_brand: Option<String>,
}

impl SlotSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no slot holds a value.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// True when the slot is present, blank strings included.
    pub fn is_present(&self, slot: SlotName) -> bool {
        match slot {
            SlotName::Category => self.category.is_some(),
            SlotName::ItemType => self.item_type.is_some(),
            SlotName::Usage => self.usage.is_some(),
            SlotName::BikeType => self.bike_type.is_some(),
            SlotName::BikeBrand => self.bike_brand.is_some(),
            SlotName::BikeModel => self.bike_model.is_some(),
            SlotName::BikeYear => self.bike_year.is_some(),
            SlotName::PartName => self.part_name.is_some(),
        }
    }

    /// True when the slot holds a usable value. Blank strings do not count.
    pub fn has_value(&self, slot: SlotName) -> bool {
        fn filled(value: &Option<String>) -> bool {
            value.as_deref().is_some_and(|v| !v.trim().is_empty())
        }

        match slot {
            SlotName::BikeBrand => filled(&self.bike_brand),
            SlotName::BikeModel => filled(&self.bike_model),
            SlotName::BikeYear => filled(&self.bike_year),
            SlotName::PartName => filled(&self.part_name),
            other => self.is_present(other),
        }
    }

    /// Copies every present slot of `newer` over this set. Absent slots in
    /// `newer` leave the current value untouched.
    pub fn overlay(&mut self, newer: &SlotSet) {
        fn take<T: Clone>(slot: &mut Option<T>, newer: &Option<T>) {
            if let Some(value) = newer {
                *slot = Some(value.clone());
            }
        }

        take(&mut self.category, &newer.category);
        take(&mut self.item_type, &newer.item_type);
        take(&mut self.usage, &newer.usage);
        take(&mut self.bike_type, &newer.bike_type);
        take(&mut self.bike_brand, &newer.bike_brand);
        take(&mut self.bike_model, &newer.bike_model);
        take(&mut self.bike_year, &newer.bike_year);
        take(&mut self.part_name, &newer.part_name);
        take(&mut self.gear_brand, &newer.gear_brand);
    }

    /// The resolved category, `none` when absent.
    pub fn category_or_none(&self) -> Category {
        self.category.unwrap_or(Category::None)
    }

    /// The item type, but only when it belongs to `category`.
    pub fn item_type_for(&self, category: Category) -> Option<ItemType> {
        self.item_type.filter(|item| item.category() == category)
    }

    /// Trimmed text of a string slot when it has a usable value.
    pub fn text(&self, slot: SlotName) -> Option<&str> {
        let value = match slot {
            SlotName::BikeBrand => self.bike_brand.as_deref(),
            SlotName::BikeModel => self.bike_model.as_deref(),
            SlotName::BikeYear => self.bike_year.as_deref(),
            SlotName::PartName => self.part_name.as_deref(),
            _ => None,
        };
        value.map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn gear_brand_text(&self) -> Option<&str> {
        self.gear_brand
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}
