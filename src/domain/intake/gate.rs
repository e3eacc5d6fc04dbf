//! Completeness gate.
//!
//! Each category has a fixed set of required slots. Missing slots are always
//! reported in [`SlotName`] canonical order so prompts rendered from them are
//! deterministic.

use super::slots::{Category, SlotName, SlotSet};

const SAFETY_REQUIRED: &[SlotName] = &[SlotName::ItemType, SlotName::Usage, SlotName::BikeType];

const SPARE_PART_REQUIRED: &[SlotName] = &[
    SlotName::BikeType,
    SlotName::BikeBrand,
    SlotName::BikeModel,
    SlotName::BikeYear,
    SlotName::PartName,
];

const ACCESSORY_REQUIRED: &[SlotName] =
    &[SlotName::ItemType, SlotName::Usage, SlotName::BikeType];

const NONE_REQUIRED: &[SlotName] = &[SlotName::Category];

/// Slots that must hold a value before a request in `category` is complete.
pub fn required_slots(category: Category) -> &'static [SlotName] {
    match category {
        Category::Safety => SAFETY_REQUIRED,
        Category::SparePart => SPARE_PART_REQUIRED,
        Category::Accessory => ACCESSORY_REQUIRED,
        Category::None => NONE_REQUIRED,
    }
}

/// Required slots that `slots` does not satisfy, in canonical order.
///
/// An item type only counts when it belongs to `category`, and blank strings
/// never count. For `none` the category itself is always missing.
pub fn missing(category: Category, slots: &SlotSet) -> Vec<SlotName> {
    let mut missing: Vec<SlotName> = required_slots(category)
        .iter()
        .copied()
        .filter(|slot| !satisfies(category, slots, *slot))
        .collect();
    missing.sort();
    missing
}

fn satisfies(category: Category, slots: &SlotSet, slot: SlotName) -> bool {
    match slot {
        SlotName::Category => !category.is_none(),
        SlotName::ItemType => slots.item_type_for(category).is_some(),
        other => slots.has_value(other),
    }
}
