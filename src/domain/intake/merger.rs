//! Slot merger.

use super::slots::SlotSet;

/// Combines the three slot sources of a turn, slot by slot.
///
/// Precedence: freshly classified, then explicit context, then memory. No
/// validation happens here; the result may be internally inconsistent
/// (a helmet item type under a spare-part category) and consumers must
/// tolerate that.
pub fn merge(memory: &SlotSet, explicit: &SlotSet, fresh: &SlotSet) -> SlotSet {
    let mut merged = memory.clone();
    merged.overlay(explicit);
    merged.overlay(fresh);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::slots::{BikeType, Category, ItemType, Usage};
    use proptest::option;
    use proptest::prelude::*;

    fn bike_type() -> impl Strategy<Value = BikeType> {
        prop::sample::select(BikeType::all().to_vec())
    }

    fn usage() -> impl Strategy<Value = Usage> {
        prop::sample::select(Usage::all().to_vec())
    }

    fn slot_set() -> impl Strategy<Value = SlotSet> {
        (
            option::of(bike_type()),
            option::of(usage()),
            option::of("[A-Za-z ]{0,8}"),
            option::of("20[0-3][0-9]"),
        )
            .prop_map(|(bike_type, usage, bike_brand, bike_year)| SlotSet {
                bike_type,
                usage,
                bike_brand,
                bike_year,
                ..Default::default()
            })
    }

    #[test]
    fn per_slot_precedence() {
        let memory = SlotSet {
            category: Some(Category::Safety),
            usage: Some(Usage::Touring),
            bike_type: Some(BikeType::Cruiser),
            bike_brand: Some("Honda".to_string()),
            ..Default::default()
        };
        let explicit = SlotSet {
            usage: Some(Usage::Adventure),
            bike_brand: Some("Yamaha".to_string()),
            ..Default::default()
        };
        let fresh = SlotSet {
            item_type: Some(ItemType::Gloves),
            usage: Some(Usage::City),
            ..Default::default()
        };

        let merged = merge(&memory, &explicit, &fresh);

        assert_eq!(merged.category, Some(Category::Safety));
        assert_eq!(merged.item_type, Some(ItemType::Gloves));
        assert_eq!(merged.usage, Some(Usage::City));
        assert_eq!(merged.bike_type, Some(BikeType::Cruiser));
        assert_eq!(merged.bike_brand.as_deref(), Some("Yamaha"));
    }

    #[test]
    fn explicit_blank_overrides_memory() {
        let memory = SlotSet {
            bike_brand: Some("Honda".to_string()),
            ..Default::default()
        };
        let explicit = SlotSet {
            bike_brand: Some(String::new()),
            ..Default::default()
        };

        let merged = merge(&memory, &explicit, &SlotSet::new());
        assert_eq!(merged.bike_brand.as_deref(), Some(""));
    }

    #[test]
    fn inconsistent_slots_are_kept_as_is() {
        let memory = SlotSet {
            item_type: Some(ItemType::HelmetFullface),
            ..Default::default()
        };
        let fresh = SlotSet {
            category: Some(Category::SparePart),
            ..Default::default()
        };

        let merged = merge(&memory, &SlotSet::new(), &fresh);
        assert_eq!(merged.category, Some(Category::SparePart));
        assert_eq!(merged.item_type, Some(ItemType::HelmetFullface));
    }

    proptest! {
        #[test]
        fn fresh_bike_type_always_wins(
            memory in slot_set(),
            explicit in slot_set(),
            fresh_type in bike_type(),
        ) {
            let fresh = SlotSet { bike_type: Some(fresh_type), ..Default::default() };
            let merged = merge(&memory, &explicit, &fresh);
            prop_assert_eq!(merged.bike_type, Some(fresh_type));
        }

        #[test]
        fn empty_sources_are_transparent(slots in slot_set()) {
            let empty = SlotSet::new();
            prop_assert_eq!(&merge(&slots, &empty, &empty), &slots);
            prop_assert_eq!(&merge(&empty, &slots, &empty), &slots);
            prop_assert_eq!(&merge(&empty, &empty, &slots), &slots);
        }

        #[test]
        fn absent_fresh_falls_back_to_explicit_then_memory(
            memory in slot_set(),
            explicit in slot_set(),
        ) {
            let merged = merge(&memory, &explicit, &SlotSet::new());
            prop_assert_eq!(merged.usage, explicit.usage.or(memory.usage));
            prop_assert_eq!(merged.bike_year, explicit.bike_year.or(memory.bike_year));
        }
    }
}
