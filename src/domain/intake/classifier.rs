//! Keyword classifier.
//!
//! Maps a raw customer message to a category and the sub-attributes that
//! matter for that category. Matching is case-insensitive substring search
//! over fixed vocabularies, except bike types, which match whole words only.
//! A miss is an absent slot, never an error.

use std::cmp::Reverse;

use super::slots::{BikeType, Category, GearIntent, HelmetStyle, ItemType, SlotSet, Usage};
use super::vocabulary::{
    ACCESSORIES, ACCESSORY_WORDS, ADVENTURE_WORDS, BIKE_BRANDS, BIKE_TYPE_WORDS,
    BIKE_YEAR_PATTERN, GEAR_BRANDS, GEAR_WORDS, HELMET_STYLE_WORDS, MODEL_BIKE_TYPES, SAFETY_WORDS, SPARE_PARTS,
    SPARE_PART_WORDS, USAGE_WORDS,
};

/// Category word lists in detection priority order.
const CATEGORY_PRIORITY: &[(Category, &[&str])] = &[
    (Category::Safety, SAFETY_WORDS),
    (Category::SparePart, SPARE_PART_WORDS),
    (Category::Accessory, ACCESSORY_WORDS),
];

/// Characters stripped from the edges of a guessed model token.
const TOKEN_PUNCTUATION: &[char] = &[
    ',', '.', ';', ':', '!', '?', '(', ')', '"', '\'', '،', '؟', '؛',
];

/// A message lower-cased once, keeping a map back to the original bytes so
/// that matches can be cut out of the original text with its casing intact.
struct FoldedText<'a> {
    original: &'a str,
    folded: String,
    origin: Vec<usize>,
}

impl<'a> FoldedText<'a> {
    fn new(original: &'a str) -> Self {
        let mut folded = String::with_capacity(original.len());
        let mut origin = Vec::with_capacity(original.len() + 1);
        for (index, ch) in original.char_indices() {
            for lower in ch.to_lowercase() {
                let before = folded.len();
                folded.push(lower);
                origin.extend(std::iter::repeat(index).take(folded.len() - before));
            }
        }
        origin.push(original.len());
        Self {
            original,
            folded,
            origin,
        }
    }

    fn contains(&self, needle: &str) -> bool {
        self.folded.contains(needle)
    }

    fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|needle| self.contains(needle))
    }

    /// Original-text byte offset where a folded match ending at `folded_end` ends.
    fn original_end(&self, folded_end: usize) -> usize {
        self.origin
            .get(folded_end)
            .copied()
            .unwrap_or(self.original.len())
    }

    /// First table entry with an alias present in the text, in table order.
    fn first_match<T: Copy>(&self, table: &[(T, &[&str])]) -> Option<T> {
        table
            .iter()
            .find(|(_, aliases)| self.contains_any(aliases))
            .map(|(value, _)| *value)
    }

    /// Whether `needle` occurs with no Latin letter or digit glued to either
    /// side. Arabic prefixes such as "ب" or "ال" do not block a match.
    fn contains_word(&self, needle: &str) -> bool {
        self.folded.match_indices(needle).any(|(start, _)| {
            let before = self.folded[..start].chars().next_back();
            let after = self.folded[start + needle.len()..].chars().next();
            !before.is_some_and(is_latin_word_char) && !after.is_some_and(is_latin_word_char)
        })
    }

    /// Table entry owning the longest alias present as a whole word. Ties go
    /// to the earlier entry.
    fn longest_word_match<T: Copy>(&self, table: &[(T, &[&str])]) -> Option<T> {
        table
            .iter()
            .flat_map(|(value, aliases)| aliases.iter().map(move |alias| (*value, *alias)))
            .filter(|(_, alias)| self.contains_word(alias))
            .min_by_key(|(_, alias)| Reverse(alias.len()))
            .map(|(value, _)| value)
    }
}

fn is_latin_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
}

/// Rule-based classifier over fixed vocabularies.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classifies a message.
    ///
    /// The category comes from the message when a category word is present,
    /// otherwise from `context.category`, otherwise it is `none`. Sub-attributes
    /// are only extracted for the resolved category. `context.usage` settles
    /// whether a bare "adventure" names the usage or the bike type. Pure: no
    /// I/O, no errors.
    pub fn classify(&self, message: &str, context: &SlotSet) -> SlotSet {
        let text = FoldedText::new(message);
        let category = text
            .first_match(CATEGORY_PRIORITY)
            .or(context.category)
            .unwrap_or(Category::None);

        let mut slots = SlotSet {
            category: Some(category),
            ..Default::default()
        };

        match category {
            Category::Safety => extract_safety(&text, context, &mut slots),
            Category::SparePart => extract_spare_part(&text, &mut slots),
            Category::Accessory => extract_accessory(&text, context, &mut slots),
            Category::None => {}
        }

        slots
    }
}

fn extract_safety(text: &FoldedText<'_>, context: &SlotSet, slots: &mut SlotSet) {
    let gear = text.first_match(GEAR_WORDS).unwrap_or(GearIntent::None);
    let helmet_style: Option<HelmetStyle> = match gear {
        GearIntent::Helmet => text.first_match(HELMET_STYLE_WORDS),
        _ => None,
    };

    slots.item_type = gear.item_type(helmet_style);
    (slots.usage, slots.bike_type) = usage_and_bike_type(text, context);
    slots.gear_brand = first_display_name(text, GEAR_BRANDS).map(str::to_string);
}

fn extract_spare_part(text: &FoldedText<'_>, slots: &mut SlotSet) {
    slots.item_type = Some(ItemType::SparePart);
    slots.part_name = first_display_name(text, SPARE_PARTS).map(str::to_string);
    // Usage is never asked for spare parts.
    let bike_type = text
        .longest_word_match(BIKE_TYPE_WORDS)
        .or_else(|| text.contains_any(ADVENTURE_WORDS).then_some(BikeType::Adventure));
    extract_bike(text, bike_type, slots);
}

fn extract_accessory(text: &FoldedText<'_>, context: &SlotSet, slots: &mut SlotSet) {
    slots.part_name = first_display_name(text, ACCESSORIES).map(str::to_string);
    if slots.part_name.is_some() {
        slots.item_type = Some(ItemType::Accessory);
    }
    let (usage, bike_type) = usage_and_bike_type(text, context);
    slots.usage = usage;
    extract_bike(text, bike_type, slots);
}

/// Brand, model guess and year. A bike type named in the message wins over
/// one implied by the model.
fn extract_bike(text: &FoldedText<'_>, bike_type: Option<BikeType>, slots: &mut SlotSet) {
    if let Some((brand, model)) = detect_bike_brand(text) {
        slots.bike_brand = Some(brand.to_string());
        slots.bike_model = model;
    }
    slots.bike_year = detect_year(text.original);
    slots.bike_type = bike_type.or_else(|| {
        slots
            .bike_model
            .as_deref()
            .and_then(bike_type_from_model)
    });
}

fn detect_usage(text: &FoldedText<'_>) -> Option<Usage> {
    text.first_match(USAGE_WORDS)
}

/// A bare "adventure" is the usage until usage is settled, either by the
/// context or by another usage word in the message. After that it names
/// the bike type and leaves usage alone.
fn usage_and_bike_type(
    text: &FoldedText<'_>,
    context: &SlotSet,
) -> (Option<Usage>, Option<BikeType>) {
    if let Some(bike_type) = text.longest_word_match(BIKE_TYPE_WORDS) {
        return (detect_usage(text), Some(bike_type));
    }
    if !text.contains_any(ADVENTURE_WORDS) {
        return (detect_usage(text), None);
    }

    let named_usage = USAGE_WORDS
        .iter()
        .find(|(_, aliases)| {
            aliases
                .iter()
                .any(|alias| !ADVENTURE_WORDS.contains(alias) && text.contains(alias))
        })
        .map(|(usage, _)| *usage);
    let usage_settled =
        context.usage.is_some() || named_usage.is_some_and(|usage| usage != Usage::Adventure);

    if usage_settled {
        (named_usage, Some(BikeType::Adventure))
    } else {
        (Some(Usage::Adventure), None)
    }
}

fn first_display_name(text: &FoldedText<'_>, table: &[(&'static str, &[&str])]) -> Option<&'static str> {
    text.first_match(table)
}

/// First bike brand in vocabulary order, paired with the whitespace token
/// that follows it in the message as a model guess.
fn detect_bike_brand(text: &FoldedText<'_>) -> Option<(&'static str, Option<String>)> {
    for (brand, aliases) in BIKE_BRANDS {
        for alias in *aliases {
            if let Some(start) = text.folded.find(alias) {
                let end = text.original_end(start + alias.len());
                return Some((*brand, model_after(&text.original[end..])));
            }
        }
    }
    None
}

/// The token after a brand match. When the match ended inside a word the
/// rest of that word is skipped first.
fn model_after(rest: &str) -> Option<String> {
    let rest = if rest.starts_with(char::is_whitespace) {
        rest
    } else {
        rest.find(char::is_whitespace).map_or("", |i| &rest[i..])
    };

    let token = rest.split_whitespace().next()?.trim_matches(TOKEN_PUNCTUATION);
    if token.is_empty() || detect_year(token).as_deref() == Some(token) {
        return None;
    }
    Some(token.to_string())
}

fn detect_year(message: &str) -> Option<String> {
    BIKE_YEAR_PATTERN
        .captures(message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn bike_type_from_model(model: &str) -> Option<BikeType> {
    let model = model.to_lowercase();
    MODEL_BIKE_TYPES
        .iter()
        .find(|(prefix, _)| model.starts_with(prefix))
        .map(|(_, bike_type)| *bike_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(message: &str) -> SlotSet {
        KeywordClassifier::new().classify(message, &SlotSet::new())
    }

    #[test]
    fn arabic_full_face_city_sport() {
        let slots = classify("بدي خوذة فل فيس للمدينة على دراجة سبورت");
        assert_eq!(slots.category, Some(Category::Safety));
        assert_eq!(slots.item_type, Some(ItemType::HelmetFullface));
        assert_eq!(slots.usage, Some(Usage::City));
        assert_eq!(slots.bike_type, Some(BikeType::Sport));
    }

    #[test]
    fn generic_helmet_leaves_style_unresolved() {
        let slots = classify("helmet");
        assert_eq!(slots.category, Some(Category::Safety));
        assert_eq!(slots.item_type, Some(ItemType::HelmetUnknown));
        assert_eq!(slots.usage, None);
        assert_eq!(slots.bike_type, None);
    }

    #[test]
    fn spare_part_with_brand_model_and_year() {
        let slots = classify("need oil filter for Yamaha R3 2019");
        assert_eq!(slots.category, Some(Category::SparePart));
        assert_eq!(slots.item_type, Some(ItemType::SparePart));
        assert_eq!(slots.part_name.as_deref(), Some("oil filter"));
        assert_eq!(slots.bike_brand.as_deref(), Some("Yamaha"));
        assert_eq!(slots.bike_model.as_deref(), Some("R3"));
        assert_eq!(slots.bike_year.as_deref(), Some("2019"));
        assert_eq!(slots.bike_type, Some(BikeType::Sport));
    }

    #[test]
    fn spare_part_keywords_without_other_categories_classify_as_spare_part() {
        for message in ["brake pads please", "بدي قطع غيار", "new chain", "battery for my bike"] {
            assert_eq!(
                classify(message).category,
                Some(Category::SparePart),
                "{message}"
            );
        }
    }

    #[test]
    fn safety_is_checked_before_accessory() {
        // "حماية" is also an accessory word.
        assert_eq!(classify("جاكيت حماية").category, Some(Category::Safety));
        assert_eq!(classify("helmet bluetooth intercom").category, Some(Category::Safety));
    }

    #[test]
    fn spare_part_is_checked_before_accessory() {
        assert_eq!(classify("mirror cover").category, Some(Category::SparePart));
    }

    #[test]
    fn accessory_detected_with_specific_item() {
        let slots = classify("usb charger for touring on my cruiser");
        assert_eq!(slots.category, Some(Category::Accessory));
        assert_eq!(slots.item_type, Some(ItemType::Accessory));
        assert_eq!(slots.part_name.as_deref(), Some("usb charger"));
        assert_eq!(slots.usage, Some(Usage::Touring));
        assert_eq!(slots.bike_type, Some(BikeType::Cruiser));
    }

    #[test]
    fn generic_accessory_leaves_item_type_absent() {
        let slots = classify("show me accessories");
        assert_eq!(slots.category, Some(Category::Accessory));
        assert_eq!(slots.item_type, None);
        assert_eq!(slots.part_name, None);
    }

    #[test]
    fn falls_back_to_context_category() {
        let context = SlotSet {
            category: Some(Category::Safety),
            ..Default::default()
        };
        let slots = KeywordClassifier::new().classify("for city riding on a scooter", &context);
        assert_eq!(slots.category, Some(Category::Safety));
        assert_eq!(slots.usage, Some(Usage::City));
        assert_eq!(slots.bike_type, Some(BikeType::Scooter));
    }

    #[test]
    fn message_category_wins_over_context() {
        let context = SlotSet {
            category: Some(Category::Accessory),
            ..Default::default()
        };
        let slots = KeywordClassifier::new().classify("gloves", &context);
        assert_eq!(slots.category, Some(Category::Safety));
        assert_eq!(slots.item_type, Some(ItemType::Gloves));
    }

    #[test]
    fn unknown_message_is_category_none_without_slots() {
        let slots = classify("hello there, city sport");
        assert_eq!(slots.category, Some(Category::None));
        assert_eq!(slots.usage, None);
        assert_eq!(slots.bike_type, None);
    }

    #[test]
    fn sub_attributes_are_not_mutually_exclusive() {
        let slots = classify("jacket for adventure on my adventure bike");
        assert_eq!(slots.item_type, Some(ItemType::Jacket));
        assert_eq!(slots.usage, Some(Usage::Adventure));
        assert_eq!(slots.bike_type, Some(BikeType::Adventure));
    }

    #[test]
    fn gear_brand_detected_for_safety() {
        let slots = classify("Shoei full face helmet for touring");
        assert_eq!(slots.gear_brand.as_deref(), Some("Shoei"));
        assert_eq!(slots.item_type, Some(ItemType::HelmetFullface));
    }

    #[test]
    fn brand_order_follows_vocabulary_not_message() {
        let slots = classify("chain for honda or yamaha");
        assert_eq!(slots.bike_brand.as_deref(), Some("Yamaha"));
        assert_eq!(slots.bike_model, None);
    }

    #[test]
    fn model_guess_strips_punctuation_and_skips_years() {
        let slots = classify("brake pads for Kawasaki Ninja, please");
        assert_eq!(slots.bike_model.as_deref(), Some("Ninja"));

        let slots = classify("brake pads for Honda 2015");
        assert_eq!(slots.bike_model, None);
        assert_eq!(slots.bike_year.as_deref(), Some("2015"));
    }

    #[test]
    fn model_guess_skips_rest_of_glued_word() {
        let slots = classify("battery for harley-davidson sportster");
        assert_eq!(slots.bike_brand.as_deref(), Some("Harley-Davidson"));
        assert_eq!(slots.bike_model.as_deref(), Some("sportster"));
    }

    #[test]
    fn first_year_wins() {
        let slots = classify("chain for honda cbr 2012 or 2018");
        assert_eq!(slots.bike_year.as_deref(), Some("2012"));
    }

    #[test]
    fn gear_intent_is_a_single_tag() {
        assert_eq!(classify("خوذة").item_type, Some(ItemType::HelmetUnknown));
        assert_eq!(classify("boots and gloves").item_type, Some(ItemType::Gloves));
        assert_eq!(classify("oil filter").category, Some(Category::SparePart));
    }

    #[test]
    fn sport_does_not_match_inside_longer_words() {
        let slots = classify("battery for harley-davidson sportster 2015");
        assert_eq!(slots.bike_model.as_deref(), Some("sportster"));
        assert_eq!(slots.bike_type, Some(BikeType::Cruiser));

        let slots = classify("helmet for riding to work, no public transport");
        assert_eq!(slots.bike_type, None);
    }

    #[test]
    fn longest_bike_type_alias_wins() {
        let slots = classify("helmet for my dual sport");
        assert_eq!(slots.bike_type, Some(BikeType::Adventure));

        let slots = classify("gloves for my sport bike");
        assert_eq!(slots.bike_type, Some(BikeType::Sport));
    }

    #[test]
    fn adventure_riding_is_usage_not_bike_type() {
        let slots = classify("jacket for adventure riding");
        assert_eq!(slots.usage, Some(Usage::Adventure));
        assert_eq!(slots.bike_type, None);
    }

    #[test]
    fn bare_adventure_names_bike_type_once_usage_is_known() {
        let context = SlotSet {
            category: Some(Category::Safety),
            usage: Some(Usage::Touring),
            ..Default::default()
        };
        let slots = KeywordClassifier::new().classify("adventure", &context);
        assert_eq!(slots.usage, None);
        assert_eq!(slots.bike_type, Some(BikeType::Adventure));

        let slots = classify("touring jacket, I ride an adventure");
        assert_eq!(slots.usage, Some(Usage::Touring));
        assert_eq!(slots.bike_type, Some(BikeType::Adventure));
    }

    #[test]
    fn arabic_bike_type_matches_with_attached_prefix() {
        let slots = classify("خوذة للسفر على دراجتي السبورت");
        assert_eq!(slots.bike_type, Some(BikeType::Sport));
    }
}
