//! Response composer.
//!
//! Two branches: an incomplete prompt that restates what was understood and
//! asks for each missing slot, and a complete reply with the search link,
//! ranked picks and per-category notes. All text comes from [`templates`];
//! output is a pure function of the inputs.
//!
//! [`templates`]: super::templates

use super::locale::Locale;
use super::slots::{Category, ItemType, SlotName, SlotSet};
use super::templates::{lookup, render, text};
use super::turn::SearchLink;
use crate::domain::catalog::RankedItem;

const PARAGRAPH_BREAK: &str = "\n\n";

#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseComposer;

impl ResponseComposer {
    pub fn new() -> Self {
        Self
    }

    /// Prompt for a request that still misses slots.
    pub fn compose_incomplete(
        &self,
        locale: Locale,
        category: Category,
        slots: &SlotSet,
        missing: &[SlotName],
    ) -> String {
        let mut paragraphs = vec![self.summary(locale, category, slots)];

        let questions = questions(locale, category, slots, missing);
        if !questions.is_empty() {
            let mut block = text("ask.header", locale).to_string();
            for question in &questions {
                block.push_str("\n- ");
                block.push_str(question);
            }
            paragraphs.push(block);
        }

        // Nothing is resolved yet while the category itself is unknown.
        if questions.len() == 1 && !category.is_none() {
            paragraphs.push(text("ask.almostReady", locale).to_string());
        }

        paragraphs.join(PARAGRAPH_BREAK)
    }

    /// Reply for a complete request. The link goes first; a missing link
    /// is reported without failing the reply.
    pub fn compose_complete(
        &self,
        locale: Locale,
        category: Category,
        slots: &SlotSet,
        link: Option<&SearchLink>,
        products: &[RankedItem],
    ) -> String {
        let mut paragraphs = vec![self.summary(locale, category, slots)];

        paragraphs.push(match link {
            Some(link) => render("result.searchLink", locale, &[("url", link.url.as_str())]),
            None => text("result.linkUnavailable", locale).to_string(),
        });

        if !products.is_empty() {
            let mut block = text("result.topPicks", locale).to_string();
            for (index, item) in products.iter().enumerate() {
                block.push('\n');
                block.push_str(&product_line(locale, index + 1, item));
            }
            paragraphs.push(block);
        }

        match category {
            Category::SparePart => {
                paragraphs.push(text("result.compatibility", locale).to_string())
            }
            Category::Accessory => paragraphs.push(text("result.accessoryFit", locale).to_string()),
            Category::Safety | Category::None => {}
        }

        paragraphs.join(PARAGRAPH_BREAK)
    }

    /// One sentence restating the resolved slots.
    pub fn summary(&self, locale: Locale, category: Category, slots: &SlotSet) -> String {
        let mut parts: Vec<String> = Vec::new();

        match category {
            Category::Safety => {
                let subject = match slots.item_type_for(Category::Safety) {
                    Some(item) => item_label(locale, item),
                    None => text("category.safety", locale).to_string(),
                };
                parts.push(subject);
                if let Some(brand) = slots.gear_brand_text() {
                    parts.push(render("summary.gearBrand", locale, &[("brand", brand)]));
                }
            }
            Category::SparePart => {
                parts.push(text("category.spare-part", locale).to_string());
                if let Some(part) = slots.text(SlotName::PartName) {
                    parts.push(render("summary.part", locale, &[("part", part)]));
                }
            }
            Category::Accessory => match slots.text(SlotName::PartName) {
                Some(part) => parts.push(render("summary.accessory", locale, &[("part", part)])),
                None => parts.push(text("category.accessory", locale).to_string()),
            },
            Category::None => {}
        }

        if let Some(usage) = slots.usage {
            let usage = label(locale, &format!("usage.{}", usage.as_str()));
            parts.push(render("summary.usage", locale, &[("usage", usage.as_str())]));
        }

        if let Some(bike_type) = slots.bike_type {
            let bike_type = label(locale, &format!("bike.{}", bike_type.as_str()));
            parts.push(render("summary.bikeType", locale, &[("bikeType", bike_type.as_str())]));
        }

        let bike: Vec<&str> = [SlotName::BikeBrand, SlotName::BikeModel, SlotName::BikeYear]
            .into_iter()
            .filter_map(|slot| slots.text(slot))
            .collect();
        if !bike.is_empty() {
            parts.push(render("summary.bike", locale, &[("bike", bike.join(" ").as_str())]));
        }

        if parts.is_empty() {
            return text("summary.nothing", locale).to_string();
        }

        format!(
            "{} {}.",
            text("summary.lead", locale),
            parts.join(text("summary.separator", locale))
        )
    }
}

/// Follow-up questions, in missing-slot order. An unresolved helmet style is
/// asked right after the item type would have been.
fn questions(
    locale: Locale,
    category: Category,
    slots: &SlotSet,
    missing: &[SlotName],
) -> Vec<String> {
    let mut questions: Vec<String> = Vec::with_capacity(missing.len() + 1);

    if category == Category::Safety
        && slots.item_type_for(Category::Safety) == Some(ItemType::HelmetUnknown)
    {
        questions.push(text("ask.safety.helmetStyle", locale).to_string());
    }

    for slot in missing {
        let key = format!("ask.{}.{}", category.as_str(), slot.as_str());
        questions.push(label(locale, &key));
    }

    questions
}

fn item_label(locale: Locale, item: ItemType) -> String {
    label(locale, &format!("item.{}", item.as_str()))
}

fn label(locale: Locale, key: &str) -> String {
    text(key, locale).to_string()
}

fn product_line(locale: Locale, position: usize, item: &RankedItem) -> String {
    let tier = lookup(&format!("tier.{}", item.label), locale)
        .unwrap_or_else(|| text("tier.suggested", locale));
    let position = position.to_string();
    let price = format_price(item.price);

    render(
        "result.product",
        locale,
        &[
            ("n", position.as_str()),
            ("tier", tier),
            ("brand", item.brand.as_str()),
            ("name", item.name.as_str()),
            ("price", price.as_str()),
            ("currency", item.currency.as_str()),
            ("store", item.store.as_str()),
        ],
    )
}

fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0}", price)
    } else {
        format!("{:.2}", price)
    }
}
