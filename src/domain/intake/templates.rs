//! Localized reply text.
//!
//! One table keyed by `(template key, locale)`. Keys are dotted paths:
//! `ask.<category>.<slot>` for follow-up questions, `item.<item type>`,
//! `usage.<usage>`, `bike.<bike type>` and `tier.<label>` for value labels.
//! Placeholders are written `{name}` and filled by [`render`].

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::locale::Locale;

/// `(key, ar, en)`
const ROWS: &[(&str, &str, &str)] = &[
    // Summary
    ("summary.lead", "هذا اللي فهمته لحد الآن:", "Here is what I understood so far:"),
    ("summary.separator", "، ", ", "),
    ("summary.nothing", "لسا ما عرفت شو اللي بتدور عليه.", "I couldn't tell yet what you're looking for."),
    ("summary.usage", "للاستخدام في {usage}", "for {usage}"),
    ("summary.bikeType", "على دراجة {bikeType}", "on a {bikeType}"),
    ("summary.bike", "لدراجتك {bike}", "for your {bike}"),
    ("summary.part", "القطعة: {part}", "part: {part}"),
    ("summary.accessory", "الإكسسوار: {part}", "accessory: {part}"),
    ("summary.gearBrand", "الماركة: {brand}", "brand: {brand}"),
    // Category labels
    ("category.safety", "معدات حماية", "protective gear"),
    ("category.spare-part", "قطعة غيار", "a spare part"),
    ("category.accessory", "إكسسوار", "an accessory"),
    // Item labels
    ("item.helmet-fullface", "خوذة فل فيس", "a full-face helmet"),
    ("item.helmet-openface", "خوذة اوبن فيس", "an open-face helmet"),
    ("item.helmet-modular", "خوذة مودولار", "a modular helmet"),
    ("item.helmet-unknown", "خوذة", "a helmet"),
    ("item.jacket", "جاكيت حماية", "a riding jacket"),
    ("item.gloves", "قفازات", "riding gloves"),
    ("item.boots", "بوت حماية", "riding boots"),
    ("item.spare-part", "قطعة غيار", "a spare part"),
    ("item.accessory", "إكسسوار", "an accessory"),
    // Usage labels
    ("usage.city", "المدينة", "city riding"),
    ("usage.touring", "السفر والطرق الطويلة", "touring"),
    ("usage.adventure", "الأدفنشر والطرق الوعرة", "adventure / off-road"),
    // Bike type labels
    ("bike.sport", "سبورت", "sport bike"),
    ("bike.cruiser", "كروزر", "cruiser"),
    ("bike.scooter", "سكوتر", "scooter"),
    ("bike.adventure", "أدفنشر", "adventure bike"),
    // Follow-up questions
    ("ask.header", "عشان ألاقيلك الأنسب، محتاج أعرف:", "To find the right match I still need to know:"),
    ("ask.none.category", "شو اللي بتدور عليه: معدات حماية (خوذة، جاكيت، قفازات، بوت)، قطعة غيار، ولا إكسسوار؟", "Are you looking for protective gear (helmet, jacket, gloves, boots), a spare part, or an accessory?"),
    ("ask.safety.itemType", "شو القطعة اللي بدك إياها: خوذة، جاكيت، قفازات ولا بوت؟", "Which item do you need: a helmet, jacket, gloves or boots?"),
    ("ask.safety.helmetStyle", "أي نوع خوذة بتفضل: فل فيس، مودولار ولا اوبن فيس؟", "Which helmet style do you prefer: full-face, modular or open-face?"),
    ("ask.safety.usage", "وين رح تستخدمها أكثر: بالمدينة، بالسفر ولا أدفنشر/أوف رود؟", "Where will you mostly ride: city, touring or adventure/off-road?"),
    ("ask.safety.bikeType", "شو نوع دراجتك: سبورت، كروزر، سكوتر ولا أدفنشر؟", "What type of bike do you ride: sport, cruiser, scooter or adventure?"),
    ("ask.spare-part.bikeType", "شو نوع الدراجة: سبورت، كروزر، سكوتر ولا أدفنشر؟", "What type of bike is it: sport, cruiser, scooter or adventure?"),
    ("ask.spare-part.bikeBrand", "شو ماركة دراجتك (مثلاً ياماها، هوندا، كاواساكي)؟", "What is your bike's brand (e.g. Yamaha, Honda, Kawasaki)?"),
    ("ask.spare-part.bikeModel", "شو الموديل بالضبط (مثلاً R3 أو CBR500R)؟", "What is the exact model (e.g. R3, CBR500R)?"),
    ("ask.spare-part.bikeYear", "شو سنة صنع الدراجة؟", "What year is your bike?"),
    ("ask.spare-part.partName", "شو القطعة اللي بتحتاجها (مثلاً فلتر زيت، تيل فرامل، جنزير)؟", "Which part do you need (e.g. oil filter, brake pads, chain)?"),
    ("ask.accessory.itemType", "أي إكسسوار بدك (مثلاً حامل جوال، صندوق خلفي، شنطة تانك، انتركم)؟", "Which accessory are you after (e.g. phone holder, top box, tank bag, intercom)?"),
    ("ask.accessory.usage", "كيف رح تستخدمه أكثر: بالمدينة، بالسفر ولا أدفنشر؟", "How will you mostly use it: city, touring or adventure?"),
    ("ask.accessory.bikeType", "على أي نوع دراجة رح تركبه: سبورت، كروزر، سكوتر ولا أدفنشر؟", "What type of bike will it go on: sport, cruiser, scooter or adventure?"),
    ("ask.almostReady", "باقي تفصيلة وحدة وبجهزلك الخيارات!", "Just one more detail and your picks are ready!"),
    // Complete branch
    ("result.searchLink", "هذا رابط بحث مخصص لطلبك: {url}", "Here is a search tailored to your request: {url}"),
    ("result.linkUnavailable", "ما قدرت أجهز رابط البحث حالياً، بس التفاصيل فوق بتكفي للبحث بأي متجر.", "I couldn't build a search link right now, but the details above are enough to search any store."),
    ("result.topPicks", "أفضل الخيارات إلك:", "Top picks for you:"),
    ("result.product", "{n}. {tier}: {brand} {name} - {price} {currency} ({store})", "{n}. {tier}: {brand} {name} - {price} {currency} ({store})"),
    ("result.compatibility", "تأكد من توافق القطعة مع موديل وسنة دراجتك قبل الطلب.", "Please double-check compatibility with your exact model and year before ordering."),
    ("result.accessoryFit", "تأكد من نقاط التركيب على دراجتك قبل الطلب.", "Check the mounting points on your bike before ordering."),
    // Tier labels
    ("tier.cheapest", "الأرخص", "Cheapest"),
    ("tier.best_value", "أفضل قيمة", "Best value"),
    ("tier.premium", "بريميوم", "Premium"),
    ("tier.suggested", "خيار مقترح", "Suggested option"),
    // Service
    ("bot.name", "رايدر المشتريات", "Rider Purchases"),
    // Errors
    ("error.messageRequired", "الرجاء كتابة رسالتك.", "Please type your message."),
    ("error.profileNotFound", "ما في ملف محفوظ لهذا المستخدم.", "No saved profile for this user."),
    ("error.internal", "صار خطأ غير متوقع، جرب كمان مرة بعد شوي.", "Something went wrong on our side, please try again shortly."),
];

static TABLE: Lazy<HashMap<&'static str, [&'static str; 2]>> = Lazy::new(|| {
    ROWS.iter()
        .map(|(key, ar, en)| (*key, [*ar, *en]))
        .collect()
});

/// Template text for `key`, if the key exists.
pub fn lookup(key: &str, locale: Locale) -> Option<&'static str> {
    TABLE.get(key).map(|variants| variants[locale.index()])
}

/// Template text for `key`. An unknown key renders as itself.
pub fn text<'a>(key: &'a str, locale: Locale) -> &'a str {
    lookup(key, locale).unwrap_or(key)
}

/// Fills `{name}` placeholders in the template for `key` in one pass.
/// Substituted values are never scanned again; unknown placeholders stay
/// as written.
pub fn render(key: &str, locale: Locale, values: &[(&str, &str)]) -> String {
    let template = text(key, locale);
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let filled = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(candidate, _)| *candidate == name)
                .map(|(_, value)| (*value, close))
        });
        match filled {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::gate::required_slots;
    use crate::domain::intake::slots::{BikeType, Category, ItemType, Usage};

    #[test]
    fn keys_are_unique() {
        assert_eq!(TABLE.len(), ROWS.len());
    }

    #[test]
    fn every_row_has_both_variants() {
        for (key, ar, en) in ROWS {
            assert!(!ar.is_empty(), "missing ar text for {key}");
            assert!(!en.is_empty(), "missing en text for {key}");
        }
    }

    #[test]
    fn every_required_slot_has_a_question() {
        for category in Category::all() {
            for slot in required_slots(*category) {
                let key = format!("ask.{}.{}", category.as_str(), slot.as_str());
                assert!(lookup(&key, Locale::Ar).is_some(), "missing {key}");
            }
        }
    }

    #[test]
    fn every_value_has_a_label() {
        let keys = ItemType::all()
            .iter()
            .map(|v| format!("item.{}", v.as_str()))
            .chain(Usage::all().iter().map(|v| format!("usage.{}", v.as_str())))
            .chain(BikeType::all().iter().map(|v| format!("bike.{}", v.as_str())));

        for key in keys {
            assert!(lookup(&key, Locale::En).is_some(), "missing {key}");
        }
    }

    #[test]
    fn render_fills_placeholders() {
        let text = render("summary.usage", Locale::En, &[("usage", "touring")]);
        assert_eq!(text, "for touring");
    }

    #[test]
    fn render_does_not_expand_placeholders_inside_values() {
        let text = render(
            "result.product",
            Locale::En,
            &[
                ("n", "1"),
                ("tier", "Cheapest"),
                ("brand", "{name}"),
                ("name", "Street Helmet"),
                ("price", "89"),
                ("currency", "USD"),
                ("store", "{store}"),
            ],
        );
        assert_eq!(text, "1. Cheapest: {name} Street Helmet - 89 USD ({store})");
    }

    #[test]
    fn render_keeps_unknown_placeholders() {
        let text = render("summary.usage", Locale::En, &[("other", "x")]);
        assert_eq!(text, "for {usage}");
    }

    #[test]
    fn unknown_key_renders_as_itself() {
        assert_eq!(text("no.such.key", Locale::Ar), "no.such.key");
    }
}
