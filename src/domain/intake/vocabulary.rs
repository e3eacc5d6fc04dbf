//! Fixed keyword vocabularies used by the classifier.
//!
//! Every entry is matched as a lower-case substring of the lower-cased
//! message. Lists that map to a canonical value are scanned in list order,
//! so more specific phrases come before the generic ones they contain.

use once_cell::sync::Lazy;
use regex::Regex;

use super::slots::{BikeType, GearIntent, HelmetStyle, Usage};

/// Protective gear. Helmet style phrases count on their own ("full face").
pub const SAFETY_WORDS: &[&str] = &[
    "خوذة", "خوذه", "خودة", "helmet", "فل فيس", "فول فيس", "full face", "fullface", "full-face",
    "modular", "open face", "open-face", "جاكيت", "جاكت", "jacket", "قفازات", "قفاز", "كفوف",
    "قلفز", "gloves", "glove", "بوت", "جزمة", "boots", "boot", "safety gear", "protective gear",
    "لبس حماية", "ملابس حماية",
];

pub const SPARE_PART_WORDS: &[&str] = &[
    "قطع غيار", "قطعة غيار", "قطع", "غيار", "spare", "part", "فلتر", "filter", "فرامل", "brake",
    "تيل", "فحمات", "pads", "جنزير", "سلسلة", "chain", "sprocket", "مسننات", "بوجي", "بواجي",
    "spark plug", "بطارية", "battery", "كلتش", "دبرياج", "clutch", "كفر", "إطار", "اطار", "tire",
    "tyre", "زيت", "oil", "مراية", "مرآة", "mirror",
];

pub const ACCESSORY_WORDS: &[&str] = &[
    "اكسسوارات", "إكسسوارات", "اكسسوار", "إكسسوار", "accessories", "accessory", "شنط", "حامل",
    "holder", "bag", "cover", "غطاء", "windshield", "زجاج", "crash", "usb", "شاحن", "حماية", "intercom",
    "بلوتوث", "bluetooth", "انتركم", "top box", "صندوق", "tank bag", "mount",
];

/// Gear sub-intents, tested in this order; the first hit wins.
pub const GEAR_WORDS: &[(GearIntent, &[&str])] = &[
    (
        GearIntent::Helmet,
        &[
            "خوذة", "خوذه", "خودة", "helmet", "فل فيس", "فول فيس", "full face", "fullface",
            "full-face", "modular", "open face", "open-face",
        ],
    ),
    (GearIntent::Jacket, &["جاكيت", "جاكت", "jacket"]),
    (
        GearIntent::Gloves,
        &["قفازات", "قفاز", "كفوف", "قلفز", "gloves", "glove"],
    ),
    (GearIntent::Boots, &["بوت", "جزمة", "boots", "boot"]),
];

pub const HELMET_STYLE_WORDS: &[(HelmetStyle, &[&str])] = &[
    (
        HelmetStyle::FullFace,
        &["فل فيس", "فول فيس", "full face", "fullface", "full-face"],
    ),
    (
        HelmetStyle::Modular,
        &["modular", "flip up", "flip-up", "مودولار", "مودلر", "قلاب"],
    ),
    (
        HelmetStyle::OpenFace,
        &["open face", "open-face", "jet", "half helmet", "نص وجه", "مفتوحة", "اوبن فيس"],
    ),
];

pub const USAGE_WORDS: &[(Usage, &[&str])] = &[
    (
        Usage::City,
        &["مدينة", "المدينة", "city", "يومي", "daily", "commute", "داخل البلد"],
    ),
    (
        Usage::Touring,
        &["سفر", "touring", "tour", "travel", "highway", "هاي وي", "مسافات طويلة", "طريق سريع"],
    ),
    (
        Usage::Adventure,
        &["ادفنشر", "أدفنشر", "adventure", "off-road", "offroad", "off road", "اوف رود", "أوف رود"],
    ),
];

/// Matched as whole words; the longest alias wins, so "dual sport" beats "sport".
pub const BIKE_TYPE_WORDS: &[(BikeType, &[&str])] = &[
    (BikeType::Sport, &["سبورت", "رياضية", "sport", "sportbike"]),
    (BikeType::Cruiser, &["كروزر", "cruiser", "chopper"]),
    (BikeType::Scooter, &["سكوتر", "scooter", "vespa"]),
    (
        BikeType::Adventure,
        &[
            "adventure bike",
            "adv bike",
            "دراجة ادفنشر",
            "دراجة أدفنشر",
            "dual sport",
            "dual-sport",
            "enduro",
        ],
    ),
];

/// Words shared by the adventure usage and the adventure bike type. They
/// name the bike type only when usage is already settled.
pub const ADVENTURE_WORDS: &[&str] = &["ادفنشر", "أدفنشر", "adventure"];

/// Motorcycle makers: (display name, aliases). Longer aliases first where
/// one contains another.
pub const BIKE_BRANDS: &[(&str, &[&str])] = &[
    ("Yamaha", &["yamaha", "ياماها"]),
    ("Honda", &["honda", "هوندا"]),
    ("Kawasaki", &["kawasaki", "كاواساكي", "كوازاكي"]),
    ("Suzuki", &["suzuki", "سوزوكي"]),
    ("Ducati", &["ducati", "دوكاتي"]),
    ("BMW", &["bmw", "بي ام دبليو"]),
    ("KTM", &["ktm"]),
    ("Harley-Davidson", &["harley-davidson", "harley davidson", "harley", "هارلي"]),
    ("Triumph", &["triumph", "ترايمف"]),
    ("Aprilia", &["aprilia", "ابريليا"]),
    ("Benelli", &["benelli", "بينيلي"]),
    ("Royal Enfield", &["royal enfield", "رويال انفيلد"]),
    ("Vespa", &["vespa", "فيسبا"]),
];

/// Model-name prefixes that imply a bike type when the message names a
/// model but not a type. Scanned in order, so "gsx" precedes "gs".
pub const MODEL_BIKE_TYPES: &[(&str, BikeType)] = &[
    ("gsx", BikeType::Sport),
    ("gs", BikeType::Adventure),
    ("r1", BikeType::Sport),
    ("r3", BikeType::Sport),
    ("r6", BikeType::Sport),
    ("r7", BikeType::Sport),
    ("r25", BikeType::Sport),
    ("yzf", BikeType::Sport),
    ("cbr", BikeType::Sport),
    ("ninja", BikeType::Sport),
    ("zx", BikeType::Sport),
    ("panigale", BikeType::Sport),
    ("rc", BikeType::Sport),
    ("duke", BikeType::Sport),
    ("mt-", BikeType::Sport),
    ("rebel", BikeType::Cruiser),
    ("shadow", BikeType::Cruiser),
    ("vulcan", BikeType::Cruiser),
    ("sportster", BikeType::Cruiser),
    ("fat", BikeType::Cruiser),
    ("bolt", BikeType::Cruiser),
    ("intruder", BikeType::Cruiser),
    ("africa", BikeType::Adventure),
    ("tenere", BikeType::Adventure),
    ("v-strom", BikeType::Adventure),
    ("versys", BikeType::Adventure),
    ("tiger", BikeType::Adventure),
    ("adventure", BikeType::Adventure),
    ("pcx", BikeType::Scooter),
    ("nmax", BikeType::Scooter),
    ("xmax", BikeType::Scooter),
    ("tmax", BikeType::Scooter),
    ("burgman", BikeType::Scooter),
    ("forza", BikeType::Scooter),
];

/// Protective-gear makers.
pub const GEAR_BRANDS: &[(&str, &[&str])] = &[
    ("Shoei", &["shoei", "شوي"]),
    ("Arai", &["arai", "أراي"]),
    ("AGV", &["agv"]),
    ("HJC", &["hjc"]),
    ("LS2", &["ls2"]),
    ("Shark", &["shark"]),
    ("Bell", &["bell"]),
    ("Icon", &["icon"]),
    ("Alpinestars", &["alpinestars", "الباين ستارز"]),
    ("Dainese", &["dainese", "داينيزي"]),
    ("Rev'It", &["rev'it", "revit"]),
    ("Klim", &["klim"]),
    ("Scorpion", &["scorpion"]),
    ("Nolan", &["nolan"]),
    ("Schuberth", &["schuberth"]),
];

/// Spare parts: (canonical part name, aliases).
pub const SPARE_PARTS: &[(&str, &[&str])] = &[
    ("oil filter", &["oil filter", "فلتر زيت", "فلتر الزيت"]),
    ("air filter", &["air filter", "فلتر هواء", "فلتر الهواء", "فلتر الهوا"]),
    ("brake pads", &["brake pads", "brake pad", "تيل فرامل", "فحمات"]),
    ("chain", &["chain", "جنزير", "سلسلة"]),
    ("sprocket kit", &["sprocket", "مسننات"]),
    ("spark plug", &["spark plug", "بوجي", "بواجي"]),
    ("battery", &["battery", "بطارية"]),
    ("clutch", &["clutch", "كلتش", "دبرياج"]),
    ("tire", &["tire", "tyre", "كفر", "إطار", "اطار"]),
    ("mirror", &["mirror", "مراية", "مرآة"]),
    ("engine oil", &["engine oil", "زيت محرك", "زيت ماتور"]),
];

/// Accessories: (canonical accessory name, aliases).
pub const ACCESSORIES: &[(&str, &[&str])] = &[
    ("phone holder", &["phone holder", "phone mount", "حامل جوال", "حامل موبايل", "حامل"]),
    ("tank bag", &["tank bag", "شنطة تانك"]),
    ("top box", &["top box", "صندوق"]),
    ("saddle bags", &["saddle bag", "شنطة جانبية", "شنط جانبية"]),
    ("tail bag", &["tail bag", "شنطة"]),
    ("windshield", &["windshield", "زجاج"]),
    ("crash bars", &["crash bar", "crash", "حماية"]),
    ("usb charger", &["usb", "شاحن"]),
    ("bike cover", &["cover", "غطاء"]),
    ("intercom", &["intercom", "bluetooth", "بلوتوث", "انتركم"]),
];

/// Model year: `20` then `0`-`3` then a digit, not glued to other digits.
pub static BIKE_YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[^0-9])(20[0-3][0-9])(?:[^0-9]|$)").unwrap());
