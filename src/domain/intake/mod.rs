//! Slot-filling intake for purchase requests.
//!
//! # Module Organization
//!
//! - `slots` - Slot value types and the optional-field [`SlotSet`]
//! - `vocabulary` - Fixed keyword lists
//! - `classifier` - Message to slots
//! - `merger` - Fresh / explicit / memory precedence
//! - `gate` - Required slots per category
//! - `templates` and `locale` - Localized text table
//! - `composer` - Reply text for both branches
//! - `turn` - The resolved output of one message

mod classifier;
mod composer;
mod errors;
mod gate;
mod locale;
mod merger;
mod slots;
mod templates;
mod turn;
mod vocabulary;

pub use classifier::KeywordClassifier;
pub use composer::ResponseComposer;
pub use errors::{validate_message, IntakeError};
pub use gate::{missing, required_slots};
pub use locale::Locale;
pub use merger::merge;
pub use slots::{
    BikeType, Category, GearIntent, HelmetStyle, ItemType, SlotName, SlotSet, Usage,
};
pub use templates::text as template_text;
pub use turn::{ResolvedTurn, SearchLink};
