//! HTTP DTOs for the purchase chat endpoint.
//!
//! The request body is read leniently: malformed JSON, unknown slot values
//! and non-string ids are tolerated, only the message itself is required.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::HandleChatMessageResult;
use crate::domain::catalog::RankedItem;
use crate::domain::foundation::UserId;
use crate::domain::intake::{
    BikeType, Category, IntakeError, ItemType, Locale, SlotName, SlotSet, Usage,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Raw chat request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub user_id: Option<Value>,
    #[serde(default, alias = "lang")]
    pub locale: Option<Value>,
    #[serde(default)]
    pub context: Option<Value>,
    #[serde(default)]
    pub bike_info: Option<Value>,
}

impl ChatRequest {
    /// Parses a request body. Anything that is not a JSON object reads as an
    /// empty request.
    pub fn from_slice(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    pub fn locale(&self) -> Locale {
        Locale::from_tag(self.locale.as_ref().and_then(Value::as_str))
    }

    /// The raw message text; validation of its content happens downstream.
    pub fn message(&self) -> Result<&str, IntakeError> {
        match &self.message {
            None | Some(Value::Null) => Err(IntakeError::MissingMessage),
            Some(Value::String(text)) => Ok(text),
            Some(_) => Err(IntakeError::NotAString),
        }
    }

    pub fn user_id(&self) -> UserId {
        let raw = match &self.user_id {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        UserId::or_anonymous(raw.as_deref())
    }

    /// Explicit slots from `context`, or from `bikeInfo` when `context` is absent.
    pub fn context(&self) -> SlotSet {
        self.context
            .as_ref()
            .or(self.bike_info.as_ref())
            .map(context_slots)
            .unwrap_or_default()
    }
}

/// Reads the recognized slots out of a context object. Unknown enum values
/// are dropped; string slots keep blanks so they can clear memory.
fn context_slots(value: &Value) -> SlotSet {
    let enum_field = |key: &str| value.get(key).and_then(Value::as_str);

    SlotSet {
        category: enum_field("category").and_then(Category::parse),
        item_type: enum_field("itemType").and_then(ItemType::parse),
        usage: enum_field("usage").and_then(Usage::parse),
        bike_type: enum_field("bikeType").and_then(BikeType::parse),
        bike_brand: text_field(value, &["bikeBrand", "brand"]),
        bike_model: text_field(value, &["bikeModel", "model"]),
        bike_year: text_field(value, &["bikeYear", "year"]),
        part_name: text_field(value, &["partName"]),
        gear_brand: text_field(value, &["gearBrand"]),
    }
}

fn text_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| value.get(*key))
        .and_then(|v| match v {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Successful chat response. Every slot key is always present, `null` when
/// unresolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub ok: bool,
    pub bot_name: String,
    pub reply: String,
    pub locale: Locale,
    pub user_id: String,
    pub category: Category,
    pub item_type: Option<ItemType>,
    pub usage: Option<Usage>,
    pub bike_type: Option<BikeType>,
    pub bike_brand: Option<String>,
    pub bike_model: Option<String>,
    pub bike_year: Option<String>,
    pub part_name: Option<String>,
    pub gear_brand: Option<String>,
    pub missing_info: Vec<SlotName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<RankedItem>>,
}

impl ChatResponse {
    pub fn new(result: HandleChatMessageResult, bot_name: impl Into<String>) -> Self {
        let turn = result.turn;
        let slots = turn.slots;
        Self {
            ok: true,
            bot_name: bot_name.into(),
            reply: turn.reply,
            locale: turn.locale,
            user_id: result.user_id.to_string(),
            category: slots.category_or_none(),
            item_type: slots.item_type,
            usage: slots.usage,
            bike_type: slots.bike_type,
            bike_brand: slots.bike_brand,
            bike_model: slots.bike_model,
            bike_year: slots.bike_year,
            part_name: slots.part_name,
            gear_brand: slots.gear_brand,
            missing_info: turn.missing_info,
            search_query: turn.search_query,
            search_url: turn.search_url,
            products: turn.products,
        }
    }
}
