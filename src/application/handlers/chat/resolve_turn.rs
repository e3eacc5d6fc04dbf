//! TurnResolver - classify, merge, gate and compose one message.

use std::sync::Arc;

use crate::domain::catalog::{CatalogFilter, RankedItem};
use crate::domain::intake::{
    merge, missing, validate_message, Category, IntakeError, KeywordClassifier, Locale,
    ResolvedTurn, ResponseComposer, SearchLink, SlotName, SlotSet,
};
use crate::ports::{ProductCatalog, SearchLinkBuilder, SearchRequest};

/// The resolve operation. Holds no per-user state; memory is passed in.
pub struct TurnResolver {
    classifier: KeywordClassifier,
    composer: ResponseComposer,
    catalog: Arc<dyn ProductCatalog>,
    links: Arc<dyn SearchLinkBuilder>,
}

impl TurnResolver {
    pub fn new(catalog: Arc<dyn ProductCatalog>, links: Arc<dyn SearchLinkBuilder>) -> Self {
        Self {
            classifier: KeywordClassifier::new(),
            composer: ResponseComposer::new(),
            catalog,
            links,
        }
    }

    /// Resolves one message against explicit context and remembered slots.
    ///
    /// Collaborator failures never fail the turn: a missing link or product
    /// list is logged and the reply is composed without it.
    pub async fn resolve(
        &self,
        message: &str,
        locale: Locale,
        explicit: &SlotSet,
        memory: &SlotSet,
    ) -> Result<ResolvedTurn, IntakeError> {
        let message = validate_message(message)?;

        // A follow-up without category words stays in the remembered category.
        let context = SlotSet {
            category: explicit.category.or(memory.category),
            usage: explicit.usage.or(memory.usage),
            ..explicit.clone()
        };
        let fresh = self.classifier.classify(message, &context);
        let slots = merge(memory, explicit, &fresh);
        let category = slots.category_or_none();
        let missing_info = missing(category, &slots);

        if !missing_info.is_empty() {
            let reply = self
                .composer
                .compose_incomplete(locale, category, &slots, &missing_info);
            return Ok(ResolvedTurn {
                locale,
                slots,
                missing_info,
                reply,
                search_query: None,
                search_url: None,
                products: None,
            });
        }

        let link = self.search_link(category, &slots, locale).await;
        let products = match category {
            Category::Safety => self.products(&slots).await,
            _ => Vec::new(),
        };

        let reply = self
            .composer
            .compose_complete(locale, category, &slots, link.as_ref(), &products);

        let (search_query, search_url) = match link {
            Some(SearchLink { query, url }) => (Some(query), Some(url)),
            None => (None, None),
        };

        Ok(ResolvedTurn {
            locale,
            slots,
            missing_info,
            reply,
            search_query,
            search_url,
            products: (!products.is_empty()).then_some(products),
        })
    }

    async fn search_link(
        &self,
        category: Category,
        slots: &SlotSet,
        locale: Locale,
    ) -> Option<SearchLink> {
        let request = SearchRequest {
            category,
            item_type: slots.item_type_for(category),
            usage: slots.usage,
            bike_type: slots.bike_type,
            brand: slots.text(SlotName::BikeBrand).map(str::to_string),
            model: slots.text(SlotName::BikeModel).map(str::to_string),
            year: slots.text(SlotName::BikeYear).map(str::to_string),
            part_name: slots.text(SlotName::PartName).map(str::to_string),
            gear_brand: slots.gear_brand_text().map(str::to_string),
            locale,
        };

        match self.links.build_search_link(&request).await {
            Ok(link) => Some(link),
            Err(e) => {
                tracing::warn!(category = %category, "Search link unavailable: {}", e);
                None
            }
        }
    }

    async fn products(&self, slots: &SlotSet) -> Vec<RankedItem> {
        let filter = CatalogFilter::new(Category::Safety)
            .with_item_type(slots.item_type_for(Category::Safety))
            .with_usage(slots.usage)
            .with_bike_type(slots.bike_type);

        match self.catalog.pick_top3(&filter).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Catalog unavailable: {}", e);
                Vec::new()
            }
        }
    }
}
