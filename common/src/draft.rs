use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::category::CategoryId;
use crate::error::FormValidationError;
use crate::product::NewProduct;

/// A product being typed into the creation form.
///
/// Every field holds exactly what the user typed; numbers are only parsed
/// when the draft is turned into a [`NewProduct`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub price: String,
    pub category_id: String,
    pub description: String,
    pub image_url: String,
}

/// Addressable fields of a [`ProductDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Price,
    CategoryId,
    Description,
    ImageUrl,
}

impl DraftField {
    pub const ALL: [DraftField; 5] = [
        DraftField::Title,
        DraftField::Price,
        DraftField::CategoryId,
        DraftField::Description,
        DraftField::ImageUrl,
    ];

    /// Form input name.
    pub fn name(self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Price => "price",
            DraftField::CategoryId => "categoryId",
            DraftField::Description => "description",
            DraftField::ImageUrl => "image",
        }
    }
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| format!("unknown form field: {s}"))
    }
}

impl ProductDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Price => &self.price,
            DraftField::CategoryId => &self.category_id,
            DraftField::Description => &self.description,
            DraftField::ImageUrl => &self.image_url,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Title => &mut self.title,
            DraftField::Price => &mut self.price,
            DraftField::CategoryId => &mut self.category_id,
            DraftField::Description => &mut self.description,
            DraftField::ImageUrl => &mut self.image_url,
        };
        *slot = value;
    }

    /// Check the draft, reporting only the first broken rule.
    ///
    /// Rules run in a fixed order: title, price, category, description,
    /// image URL. The category rule asks for a value that parses as an id;
    /// a present but non-numeric value fails it as `CategoryNotAnId`. Which
    /// ids are offered is up to the form that presents them.
    pub fn validate(&self) -> Result<(), FormValidationError> {
        self.to_payload().map(|_| ())
    }

    /// Coerce into the service payload: trimmed text, parsed numbers, and
    /// the image URL as a one-element list.
    pub fn to_payload(&self) -> Result<NewProduct, FormValidationError> {
        let title = non_empty(&self.title).ok_or(FormValidationError::Title)?;
        let price = parse_price(&self.price).ok_or(FormValidationError::Price)?;
        let category_id = non_empty(&self.category_id)
            .ok_or(FormValidationError::Category)?
            .parse::<CategoryId>()
            .map_err(|_| FormValidationError::CategoryNotAnId)?;
        let description = non_empty(&self.description).ok_or(FormValidationError::Description)?;
        let image_url = non_empty(&self.image_url).ok_or(FormValidationError::ImageUrl)?;

        Ok(NewProduct {
            title: title.to_string(),
            price,
            description: description.to_string(),
            category_id,
            images: vec![image_url.to_string()],
        })
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn parse_price(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0)
}
