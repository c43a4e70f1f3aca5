use serde::{Deserialize, Serialize};

use maskshop_core::{DomainError, DomainResult, Entity, Ksh, ProductId};

/// Display-only metadata some categories attach to their products.
///
/// Nothing in selection, pricing or order composition reads these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayTags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A single mask on a category page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    code: String,
    price: Ksh,
    #[serde(default)]
    image: String,
    #[serde(default)]
    description: String,
    #[serde(flatten)]
    tags: DisplayTags,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, code: impl Into<String>, price: Ksh) -> Self {
        Self {
            id,
            name: name.into(),
            code: code.into(),
            price,
            image: String::new(),
            description: String::new(),
            tags: DisplayTags::default(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.tags.color = Some(color.into());
        self
    }

    pub fn with_category_tag(mut self, category: impl Into<String>) -> Self {
        self.tags.category = Some(category.into());
        self
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn price(&self) -> Ksh {
        self.price
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &DisplayTags {
        &self.tags
    }

    /// Field-level checks; uniqueness is the catalogue's job.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product `{}`: name cannot be empty",
                self.id
            )));
        }
        if self.code.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product `{}`: code cannot be empty",
                self.id
            )));
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_mask() -> Product {
        Product::new(
            ProductId::new("bm-01").unwrap(),
            "Red Party Mask",
            "BM-01",
            Ksh::new(500),
        )
        .with_image("/images/basic-masks/red-mask.jpg")
        .with_description("Simple red party mask for casual events")
        .with_color("Red")
    }

    #[test]
    fn builder_sets_display_fields() {
        let p = red_mask();
        assert_eq!(p.name(), "Red Party Mask");
        assert_eq!(p.code(), "BM-01");
        assert_eq!(p.price(), Ksh::new(500));
        assert_eq!(p.tags().color.as_deref(), Some("Red"));
        assert_eq!(p.tags().category, None);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn blank_name_or_code_is_rejected() {
        let id = ProductId::new("x").unwrap();
        let blank_name = Product::new(id.clone(), "  ", "X-1", Ksh::new(1));
        assert!(matches!(blank_name.validate(), Err(DomainError::Validation(_))));

        let blank_code = Product::new(id, "X", "", Ksh::new(1));
        assert!(matches!(blank_code.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn json_shape_flattens_tags() {
        let json = r#"{
            "id": "bl-01",
            "name": "Spider Web Lace Mask",
            "code": "BL-01",
            "price": 500,
            "category": "Ladies"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id_typed().as_str(), "bl-01");
        assert_eq!(p.tags().category.as_deref(), Some("Ladies"));
        assert_eq!(p.image(), "");
    }

    #[test]
    fn json_rejects_negative_price() {
        let json = r#"{"id": "a", "name": "A", "code": "A-1", "price": -5}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }
}
