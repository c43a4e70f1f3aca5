//! Landing-page category index.
//!
//! The landing page advertises more categories than have their own page;
//! cards without a page are shown but not linked.

use serde::Serialize;

use maskshop_core::{CategoryId, DomainResult, Ksh};

use crate::collections::builtin_category_ids;

/// One card on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCard {
    pub id: CategoryId,
    pub name: String,
    /// Headline price shown on the card.
    pub price: Ksh,
    /// Product codes the category advertises.
    pub items: Vec<String>,
    pub description: String,
    pub image: String,
    pub special: bool,
    pub featured: bool,
    pub has_page: bool,
}

impl CategoryCard {
    /// Route of the category page, if one exists.
    pub fn page_path(&self) -> Option<String> {
        self.has_page.then(|| format!("/{}", self.id))
    }
}

struct CardSeed {
    id: &'static str,
    name: &'static str,
    price: u64,
    code_prefix: &'static str,
    item_count: u32,
    description: &'static str,
    image: &'static str,
    special: bool,
    featured: bool,
}

impl CardSeed {
    const fn new(
        id: &'static str,
        name: &'static str,
        price: u64,
        code_prefix: &'static str,
        item_count: u32,
        description: &'static str,
        image: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            price,
            code_prefix,
            item_count,
            description,
            image,
            special: false,
            featured: false,
        }
    }

    const fn special(mut self) -> Self {
        self.special = true;
        self
    }

    const fn featured(mut self) -> Self {
        self.featured = true;
        self
    }
}

const CARDS: &[CardSeed] = &[
    CardSeed::new(
        "black-lace",
        "Black Lace",
        500,
        "BL",
        10,
        "Elegant black lace masquerade masks for Ladies",
        "/images/black-lace/spider-web.jpg",
    ),
    CardSeed::new(
        "phoenix-men",
        "Phoenix Men",
        500,
        "PM",
        6,
        "Majestic phoenix-inspired masks for men",
        "/images/phoenix-men/golden-crown.jpg",
    ),
    CardSeed::new(
        "phantom-half-face",
        "Phantom Half Face",
        600,
        "PH",
        9,
        "Classic phantom half-face masks",
        "/images/phantom-half-face/black-phantom.jpg",
    ),
    CardSeed::new(
        "men-women",
        "Men/Women",
        500,
        "MW",
        6,
        "Unisex masquerade masks",
        "/images/men-women/black-white-swirl.jpg",
    ),
    CardSeed::new(
        "ancient-masquerade",
        "Ancient Masquerade",
        500,
        "AM",
        12,
        "Vintage-inspired ancient masquerade masks",
        "/images/ancient-masquerade/ornate-silver.jpg",
    ),
    CardSeed::new(
        "colored-lace",
        "Colored Lace Mask",
        600,
        "CL",
        10,
        "Vibrant colored lace masks",
        "/images/colored-lace/golden-ornate-lace.jpg",
    ),
    CardSeed::new(
        "led-masks",
        "LED Masks",
        1200,
        "LED",
        1,
        "Available in Purple, Pink, Blue, Orange, Green, Yellow",
        "/images/led-masks/led-collection.jpg",
    )
    .special(),
    CardSeed::new(
        "skull-mask",
        "Skull Mask",
        500,
        "SK",
        10,
        "Spooky skull-themed masks",
        "/images/skull-mask/golden-skull.jpg",
    ),
    CardSeed::new(
        "lower-face",
        "Lower Face Mask",
        500,
        "LF",
        6,
        "Stylish lower face masks with fangs and jaw designs",
        "/images/lower-face/golden-skull-jaw.jpg",
    ),
    CardSeed::new(
        "basic-masks",
        "Basic Masks",
        500,
        "BM",
        4,
        "Simple colored masks for casual events",
        "/images/basic-masks/red-mask.jpg",
    ),
    CardSeed::new(
        "money-heist",
        "Money Heist",
        500,
        "MH",
        1,
        "Popular money heist Salvador Dali mask",
        "/images/money-heist/salvador-dali-mask.jpg",
    )
    .featured(),
    CardSeed::new(
        "batman",
        "Batman & Batwoman",
        500,
        "BT",
        3,
        "Superhero Batman and Batwoman masks",
        "/images/batman/black-batman-mask.jpg",
    ),
];

/// Cards for the landing page, in display order, skipping empty categories.
pub fn landing_index() -> DomainResult<Vec<CategoryCard>> {
    let pages: Vec<&str> = builtin_category_ids().collect();

    CARDS
        .iter()
        .filter(|seed| seed.item_count > 0)
        .map(|seed| {
            Ok(CategoryCard {
                id: CategoryId::new(seed.id)?,
                name: seed.name.to_string(),
                price: Ksh::new(seed.price),
                items: (1..=seed.item_count)
                    .map(|n| format!("{}-{n:02}", seed.code_prefix))
                    .collect(),
                description: seed.description.to_string(),
                image: seed.image.to_string(),
                special: seed.special,
                featured: seed.featured,
                has_page: pages.contains(&seed.id),
            })
        })
        .collect()
}
