//! The built-in category pages.
//!
//! Each page carries its own contact number, batch-message label and guide
//! modal default. Prices are whole shillings.

use maskshop_core::{CategoryId, DomainError, DomainResult, Ksh, ProductId};

use crate::catalog::Catalog;
use crate::category::{CategoryConfig, CategoryPage, ContactNumber};
use crate::product::Product;

pub const PRIMARY_CONTACT: &str = "+254719338534";
pub const SECONDARY_CONTACT: &str = "+254746627718";

struct Seed {
    id: &'static str,
    name: &'static str,
    code: &'static str,
    price: u64,
    image: &'static str,
    description: &'static str,
    color: Option<&'static str>,
}

struct PageSeed {
    id: &'static str,
    title: &'static str,
    tagline: &'static str,
    label: &'static str,
    contact: &'static str,
    guide_visible_by_default: bool,
    /// Applied to every product on the page.
    category_tag: Option<&'static str>,
    products: &'static [Seed],
}

const PAGES: &[PageSeed] = &[
    BASIC_MASKS,
    BLACK_LACE,
    COLORED_LACE,
    LOWER_FACE,
    PHANTOM_HALF_FACE,
    SKI_MASK,
];

/// Build every built-in category page, in navigation order.
pub fn builtin_pages() -> DomainResult<Vec<CategoryPage>> {
    PAGES.iter().map(build_page).collect()
}

/// Build one built-in category page by slug.
pub fn builtin_page(id: &str) -> DomainResult<CategoryPage> {
    let seed = PAGES
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| DomainError::not_found(format!("category `{id}`")))?;
    build_page(seed)
}

/// Slugs of the built-in category pages.
pub fn builtin_category_ids() -> impl Iterator<Item = &'static str> {
    PAGES.iter().map(|p| p.id)
}

fn build_page(seed: &PageSeed) -> DomainResult<CategoryPage> {
    let products = seed
        .products
        .iter()
        .map(|s| build_product(s, seed.category_tag))
        .collect::<DomainResult<Vec<_>>>()?;

    let config = CategoryConfig {
        id: CategoryId::new(seed.id)?,
        title: seed.title.to_string(),
        tagline: seed.tagline.to_string(),
        label: seed.label.to_string(),
        contact: ContactNumber::new(seed.contact)?,
        guide_visible_by_default: seed.guide_visible_by_default,
    };

    CategoryPage::new(config, Catalog::new(products)?)
}

fn build_product(seed: &Seed, category_tag: Option<&str>) -> DomainResult<Product> {
    let mut product = Product::new(
        ProductId::new(seed.id)?,
        seed.name,
        seed.code,
        Ksh::new(seed.price),
    )
    .with_image(seed.image)
    .with_description(seed.description);

    if let Some(color) = seed.color {
        product = product.with_color(color);
    }
    if let Some(tag) = category_tag {
        product = product.with_category_tag(tag);
    }
    Ok(product)
}

const BASIC_MASKS_PRODUCTS: &[Seed] = &[
    Seed {
        id: "bm-01",
        name: "Red Party Mask",
        code: "BM-01",
        price: 500,
        image: "/images/basic-masks/red-mask.jpg",
        description: "Simple red party mask for casual events",
        color: Some("Red"),
    },
    Seed {
        id: "bm-02",
        name: "Black Party Mask",
        code: "BM-02",
        price: 500,
        image: "/images/basic-masks/black-mask.jpg",
        description: "Classic black party mask for any occasion",
        color: Some("Black"),
    },
    Seed {
        id: "bm-03",
        name: "White Party Mask",
        code: "BM-03",
        price: 500,
        image: "/images/basic-masks/white-mask.jpg",
        description: "Clean white party mask for elegant events",
        color: Some("White"),
    },
    Seed {
        id: "bm-04",
        name: "Green Party Mask",
        code: "BM-04",
        price: 500,
        image: "/images/basic-masks/green-mask.jpg",
        description: "Vibrant green party mask for fun occasions",
        color: Some("Green"),
    },
];

const BASIC_MASKS: PageSeed = PageSeed {
    id: "basic-masks",
    title: "BASIC MASKS",
    tagline: "Simple Collection",
    label: "Basic",
    contact: PRIMARY_CONTACT,
    guide_visible_by_default: false,
    category_tag: None,
    products: BASIC_MASKS_PRODUCTS,
};

const BLACK_LACE_PRODUCTS: &[Seed] = &[
    Seed {
        id: "bl-01",
        name: "Spider Web Lace Mask",
        code: "BL-01",
        price: 500,
        image: "/images/black-lace/spider-web.jpg",
        description: "Intricate spider web design with ornate lace patterns",
        color: None,
    },
    Seed {
        id: "bl-02",
        name: "Diamond Pattern Lace",
        code: "BL-02",
        price: 500,
        image: "/images/black-lace/diamond-pattern.jpg",
        description: "Elegant diamond geometric patterns with detailed lacework",
        color: None,
    },
    Seed {
        id: "bl-03",
        name: "Crown Classic Lace",
        code: "BL-03",
        price: 500,
        image: "/images/black-lace/crown-classic.jpg",
        description: "Classic design with crown-like top and intricate details",
        color: None,
    },
    Seed {
        id: "bl-04",
        name: "Floral Wide Lace",
        code: "BL-04",
        price: 500,
        image: "/images/black-lace/floral-wide.jpg",
        description: "Wide floral patterns with detailed cutwork design",
        color: None,
    },
    Seed {
        id: "bl-05",
        name: "Asymmetrical Flow Lace",
        code: "BL-05",
        price: 500,
        image: "/images/black-lace/asymmetrical-flow.jpg",
        description: "Flowing asymmetrical design with organic patterns",
        color: None,
    },
    Seed {
        id: "bl-06",
        name: "Cat Geometric Lace",
        code: "BL-06",
        price: 500,
        image: "/images/black-lace/cat-geometric.jpg",
        description: "Cat-inspired design with geometric patterns and pointed details",
        color: None,
    },
    Seed {
        id: "bl-07",
        name: "Ornate Swirl Lace",
        code: "BL-07",
        price: 500,
        image: "/images/black-lace/ladies-01.png",
        description: "Elegant swirling patterns with intricate lace details",
        color: None,
    },
    Seed {
        id: "bl-08",
        name: "Classic Horizontal Lace",
        code: "BL-08",
        price: 500,
        image: "/images/black-lace/ladies-02.png",
        description: "Sophisticated horizontal design with delicate lacework",
        color: None,
    },
    Seed {
        id: "bl-09",
        name: "Heart Wing Lace",
        code: "BL-09",
        price: 500,
        image: "/images/black-lace/ladies-05.png",
        description: "Romantic heart-centered design with wing extensions",
        color: None,
    },
    Seed {
        id: "bl-10",
        name: "Butterfly Lace Mask",
        code: "BL-10",
        price: 500,
        image: "/images/black-lace/ladies-07.png",
        description: "Graceful butterfly-inspired design with wing patterns",
        color: None,
    },
];

const BLACK_LACE: PageSeed = PageSeed {
    id: "black-lace",
    title: "BLACK LACE",
    tagline: "Premium Ladies Collection",
    label: "Black Lace",
    contact: PRIMARY_CONTACT,
    guide_visible_by_default: false,
    category_tag: Some("Ladies"),
    products: BLACK_LACE_PRODUCTS,
};

const COLORED_LACE_PRODUCTS: &[Seed] = &[
    Seed {
        id: "cl-01",
        name: "Black Intricate Lace",
        code: "CL-01",
        price: 600,
        image: "/images/colored-lace/black-intricate.jpg",
        description: "Intricate black lace mask with detailed cutout patterns",
        color: None,
    },
    Seed {
        id: "cl-02",
        name: "Golden Ornate Lace",
        code: "CL-02",
        price: 600,
        image: "/images/colored-lace/golden-ornate-lace.jpg",
        description: "Luxurious golden lace mask with ornate cutout patterns",
        color: None,
    },
    Seed {
        id: "cl-03",
        name: "Golden Cutout Lace",
        code: "CL-03",
        price: 600,
        image: "/images/colored-lace/golden-cutout-lace.jpg",
        description: "Elegant golden mask with intricate cutout designs",
        color: None,
    },
    Seed {
        id: "cl-04",
        name: "Blue Lace Elegance",
        code: "CL-04",
        price: 600,
        image: "/images/colored-lace/blue-lace.jpg",
        description: "Vibrant blue lace mask with detailed ornate patterns",
        color: None,
    },
    Seed {
        id: "cl-05",
        name: "Green Lace Beauty",
        code: "CL-05",
        price: 600,
        image: "/images/colored-lace/green-lace.jpg",
        description: "Emerald green lace mask with intricate cutout design",
        color: None,
    },
    Seed {
        id: "cl-06",
        name: "Rainbow Lace Spectacular",
        code: "CL-06",
        price: 600,
        image: "/images/colored-lace/rainbow-lace.jpg",
        description: "Multi-colored rainbow lace mask with vibrant gradient",
        color: None,
    },
    Seed {
        id: "cl-07",
        name: "White Lace Classic",
        code: "CL-07",
        price: 600,
        image: "/images/colored-lace/white-lace.jpg",
        description: "Pure white lace mask with elegant ornate patterns",
        color: None,
    },
    Seed {
        id: "cl-08",
        name: "Red Lace Passion",
        code: "CL-08",
        price: 600,
        image: "/images/colored-lace/red-lace.jpg",
        description: "Bold red lace mask with intricate cutout design",
        color: None,
    },
    Seed {
        id: "cl-09",
        name: "Purple Lace Royal",
        code: "CL-09",
        price: 600,
        image: "/images/colored-lace/purple-lace.jpg",
        description: "Royal purple lace mask with ornate details",
        color: None,
    },
];

const COLORED_LACE: PageSeed = PageSeed {
    id: "colored-lace",
    title: "COLORED LACE",
    tagline: "Vibrant Collection",
    label: "Colored Lace",
    contact: SECONDARY_CONTACT,
    guide_visible_by_default: false,
    category_tag: None,
    products: COLORED_LACE_PRODUCTS,
};

const LOWER_FACE_PRODUCTS: &[Seed] = &[
    Seed {
        id: "lf-01",
        name: "Black Fang Mask",
        code: "LF-01",
        price: 500,
        image: "/images/lower-face/black-fang-mask.jpg",
        description: "Black lower face mask with sharp fangs and spikes",
        color: None,
    },
    Seed {
        id: "lf-02",
        name: "Golden Skull Jaw",
        code: "LF-02",
        price: 500,
        image: "/images/lower-face/golden-skull-jaw.jpg",
        description: "Golden skull jaw mask with detailed teeth design",
        color: None,
    },
    Seed {
        id: "lf-03",
        name: "White Fang Mask",
        code: "LF-03",
        price: 500,
        image: "/images/lower-face/white-fang-mask.jpg",
        description: "White lower face mask with prominent fangs",
        color: None,
    },
    Seed {
        id: "lf-04",
        name: "Bronze Skull Jaw",
        code: "LF-04",
        price: 500,
        image: "/images/lower-face/bronze-skull-jaw.jpg",
        description: "Bronze skull jaw mask with weathered finish",
        color: None,
    },
];

const LOWER_FACE: PageSeed = PageSeed {
    id: "lower-face",
    title: "LOWER FACE MASKS",
    tagline: "Jaw & Fang Collection",
    label: "Lower Face",
    contact: SECONDARY_CONTACT,
    guide_visible_by_default: false,
    category_tag: None,
    products: LOWER_FACE_PRODUCTS,
};

const PHANTOM_HALF_FACE_PRODUCTS: &[Seed] = &[
    Seed {
        id: "ph-01",
        name: "Classic Black Phantom",
        code: "PH-01",
        price: 600,
        image: "/images/phantom-half-face/black-phantom.jpg",
        description: "Classic phantom of the opera style half-face mask",
        color: None,
    },
    Seed {
        id: "ph-02",
        name: "Simple Black Mask",
        code: "PH-02",
        price: 500,
        image: "/images/phantom-half-face/black-simple.jpg",
        description: "Elegant simple black masquerade mask with small horns",
        color: None,
    },
    Seed {
        id: "ph-03",
        name: "Asymmetrical Black",
        code: "PH-03",
        price: 500,
        image: "/images/phantom-half-face/black-asymmetrical.jpg",
        description: "Unique asymmetrical phantom half-face design",
        color: None,
    },
    Seed {
        id: "ph-04",
        name: "Golden Phantom",
        code: "PH-04",
        price: 600,
        image: "/images/phantom-half-face/gold-phantom.jpg",
        description: "Luxurious golden phantom half-face mask",
        color: None,
    },
    Seed {
        id: "ph-05",
        name: "Red Masquerade",
        code: "PH-05",
        price: 500,
        image: "/images/phantom-half-face/red-mask.jpg",
        description: "Bold red masquerade mask with classic design",
        color: None,
    },
    Seed {
        id: "ph-06",
        name: "Blue Masquerade",
        code: "PH-06",
        price: 500,
        image: "/images/phantom-half-face/blue-mask.jpg",
        description: "Vibrant blue masquerade mask",
        color: None,
    },
    Seed {
        id: "ph-07",
        name: "White Masquerade",
        code: "PH-07",
        price: 500,
        image: "/images/phantom-half-face/white-mask.jpg",
        description: "Pure white masquerade mask for elegant occasions",
        color: None,
    },
    Seed {
        id: "ph-08",
        name: "Gold Simple",
        code: "PH-08",
        price: 500,
        image: "/images/phantom-half-face/gold-simple.jpg",
        description: "Simple golden masquerade mask with classic appeal",
        color: None,
    },
    Seed {
        id: "ph-09",
        name: "Silver Simple",
        code: "PH-09",
        price: 500,
        image: "/images/phantom-half-face/silver-simple.jpg",
        description: "Sophisticated silver masquerade mask",
        color: None,
    },
];

const PHANTOM_HALF_FACE: PageSeed = PageSeed {
    id: "phantom-half-face",
    title: "PHANTOM HALF FACE",
    tagline: "Classic Collection",
    label: "Phantom Half Face",
    contact: SECONDARY_CONTACT,
    guide_visible_by_default: false,
    category_tag: None,
    products: PHANTOM_HALF_FACE_PRODUCTS,
};

const SKI_MASK_PRODUCTS: &[Seed] = &[
    Seed {
        id: "sm-01",
        name: "Black Balaclava",
        code: "SM-01",
        price: 500,
        image: "/images/ski-mask/black-balaclava.jpg",
        description: "Classic black balaclava for tactical or winter use",
        color: None,
    },
    Seed {
        id: "sm-02",
        name: "Skull Bandana",
        code: "SM-02",
        price: 500,
        image: "/images/ski-mask/skull-bandana.jpg",
        description: "Skull pattern bandana face covering",
        color: None,
    },
    Seed {
        id: "sm-03",
        name: "Skull Face Cover",
        code: "SM-03",
        price: 500,
        image: "/images/ski-mask/skull-face-cover.jpg",
        description: "Skull design face covering with tactical style",
        color: None,
    },
    Seed {
        id: "sm-04",
        name: "Skull Balaclava",
        code: "SM-04",
        price: 500,
        image: "/images/ski-mask/skull-balaclava.jpg",
        description: "Balaclava with skull jaw design",
        color: None,
    },
];

const SKI_MASK: PageSeed = PageSeed {
    id: "ski-mask",
    title: "SKI MASKS",
    tagline: "Tactical Collection",
    label: "Ski",
    contact: PRIMARY_CONTACT,
    guide_visible_by_default: true,
    category_tag: None,
    products: SKI_MASK_PRODUCTS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_builtin_pages_validate() {
        let pages = builtin_pages().unwrap();
        assert_eq!(pages.len(), 6);
        let sizes: Vec<_> = pages.iter().map(|p| p.catalog().len()).collect();
        assert_eq!(sizes, [4, 10, 9, 4, 9, 4]);
    }

    #[test]
    fn only_ski_mask_opens_guide_by_default() {
        for page in builtin_pages().unwrap() {
            assert_eq!(
                page.config().guide_visible_by_default,
                page.id().as_str() == "ski-mask",
                "{}",
                page.id()
            );
        }
    }

    #[test]
    fn contacts_follow_the_shop_split() {
        let contact = |id: &str| builtin_page(id).unwrap().config().contact.to_string();
        assert_eq!(contact("basic-masks"), PRIMARY_CONTACT);
        assert_eq!(contact("black-lace"), PRIMARY_CONTACT);
        assert_eq!(contact("ski-mask"), PRIMARY_CONTACT);
        assert_eq!(contact("colored-lace"), SECONDARY_CONTACT);
        assert_eq!(contact("lower-face"), SECONDARY_CONTACT);
        assert_eq!(contact("phantom-half-face"), SECONDARY_CONTACT);
    }

    #[test]
    fn black_lace_products_are_tagged_ladies() {
        let page = builtin_page("black-lace").unwrap();
        assert!(
            page.catalog()
                .iter()
                .all(|p| p.tags().category.as_deref() == Some("Ladies"))
        );
    }

    #[test]
    fn phantom_prices_form_a_band() {
        let page = builtin_page("phantom-half-face").unwrap();
        assert_eq!(page.catalog().price_band().unwrap().to_string(), "KSH 500-600");
    }

    #[test]
    fn unknown_slug_is_not_found() {
        assert!(matches!(
            builtin_page("led-masks"),
            Err(DomainError::NotFound(_))
        ));
    }
}
