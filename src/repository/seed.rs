//! Demo dataset installed on first run: one demo user, three brands and
//! seven products spanning them. Ids are fixed literal strings so the
//! records can reference each other.

use chrono::Utc;

use crate::DEMO_OWNER_ID;
use crate::domain::brand::{Brand, BrandStatus, SocialLinks};
use crate::domain::image::{ImageRef, ImageSource};
use crate::domain::product::{Discount, Product, ProductStatus};
use crate::domain::user::User;

/// The single account accepted by the demo sign-in.
pub fn demo_user() -> User {
    User {
        id: DEMO_OWNER_ID.to_string(),
        email: "demo@example.com".to_string(),
        name: "Demo User".to_string(),
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=32&h=32&fit=crop&crop=faces".to_string(),
    }
}

fn asset(id: &str, path: &str) -> ImageRef {
    ImageRef {
        id: id.to_string(),
        url: path.to_string(),
        source: ImageSource::Local,
        file: None,
    }
}

/// The three demo brands.
pub fn demo_brands() -> Vec<Brand> {
    let now = Utc::now();
    vec![
        Brand {
            id: "1".to_string(),
            name: "EcoGlow Skincare".to_string(),
            description: "Premium organic and sustainable skincare products made with natural ingredients".to_string(),
            logo: "/assets/logos/ecoglow-logo.jpeg".to_string(),
            images: vec![
                asset("1", "/assets/images/ecoglow-1.jpg"),
                asset("2", "/assets/images/ecoglow-2.jpg"),
            ],
            owner_id: DEMO_OWNER_ID.to_string(),
            created_at: now,
            status: BrandStatus::Active,
            website: Some("https://ecoglow.example.com".to_string()),
            social_links: Some(SocialLinks {
                facebook: Some("https://facebook.com/ecoglow".to_string()),
                instagram: Some("https://instagram.com/ecoglow".to_string()),
                twitter: Some("https://twitter.com/ecoglow".to_string()),
                linkedin: None,
            }),
        },
        Brand {
            id: "2".to_string(),
            name: "ArtisanWood".to_string(),
            description: "Handcrafted furniture and home decor made from sustainable materials".to_string(),
            logo: "/assets/logos/artisanwood-logo.jpeg".to_string(),
            images: vec![
                asset("3", "/assets/images/artisanwood-1.jpg"),
                asset("4", "/assets/images/artisanwood-2.jpg"),
            ],
            owner_id: DEMO_OWNER_ID.to_string(),
            created_at: now,
            status: BrandStatus::Active,
            website: Some("https://artisanwood.example.com".to_string()),
            social_links: Some(SocialLinks {
                facebook: Some("https://facebook.com/artisanwood".to_string()),
                instagram: Some("https://instagram.com/artisanwood".to_string()),
                twitter: None,
                linkedin: None,
            }),
        },
        Brand {
            id: "3".to_string(),
            name: "TechVibe".to_string(),
            description: "Cutting-edge electronics and smart home devices".to_string(),
            logo: "/assets/logos/techvibe-logo.jpeg".to_string(),
            images: vec![
                asset("5", "/assets/images/techvibe-1.jpg"),
                asset("6", "/assets/images/techvibe-2.jpg"),
            ],
            owner_id: DEMO_OWNER_ID.to_string(),
            created_at: now,
            status: BrandStatus::Active,
            website: Some("https://techvibe.example.com".to_string()),
            social_links: Some(SocialLinks {
                facebook: None,
                instagram: Some("https://instagram.com/techvibe".to_string()),
                twitter: Some("https://twitter.com/techvibe".to_string()),
                linkedin: None,
            }),
        },
    ]
}

struct DemoProduct {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    price: f64,
    images: [(&'static str, &'static str); 2],
    brand_id: &'static str,
    stock: u32,
    discount: Option<f64>,
}

const DEMO_PRODUCTS: [DemoProduct; 7] = [
    DemoProduct {
        id: "1",
        name: "Radiance Serum",
        description: "Brightening vitamin C serum for glowing skin",
        category: "Skincare",
        price: 49.99,
        images: [
            ("1", "/assets/products/ecoglow/radiance-serum-1.jpg"),
            ("2", "/assets/products/ecoglow/radiance-serum-2.jpg"),
        ],
        brand_id: "1",
        stock: 100,
        discount: Some(10.0),
    },
    DemoProduct {
        id: "2",
        name: "Hydrating Moisturizer",
        description: "Deep hydration for all skin types",
        category: "Skincare",
        price: 39.99,
        images: [
            ("3", "/assets/products/ecoglow/hydrating-moisturizer-1.jpg"),
            ("4", "/assets/products/ecoglow/hydrating-moisturizer-2.jpg"),
        ],
        brand_id: "1",
        stock: 150,
        discount: None,
    },
    DemoProduct {
        id: "3",
        name: "Wooden Coffee Table",
        description: "Handcrafted coffee table made from reclaimed wood",
        category: "Furniture",
        price: 299.99,
        images: [
            ("5", "/assets/products/artisanwood/coffee-table-1.jpg"),
            ("6", "/assets/products/artisanwood/coffee-table-2.jpg"),
        ],
        brand_id: "2",
        stock: 10,
        discount: None,
    },
    DemoProduct {
        id: "4",
        name: "Dining Chair Set",
        description: "Set of 4 handmade dining chairs",
        category: "Furniture",
        price: 599.99,
        images: [
            ("7", "/assets/products/artisanwood/dining-chair-set-1.jpg"),
            ("8", "/assets/products/artisanwood/dining-chair-set-2.jpg"),
        ],
        brand_id: "2",
        stock: 5,
        discount: Some(15.0),
    },
    DemoProduct {
        id: "5",
        name: "Smart Speaker",
        description: "Voice-controlled smart speaker with premium sound",
        category: "Electronics",
        price: 199.99,
        images: [
            ("9", "/assets/products/techvibe/smart-speaker-1.jpg"),
            ("10", "/assets/products/techvibe/smart-speaker-2.jpg"),
        ],
        brand_id: "3",
        stock: 75,
        discount: None,
    },
    DemoProduct {
        id: "6",
        name: "Wireless Earbuds",
        description: "Premium wireless earbuds with noise cancellation",
        category: "Electronics",
        price: 149.99,
        images: [
            ("11", "/assets/products/techvibe/wireless-earbuds-1.jpg"),
            ("12", "/assets/products/techvibe/wireless-earbuds-2.jpg"),
        ],
        brand_id: "3",
        stock: 100,
        discount: Some(20.0),
    },
    DemoProduct {
        id: "7",
        name: "Gaming Console",
        description: "Premium gaming console with disk.",
        category: "Electronics",
        price: 359.99,
        images: [
            ("13", "/assets/products/techvibe/gaming-console-1.jpg"),
            ("14", "/assets/products/techvibe/gaming-console-2.jpg"),
        ],
        brand_id: "3",
        stock: 118,
        discount: Some(25.0),
    },
];

/// The seven demo products spanning the three demo brands.
pub fn demo_products() -> Vec<Product> {
    let now = Utc::now();
    DEMO_PRODUCTS
        .iter()
        .map(|p| Product {
            id: p.id.to_string(),
            name: p.name.to_string(),
            description: p.description.to_string(),
            category: p.category.to_string(),
            price: p.price,
            image: String::new(),
            images: p.images.iter().map(|(id, url)| asset(id, url)).collect(),
            brand_id: p.brand_id.to_string(),
            owner_id: DEMO_OWNER_ID.to_string(),
            stock: p.stock,
            created_at: now,
            status: ProductStatus::Published,
            scheduled_date: None,
            discount: p.discount.map(|amount| Discount {
                enabled: true,
                amount,
            }),
        })
        .collect()
}
