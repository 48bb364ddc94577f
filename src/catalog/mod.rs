//! Showcase catalog
//!
//! Built-in product, category, and FAQ data for the storefront, plus the
//! room-style presets offered by the visualizer. Read-only; the site has no
//! persistence layer.

use serde::Serialize;

/// A piece of artwork offered on the site
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub dimensions: &'static str,
    pub materials: &'static str,
    pub price: u32,
    pub image_id: &'static str,
}

/// A product category
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// A frequently asked question
#[derive(Debug, Clone, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Room-style presets offered by the artwork visualizer
pub const ROOM_STYLES: [&str; 4] = [
    "A bright, modern minimalist living room",
    "A cozy, rustic farmhouse-style bedroom",
    "A chic, bohemian-style office with plants",
    "An elegant, Scandinavian-inspired dining room",
];

/// The showcase catalog
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    faqs: Vec<Faq>,
}

impl Catalog {
    /// Create the catalog with the built-in collection
    pub fn new() -> Self {
        Self {
            products: builtin_products(),
            categories: builtin_categories(),
            faqs: builtin_faqs(),
        }
    }

    /// All products, in display order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All categories
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All FAQs
    pub fn faqs(&self) -> &[Faq] {
        &self.faqs
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn builtin_products() -> Vec<Product> {
    vec![
        Product {
            id: "prod-1",
            name: "Ganesh Art",
            description: "An intricate piece featuring a woven texture, reminiscent of ancient textiles. Its warm, earthy tones bring a sense of comfort and history to any space.",
            dimensions: "24\" x 36\"",
            materials: "Natural clay, sand, plant-based binders",
            price: 1500,
            image_id: "mud-art-1",
        },
        Product {
            id: "prod-2",
            name: "Mandala Art",
            description: "Mandala Art is a circular, symmetrical art form with repeating patterns, symbolizing balance, unity, and harmony. It is often used for meditation, relaxation, and creative expression.",
            dimensions: "30\" x 30\"",
            materials: "Local riverbed clay, fine gravel",
            price: 2000,
            image_id: "mud-art-2",
        },
        Product {
            id: "prod-3",
            name: "Fossil Fern",
            description: "Delicate fern imprints are fossilized in this organic piece. It captures a fleeting moment in nature, bringing a touch of the outdoors inside.",
            dimensions: "18\" x 30\"",
            materials: "White clay, natural pigments, preserved botanicals",
            price: 280,
            image_id: "mud-art-3",
        },
        Product {
            id: "prod-4",
            name: "Desert Horizon",
            description: "A minimalist representation of a desert landscape, this piece uses subtle shifts in texture and color to evoke a sense of vast, open space.",
            dimensions: "40\" x 20\"",
            materials: "Red earth clay, sand",
            price: 450,
            image_id: "mud-art-4",
        },
        Product {
            id: "prod-5",
            name: "Clay Moons",
            description: "A celestial-inspired triptych of textured discs. Arrange them to create your own lunar phase, adding a touch of cosmic wonder to your wall.",
            dimensions: "12\" diameter (each)",
            materials: "Mixed clays, mineral powders",
            price: 380,
            image_id: "mud-art-5",
        },
        Product {
            id: "prod-6",
            name: "Earthen Arch",
            description: "This grand, arch-shaped piece makes a statement with its gentle curves and substantial presence. It acts as a window to a world of texture and calm.",
            dimensions: "28\" x 42\"",
            materials: "Structural clay, straw, lime plaster",
            price: 600,
            image_id: "mud-art-6",
        },
        Product {
            id: "prod-7",
            name: "Adobe Sun",
            description: "A circular piece with a rough, sun-baked texture that evokes the feeling of a dry desert landscape. The hole in the center adds a sense of lightness and focus.",
            dimensions: "22\" diameter",
            materials: "Adobe clay, straw",
            price: 320,
            image_id: "mud-art-7",
        },
        Product {
            id: "prod-8",
            name: "River Stone",
            description: "Smooth and polished to the touch, this dark mudstone piece features elegant, natural veins, reminiscent of a stone shaped by flowing water over centuries.",
            dimensions: "16\" x 24\"",
            materials: "Polished mudstone",
            price: 480,
            image_id: "mud-art-8",
        },
        Product {
            id: "prod-9",
            name: "Terracotta Mosaic",
            description: "A vibrant wall installation composed of many small, square terracotta tiles, each with its own unique texture and shade, creating a warm, patterned mosaic.",
            dimensions: "Varies",
            materials: "Terracotta tiles",
            price: 750,
            image_id: "mud-art-9",
        },
        Product {
            id: "prod-10",
            name: "Strata Vase",
            description: "A beautiful decorative vase crafted from layers of different colored clays, showcasing the natural stratification of earth tones. Perfect as a standalone art piece.",
            dimensions: "18\" height",
            materials: "Layered natural clays",
            price: 260,
            image_id: "mud-art-10",
        },
        Product {
            id: "prod-11",
            name: "Cracked Earth",
            description: "A powerful piece that captures the stark beauty of dry, cracked earth. The deep fissures and raw texture make it a compelling and dramatic statement.",
            dimensions: "36\" x 24\"",
            materials: "Heavy earth clay",
            price: 410,
            image_id: "mud-art-11",
        },
        Product {
            id: "prod-12",
            name: "Cob Sphere",
            description: "A rustic, spherical sculpture made from cob, a mixture of clay, sand, and straw. Its simple, organic form and textured surface bring a natural elegance.",
            dimensions: "15\" diameter",
            materials: "Cob (clay, sand, straw)",
            price: 390,
            image_id: "mud-art-12",
        },
    ]
}

fn builtin_categories() -> Vec<Category> {
    vec![
        Category {
            id: "cat-1",
            name: "Mud Work",
            description: "Art pieces designed to be displayed on a wall.",
        },
        Category {
            id: "cat-2",
            name: "Painting",
            description: "Freestanding, three-dimensional art pieces.",
        },
        Category {
            id: "cat-3",
            name: "Mandala Art",
            description: "Functional and decorative vessels.",
        },
        Category {
            id: "cat-4",
            name: "Decorative Tiles",
            description: "Individual tiles for creative installations.",
        },
    ]
}

fn builtin_faqs() -> Vec<Faq> {
    vec![
        Faq {
            question: "How do I care for my mud work art?",
            answer: "Our pieces are durable but should be handled with care. To clean, gently dust with a soft, dry cloth. Avoid using water or cleaning chemicals, as they can damage the natural materials. Keep the artwork in a dry, indoor location away from direct sunlight.",
        },
        Faq {
            question: "Do you take custom orders?",
            answer: "Absolutely! We love bringing your unique vision to life. Please use the contact form to send us an inquiry with your ideas, desired dimensions, and any inspiration you have. We'll get back to you to discuss the project.",
        },
        Faq {
            question: "What is your shipping policy?",
            answer: "We securely package each piece to ensure it arrives safely at your doorstep. Shipping costs and times vary by location. Once your order is placed, we will provide you with a tracking number.",
        },
        Faq {
            question: "Are the materials you use sustainable?",
            answer: "Yes, sustainability is at the core of our philosophy. We source our clays and pigments locally and use natural, plant-based binders. Our process is designed to have a minimal impact on the environment.",
        },
    ]
}
