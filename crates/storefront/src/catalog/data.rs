//! The product range.
//!
//! Six spices, each in 50g/100g/200g pack sizes. The headline price is the
//! 100g pack, which is also the default variant on product pages.

use std::sync::LazyLock;

use prayan_core::{Category, HeatLevel, Price, Product, ProductId, Variant};

static PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Royal Garam Masala".to_string(),
            price: Price::from_rupees(299),
            original_price: Some(Price::from_rupees(399)),
            image: "https://images.unsplash.com/photo-1596040033229-a9821ebd058d?w=500"
                .to_string(),
            category: Category::Blends,
            description: "Our signature blend of 12 premium spices, carefully roasted and \
                          ground to perfection. A royal touch to every dish."
                .to_string(),
            aroma: "Warm, complex, with hints of cardamom and cinnamon".to_string(),
            taste: "Rich, balanced, with subtle heat and sweet undertones".to_string(),
            heat: HeatLevel::Hot,
            usage: usage(&["Biryani", "Curries", "Meat dishes", "Vegetable preparations"]),
            variants: vec![variant("50g", 199), variant("100g", 299), variant("200g", 499)],
            in_stock: true,
            featured: true,
            best_seller: true,
            new_arrival: false,
        },
        Product {
            id: ProductId::new(2),
            name: "Premium Red Chili Powder".to_string(),
            price: Price::from_rupees(249),
            original_price: Some(Price::from_rupees(329)),
            image: "https://images.unsplash.com/photo-1599909533730-8b9e1b7b5b5a?w=500"
                .to_string(),
            category: Category::SingleSpices,
            description: "Hand-picked Kashmiri chilies, sun-dried and stone-ground for \
                          authentic flavor and vibrant color."
                .to_string(),
            aroma: "Smoky, fruity, with mild pungency".to_string(),
            taste: "Mild heat with sweet, fruity notes".to_string(),
            heat: HeatLevel::VeryHot,
            usage: usage(&["Tandoori dishes", "Curries", "Marinades", "Garnishing"]),
            variants: vec![variant("50g", 149), variant("100g", 249), variant("200g", 399)],
            in_stock: true,
            featured: true,
            best_seller: false,
            new_arrival: false,
        },
        Product {
            id: ProductId::new(3),
            name: "Organic Turmeric Powder".to_string(),
            price: Price::from_rupees(199),
            original_price: None,
            image: "https://images.unsplash.com/photo-1615485290382-441e4d049cb5?w=500"
                .to_string(),
            category: Category::SingleSpices,
            description: "Pure organic turmeric from Kerala farms, known for its high \
                          curcumin content and golden color."
                .to_string(),
            aroma: "Earthy, woody, with subtle citrus notes".to_string(),
            taste: "Warm, bitter, with earthy undertones".to_string(),
            heat: HeatLevel::Mild,
            usage: usage(&["Golden milk", "Curries", "Rice dishes", "Health drinks"]),
            variants: vec![variant("50g", 99), variant("100g", 199), variant("200g", 349)],
            in_stock: true,
            featured: false,
            best_seller: true,
            new_arrival: false,
        },
        Product {
            id: ProductId::new(4),
            name: "Biryani Masala Supreme".to_string(),
            price: Price::from_rupees(349),
            original_price: Some(Price::from_rupees(449)),
            image: "https://images.unsplash.com/photo-1567188040759-fb8a883dc6d8?w=500"
                .to_string(),
            category: Category::Blends,
            description: "A luxurious blend crafted specifically for biryani, with saffron \
                          essence and premium whole spices."
                .to_string(),
            aroma: "Floral, with saffron and rose notes".to_string(),
            taste: "Complex, aromatic, with layers of flavor".to_string(),
            heat: HeatLevel::Medium,
            usage: usage(&["Biryani", "Pulao", "Royal rice dishes"]),
            variants: vec![variant("50g", 249), variant("100g", 349), variant("200g", 599)],
            in_stock: true,
            featured: true,
            best_seller: false,
            new_arrival: true,
        },
        Product {
            id: ProductId::new(5),
            name: "Black Pepper Whole".to_string(),
            price: Price::from_rupees(399),
            original_price: None,
            image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=500"
                .to_string(),
            category: Category::SingleSpices,
            description: "Premium Malabar black pepper, known as the \"King of Spices\" - \
                          bold, pungent, and aromatic."
                .to_string(),
            aroma: "Sharp, woody, with citrus undertones".to_string(),
            taste: "Hot, pungent, with complex flavor notes".to_string(),
            heat: HeatLevel::Extreme,
            usage: usage(&[
                "Freshly ground on dishes",
                "Marinades",
                "Soups",
                "Steak seasoning",
            ]),
            variants: vec![variant("50g", 299), variant("100g", 399), variant("200g", 699)],
            in_stock: true,
            featured: false,
            best_seller: true,
            new_arrival: false,
        },
        Product {
            id: ProductId::new(6),
            name: "Chole Masala Deluxe".to_string(),
            price: Price::from_rupees(279),
            original_price: None,
            image: "https://images.unsplash.com/photo-1585937421612-70a008356fbe?w=500"
                .to_string(),
            category: Category::Blends,
            description: "Specially crafted for chickpea dishes, with dried pomegranate \
                          seeds and aromatic spices."
                .to_string(),
            aroma: "Tangy, aromatic, with pomegranate notes".to_string(),
            taste: "Tangy, spicy, with complex layers".to_string(),
            heat: HeatLevel::Hot,
            usage: usage(&["Chole", "Chickpea curry", "Rajma", "Legume dishes"]),
            variants: vec![variant("50g", 179), variant("100g", 279), variant("200g", 449)],
            in_stock: true,
            featured: false,
            best_seller: false,
            new_arrival: true,
        },
    ]
});

fn variant(size: &str, rupees: i64) -> Variant {
    Variant {
        size: size.to_string(),
        price: Price::from_rupees(rupees),
    }
}

fn usage(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// All products, in catalog order.
#[must_use]
pub fn all_products() -> &'static [Product] {
    &PRODUCTS
}

/// Look up a product by ID.
#[must_use]
pub fn product_by_id(id: ProductId) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}
