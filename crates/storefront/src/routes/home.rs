//! Home page route handler.
//!
//! Everything on the home page except the featured product grid is static
//! brand content, kept here as plain data so the template stays declarative.

use askama::Template;
use askama_web::WebTemplate;
use tracing::instrument;

use crate::catalog;
use crate::filters;
use crate::middleware::CspNonce;

use super::products::ProductCardView;

// =============================================================================
// Static Brand Content
// =============================================================================

/// Hero banner copy.
#[derive(Clone)]
pub struct HeroView {
    pub badge: String,
    pub tagline: String,
    pub description: String,
}

impl Default for HeroView {
    fn default() -> Self {
        Self {
            badge: "Premium Quality Since 1985".to_string(),
            tagline: "Pure Taste. Royal Tradition.".to_string(),
            description: "Experience the finest quality spices, handpicked from the best \
                          farms and crafted with generations of expertise."
                .to_string(),
        }
    }
}

/// One of the brand promise cards.
#[derive(Clone)]
pub struct PremiumPoint {
    pub title: String,
    pub description: String,
}

/// A quality certification card.
#[derive(Clone)]
pub struct CertificationView {
    pub title: String,
    pub description: String,
}

/// A customer review for the carousel.
#[derive(Clone)]
pub struct ReviewView {
    pub name: String,
    pub location: String,
    pub rating: u8,
    pub text: String,
}

/// An Instagram post for the social feed grid.
#[derive(Clone)]
pub struct SocialPostView {
    pub image: String,
    pub caption: String,
    pub likes: String,
    pub comments: u32,
}

fn get_premium_points() -> Vec<PremiumPoint> {
    let points = [
        (
            "Pure & Natural",
            "Handpicked from the finest farms, our spices are 100% pure with no artificial \
             additives or preservatives.",
        ),
        (
            "Premium Quality",
            "Each batch undergoes rigorous quality testing to ensure consistent flavor, \
             aroma, and freshness.",
        ),
        (
            "FSSAI Certified",
            "All our products are certified by FSSAI and follow strict hygiene and safety \
             standards.",
        ),
        (
            "Traditional Methods",
            "Crafted using time-honored techniques passed down through generations for \
             authentic taste.",
        ),
    ];
    points
        .into_iter()
        .map(|(title, description)| PremiumPoint {
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}

fn get_certifications() -> Vec<CertificationView> {
    let certifications = [
        (
            "FSSAI Certified",
            "Food Safety and Standards Authority of India approved",
        ),
        (
            "100% Pure",
            "No artificial colors, preservatives, or adulterants",
        ),
        ("Organic Certified", "Certified organic by accredited agencies"),
        ("ISO Certified", "International quality management standards"),
    ];
    certifications
        .into_iter()
        .map(|(title, description)| CertificationView {
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// Static reviews for the homepage carousel.
fn get_featured_reviews() -> Vec<ReviewView> {
    vec![
        ReviewView {
            name: "Priya Sharma".to_string(),
            location: "Mumbai".to_string(),
            rating: 5,
            text: "PRAYAN Masale has completely transformed my cooking! The Royal Garam \
                   Masala is absolutely divine - the aroma fills the entire kitchen. My \
                   family can taste the difference in every dish."
                .to_string(),
        },
        ReviewView {
            name: "Chef Rajesh Kumar".to_string(),
            location: "Delhi".to_string(),
            rating: 5,
            text: "As a professional chef, I can confidently say PRAYAN spices are \
                   exceptional. The purity and freshness are unmatched. My restaurant \
                   customers always compliment the authentic flavors."
                .to_string(),
        },
        ReviewView {
            name: "Meera Patel".to_string(),
            location: "Ahmedabad".to_string(),
            rating: 5,
            text: "I have been using PRAYAN Masale for 2 years now. The quality is \
                   consistent, packaging is excellent, and the taste is just like my \
                   grandmother used to make. Highly recommended!"
                .to_string(),
        },
        ReviewView {
            name: "Arjun Singh".to_string(),
            location: "Bangalore".to_string(),
            rating: 5,
            text: "The Biryani Masala Supreme is a game-changer! My weekend biryanis have \
                   become legendary among friends. The blend of spices is perfect - not \
                   too strong, not too mild."
                .to_string(),
        },
        ReviewView {
            name: "Sunita Reddy".to_string(),
            location: "Hyderabad".to_string(),
            rating: 5,
            text: "Pure quality! No artificial colors or preservatives. I can see and \
                   taste the difference. My children love the food I make with PRAYAN \
                   spices. Worth every rupee!"
                .to_string(),
        },
    ]
}

fn get_social_posts() -> Vec<SocialPostView> {
    let posts = [
        (
            "https://images.unsplash.com/photo-1596040033229-a9821ebd058d?w=400&h=400&fit=crop",
            "Royal Garam Masala making every dish special ✨ #PRAYANMasale #PureTaste",
            "1,247",
            89,
        ),
        (
            "https://images.unsplash.com/photo-1567188040759-fb8a883dc6d8?w=400&h=400&fit=crop",
            "Biryani Sunday with our premium Biryani Masala Supreme 🍛 #BiryaniLove",
            "2,156",
            134,
        ),
        (
            "https://images.unsplash.com/photo-1599909533730-8b9e1b7b5b5a?w=400&h=400&fit=crop",
            "The perfect red chili powder for authentic Indian flavors 🌶️ #SpiceLove",
            "987",
            67,
        ),
        (
            "https://images.unsplash.com/photo-1615485290382-441e4d049cb5?w=400&h=400&fit=crop",
            "Golden turmeric from Kerala farms 💛 #OrganicSpices #HealthyLiving",
            "1,543",
            92,
        ),
        (
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=400&fit=crop",
            "Black pepper - the king of spices! 👑 #KingOfSpices #PremiumQuality",
            "876",
            45,
        ),
        (
            "https://images.unsplash.com/photo-1585937421612-70a008356fbe?w=400&h=400&fit=crop",
            "Chole Masala Deluxe for the perfect chickpea curry 🥘 #CholeMasala",
            "1,234",
            78,
        ),
    ];
    posts
        .into_iter()
        .map(|(image, caption, likes, comments)| SocialPostView {
            image: image.to_string(),
            caption: caption.to_string(),
            likes: likes.to_string(),
            comments,
        })
        .collect()
}

// =============================================================================
// Template and Handler
// =============================================================================

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub hero: HeroView,
    pub premium_points: Vec<PremiumPoint>,
    pub featured: Vec<ProductCardView>,
    pub certifications: Vec<CertificationView>,
    pub reviews: Vec<ReviewView>,
    pub social_posts: Vec<SocialPostView>,
    /// CSP nonce for the inline review carousel script.
    pub nonce: String,
}

/// Display the home page.
#[instrument(skip(nonce))]
pub async fn home(CspNonce(nonce): CspNonce) -> HomeTemplate {
    HomeTemplate {
        hero: HeroView::default(),
        premium_points: get_premium_points(),
        featured: catalog::featured_products()
            .into_iter()
            .map(ProductCardView::from)
            .collect(),
        certifications: get_certifications(),
        reviews: get_featured_reviews(),
        social_posts: get_social_posts(),
        nonce,
    }
}
