use serde::{Deserialize, Serialize};

pub mod repository;
pub mod store;

/// One catalog entry. The collection as a whole is the unit of persistence;
/// `id` is unique within it and records keep insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub image: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub procedure: Option<String>,
}

/// The meal categories the catalog pages are scoped by. Recipe records keep
/// their category as free text; this enum only drives routing and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Desserts,
    Appetizers,
}

impl MealCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Desserts => "desserts",
            Self::Appetizers => "appetizers",
        }
    }

    /// Maps a page identity to its category by exact match on the trailing
    /// path segment. Anything unrecognized means no filter.
    pub fn from_page(page: &str) -> Option<Self> {
        let segment = page.rsplit('/').next().unwrap_or(page);
        match segment {
            "breakfast.html" => Some(Self::Breakfast),
            "lunch.html" => Some(Self::Lunch),
            "dinner.html" => Some(Self::Dinner),
            "desserts.html" => Some(Self::Desserts),
            "appetizers.html" => Some(Self::Appetizers),
            _ => None,
        }
    }
}

/// The collection used when no blob exists on disk yet: five samples, one
/// per category, ids 1 through 5.
pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            title: "Pancakes".to_string(),
            category: "breakfast".to_string(),
            image: "images/pancakes.jpg".to_string(),
            description: "Fluffy and delicious pancakes for your perfect breakfast.".to_string(),
            procedure: Some(
                "Sift flour, baking powder, sugar, and salt together in a large bowl. \
                 Make a well in the center and add milk, melted butter, and egg; mix until \
                 smooth. Heat a lightly oiled griddle or pan over medium-high heat. Pour or \
                 scoop the batter onto the griddle, using approximately 1/4 cup for each \
                 pancake; cook until bubbles form and the edges are dry, about 2 to 3 \
                 minutes. Flip and cook until browned on the other side. Repeat with \
                 remaining batter."
                    .to_string(),
            ),
        },
        Recipe {
            id: 2,
            title: "Caesar Salad".to_string(),
            category: "lunch".to_string(),
            image: "images/salad.jpg".to_string(),
            description: "A fresh Caesar salad with a homemade dressing.".to_string(),
            procedure: Some("Toss lettuce with Caesar dressing and croutons.".to_string()),
        },
        Recipe {
            id: 3,
            title: "Spaghetti Bolognese".to_string(),
            category: "dinner".to_string(),
            image: "images/spaghetti.jpg".to_string(),
            description: "A classic Italian dish with rich, meaty sauce.".to_string(),
            procedure: Some("Cook spaghetti and mix with Bolognese sauce.".to_string()),
        },
        Recipe {
            id: 4,
            title: "Brownies".to_string(),
            category: "desserts".to_string(),
            image: "images/brownies.jpg".to_string(),
            description: "Delicious chocolate brownies with a crispy top.".to_string(),
            procedure: Some("Mix ingredients and bake until firm.".to_string()),
        },
        Recipe {
            id: 5,
            title: "Bruschetta".to_string(),
            category: "appetizers".to_string(),
            image: "images/bruschetta.jpg".to_string(),
            description: "Crispy bread topped with fresh tomatoes and basil.".to_string(),
            procedure: Some("Top toasted bread with a mix of tomatoes and basil.".to_string()),
        },
    ]
}
