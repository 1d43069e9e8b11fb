//! Catering menus: ingredient sets, drink labels and diet categories

use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

// ============================================================================
// Ingredient tables
// ============================================================================

pub const ALCOHOLS: &[&str] = &[
    "absinthe", "amaretto", "aperol", "bourbon", "brandy", "campari", "champagne",
    "cognac", "dark rum", "dry vermouth", "gin", "light rum", "mezcal", "prosecco",
    "rum", "rye whiskey", "scotch", "sweet vermouth", "tequila", "triple sec",
    "vodka", "whiskey", "white rum", "white wine", "red wine",
];

pub const SPECIAL_INGREDIENTS: &[&str] = &[
    "almond flour", "almonds", "anchovies", "bacon", "butter", "cashews",
    "cheddar cheese", "cream", "cream cheese", "eggs", "feta", "fish sauce",
    "flour", "ghee", "heavy cream", "honey", "milk", "mozzarella", "paneer",
    "parmesan", "peanuts", "pork belly", "ricotta", "salmon", "sesame oil",
    "shrimp", "soy sauce", "tahini", "tofu", "walnuts", "yogurt",
];

pub const VEGAN: &[&str] = &[
    "almonds", "avocado", "basil", "black beans", "black pepper", "brown rice",
    "carrots", "cashews", "chickpeas", "cilantro", "coconut milk", "coriander",
    "corn", "cumin", "curry paste", "eggplant", "flour", "garlic", "ginger",
    "lemon juice", "lentils", "lime juice", "maple syrup", "mushrooms",
    "nutritional yeast", "oat milk", "olive oil", "onion", "peanuts",
    "red bell pepper", "rice vinegar", "salt", "scallions", "sesame oil",
    "smoked paprika", "soy sauce", "spinach", "sugar", "tahini", "tofu",
    "tomatoes", "vegetable stock", "walnuts", "water", "zucchini",
];

pub const VEGETARIAN: &[&str] = &[
    "basil", "black pepper", "butter", "cheddar cheese", "cream", "cumin",
    "eggs", "feta", "flour", "garlic", "ghee", "honey", "lemon juice", "milk",
    "mozzarella", "mushrooms", "olive oil", "onion", "paneer", "parmesan",
    "ricotta", "salt", "spinach", "sugar", "tomatoes", "vegetable stock",
    "water", "yogurt",
];

pub const PALEO: &[&str] = &[
    "almond flour", "apples", "avocado", "bacon", "black pepper", "broccoli",
    "cauliflower", "chicken breast", "cinnamon", "coconut oil", "eggs", "garlic",
    "ghee", "ground beef", "honey", "kale", "lemon juice", "mushrooms",
    "olive oil", "onion", "salmon", "salt", "shrimp", "spinach",
    "sweet potato", "walnuts",
];

pub const KETO: &[&str] = &[
    "almond flour", "avocado", "bacon", "black pepper", "broccoli", "butter",
    "cauliflower", "cheddar cheese", "chicken thighs", "coconut oil",
    "cream cheese", "eggs", "garlic", "ground beef", "heavy cream", "mozzarella",
    "mushrooms", "olive oil", "parmesan", "pork belly", "salmon", "salt",
    "shrimp", "spinach", "zucchini",
];

pub const OMNIVORE: &[&str] = &[
    "anchovies", "bacon", "bay leaves", "beef stock", "black pepper",
    "bread crumbs", "butter", "carrots", "chicken breast", "chicken stock",
    "cream", "eggs", "fish sauce", "flour", "garlic", "ginger", "ground beef",
    "honey", "lemon juice", "milk", "mushrooms", "olive oil", "onion",
    "paprika", "parmesan", "pasta", "pork belly", "potatoes", "rice",
    "rosemary", "salmon", "salt", "shrimp", "soy sauce", "spinach", "sugar",
    "thyme", "tomatoes", "vegetable oil", "water",
];

// ============================================================================
// Categories
// ============================================================================

/// Diet category, checked in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Vegan,
    Vegetarian,
    Paleo,
    Keto,
    Omnivore,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Vegan,
        Category::Vegetarian,
        Category::Paleo,
        Category::Keto,
        Category::Omnivore,
    ];

    pub fn ingredients(self) -> &'static [&'static str] {
        match self {
            Self::Vegan => VEGAN,
            Self::Vegetarian => VEGETARIAN,
            Self::Paleo => PALEO,
            Self::Keto => KETO,
            Self::Omnivore => OMNIVORE,
        }
    }

    /// Whether every ingredient is allowed in this category
    pub fn allows<S: AsRef<str>>(self, ingredients: &BTreeSet<S>) -> bool {
        let table = self.ingredients();
        ingredients.iter().all(|item| table.contains(&item.as_ref()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Vegan => "VEGAN",
            Self::Vegetarian => "VEGETARIAN",
            Self::Paleo => "PALEO",
            Self::Keto => "KETO",
            Self::Omnivore => "OMNIVORE",
        })
    }
}

/// Catering errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaterError {
    #[error("dish {0:?} does not fit in any category")]
    Uncategorized(String),
}

// ============================================================================
// Operations
// ============================================================================

/// Dish name with its de-duplicated ingredients
pub fn clean_ingredients(dish_name: &str, ingredients: &[&str]) -> (String, BTreeSet<String>) {
    (
        dish_name.to_string(),
        ingredients.iter().map(|item| item.to_string()).collect(),
    )
}

/// `"<name> Cocktail"` when any ingredient is alcoholic, else `"<name> Mocktail"`
pub fn check_drinks(drink_name: &str, ingredients: &[&str]) -> String {
    let kind = if ingredients.iter().any(|item| ALCOHOLS.contains(item)) {
        "Cocktail"
    } else {
        "Mocktail"
    };
    format!("{drink_name} {kind}")
}

/// First category allowing every ingredient
pub fn dish_category(ingredients: &[&str]) -> Option<Category> {
    let (_, cleaned) = clean_ingredients("", ingredients);
    Category::ALL
        .into_iter()
        .find(|category| category.allows(&cleaned))
}

/// `"<dish>: <CATEGORY>"` for the first category that fits
pub fn categorize_dish(dish_name: &str, ingredients: &[&str]) -> Result<String, CaterError> {
    let category =
        dish_category(ingredients).ok_or_else(|| CaterError::Uncategorized(dish_name.to_string()))?;
    Ok(format!("{dish_name}: {category}"))
}

/// Dish name with the ingredients that need a special note
pub fn tag_special_ingredients(
    dish_name: &str,
    ingredients: &[&str],
) -> (String, BTreeSet<String>) {
    let (name, cleaned) = clean_ingredients(dish_name, ingredients);
    let special = cleaned
        .into_iter()
        .filter(|item| SPECIAL_INGREDIENTS.contains(&item.as_str()))
        .collect();
    (name, special)
}

/// Union of all dish ingredients
pub fn compile_ingredients(dishes: &[BTreeSet<String>]) -> BTreeSet<String> {
    dishes.iter().flatten().cloned().collect()
}

/// Dish names that are not appetizers, de-duplicated and sorted
pub fn separate_appetizers(dishes: &[&str], appetizers: &[&str]) -> Vec<String> {
    let appetizers: BTreeSet<&str> = appetizers.iter().copied().collect();
    dishes
        .iter()
        .copied()
        .filter(|dish| !appetizers.contains(dish))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Ingredients of each dish outside the shared `intersection`, combined
pub fn singleton_ingredients(
    dishes: &[BTreeSet<String>],
    intersection: &BTreeSet<String>,
) -> BTreeSet<String> {
    dishes
        .iter()
        .flat_map(|dish| dish.difference(intersection))
        .cloned()
        .collect()
}
