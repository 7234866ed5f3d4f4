//! Built-in suggestion table and the fixed fallback suggestion

use super::Suggestion;

/// A keyword-addressed suggestion used by the local resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionEntry {
    pub mood_keyword: String,
    pub food: String,
    pub recipe: String,
    pub roast: String,
}

impl SuggestionEntry {
    pub fn new(mood_keyword: &str, food: &str, recipe: &str, roast: &str) -> Self {
        Self {
            mood_keyword: mood_keyword.to_lowercase(),
            food: food.to_string(),
            recipe: recipe.to_string(),
            roast: roast.to_string(),
        }
    }

    /// Build the suggestion shown for this entry
    pub fn to_suggestion(&self, mood: &str) -> Suggestion {
        Suggestion {
            food: self.food.clone(),
            recipe: self.recipe.clone(),
            roast: self.roast.clone(),
            mood: Some(mood.to_string()),
        }
    }
}

/// Ordered, non-empty list of entries. Order is the tie-break: first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionTable {
    entries: Vec<SuggestionEntry>,
}

impl SuggestionTable {
    /// Returns `None` for an empty list since the random fallback needs
    /// at least one entry to pick from.
    pub fn from_entries(entries: Vec<SuggestionEntry>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self { entries })
    }

    /// The six built-in moods
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                SuggestionEntry::new(
                    "sad",
                    "Spicy Thai Green Curry",
                    "Heat coconut milk, add green curry paste, vegetables, and protein. Simmer for 15 minutes with basil leaves. Serve over jasmine rice for a mood-lifting feast!",
                    "Stop drowning in your own tears and start drowning your sorrows in curry instead. At least the curry won't judge your life choices.",
                ),
                SuggestionEntry::new(
                    "angry",
                    "Fluffy Pancakes with Maple Syrup",
                    "Mix flour, milk, eggs, and baking powder. Cook on medium heat until golden. Stack high and drizzle with pure maple syrup. Let sweetness dissolve that rage!",
                    "Channel that anger into flipping pancakes instead of flipping out. At least pancakes won't argue back or steal your parking spot.",
                ),
                SuggestionEntry::new(
                    "stressed",
                    "Homemade Mac and Cheese",
                    "Cook pasta, make cheese sauce with butter, flour, milk, and lots of cheese. Bake with breadcrumb topping until bubbly. Pure comfort in a dish!",
                    "You're stressed about adulting? Here's a kid's meal to remind you that some problems can be solved with cheese. Lots and lots of cheese.",
                ),
                SuggestionEntry::new(
                    "bored",
                    "Fusion Korean-Mexican Tacos",
                    "Marinate bulgogi beef, grill with kimchi, serve in corn tortillas with sriracha mayo and cilantro. Adventure on a plate!",
                    "Bored with life? Here's a cultural mashup that's more interesting than your Netflix queue. At least these tacos have plot twists.",
                ),
                SuggestionEntry::new(
                    "anxious",
                    "Lavender Honey Cookies",
                    "Mix flour, butter, honey, and dried lavender. Roll into balls, bake at 350°F for 12 minutes. Let the aromatherapy work its magic!",
                    "Anxiety got you spiraling? These cookies are basically edible meditation. Namaste calm and eat cookies, my friend.",
                ),
                SuggestionEntry::new(
                    "tired",
                    "Energy-Packed Smoothie Bowl",
                    "Blend banana, berries, spinach, and protein powder. Top with granola, nuts, and fresh fruit. Breakfast of champions who actually need to function today!",
                    "Too tired to adult? Here's liquid motivation in a bowl. It's like coffee but pretending to be healthy. Your future self will thank you.",
                ),
            ],
        }
    }

    pub fn entries(&self) -> &[SuggestionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SuggestionEntry> {
        self.entries.get(index)
    }

    /// First entry whose keyword occurs in the already-lowercased mood
    pub fn first_match(&self, lowered_mood: &str) -> Option<&SuggestionEntry> {
        self.entries
            .iter()
            .find(|entry| lowered_mood.contains(entry.mood_keyword.as_str()))
    }
}

impl Default for SuggestionTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The suggestion substituted when remote resolution fails
pub fn fallback_suggestion(mood: &str) -> Suggestion {
    Suggestion {
        food: "Instant Ramen at 3AM".to_string(),
        recipe: "Boil water (if you even have the energy), dump packet, cry into it for seasoning."
            .to_string(),
        roast: "Lmaooo our AI said \"nah bestie, you're beyond help\" and literally crashed. Even technology is avoiding your energy rn 💀✨".to_string(),
        mood: Some(mood.to_string()),
    }
}
