#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
}

impl Product {
    /// Case-insensitive exact comparison against the product's category.
    pub fn matches_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}
