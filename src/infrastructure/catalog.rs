use chrono::{DateTime, Utc};

use crate::domain::ports::CatalogRepository;
use crate::domain::product::Product;
use crate::domain::user::{Role, User};

/// Hardcoded users and products standing in for a datastore.
///
/// Every user's `last_login` is the moment the catalog was built, so the
/// values stay stable for the lifetime of the process.
pub struct InMemoryCatalog {
    users: Vec<User>,
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(started_at: DateTime<Utc>) -> Self {
        Self {
            users: sample_users(started_at),
            products: sample_products(),
        }
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn users(&self) -> Vec<User> {
        self.users.clone()
    }

    fn products(&self) -> Vec<Product> {
        self.products.clone()
    }
}

fn sample_users(last_login: DateTime<Utc>) -> Vec<User> {
    [
        (1, "John Doe", "john@example.com", Role::Admin),
        (2, "Jane Smith", "jane@example.com", Role::User),
        (3, "Bob Johnson", "bob@example.com", Role::User),
    ]
    .into_iter()
    .map(|(id, name, email, role)| User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        last_login,
    })
    .collect()
}

fn sample_products() -> Vec<Product> {
    [
        (1, "Laptop Pro", 1299.99, "Electronics", 45),
        (2, "Wireless Headphones", 199.99, "Electronics", 120),
        (3, "Coffee Maker", 89.99, "Appliances", 30),
    ]
    .into_iter()
    .map(|(id, name, price, category, stock)| Product {
        id,
        name: name.to_string(),
        price,
        category: category.to_string(),
        stock,
    })
    .collect()
}
