pub mod sessions;

use std::sync::Mutex;

use chrono::{NaiveDate, Utc};
use thiserror::Error;

use hearth_types::models::{NewProperty, Property, User};

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("username already taken")]
    UsernameTaken,
}

/// In-memory store for properties and users. Owns both tables and both id
/// counters; constructed once at process start and handed to the handlers
/// through shared state — there is no global instance.
///
/// Single-writer by assumption; the mutex only guards the short synchronous
/// critical sections and is never held across an await point.
pub struct MemStore {
    inner: Mutex<StoreInner>,
}

struct StoreInner {
    properties: Vec<Property>,
    users: Vec<User>,
    next_property_id: i64,
    next_user_id: i64,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                properties: Vec::new(),
                users: Vec::new(),
                next_property_id: 1,
                next_user_id: 1,
            }),
        }
    }

    /// Store pre-populated with the two demo listings (ids 1 and 2).
    pub fn with_demo_listings() -> Self {
        let store = Self::new();
        for listing in demo_listings() {
            store.create_property(listing);
        }
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        // A poisoned lock means a panic mid-insert; nothing to salvage.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    // -- Properties --

    /// All properties in insertion order (ids ascending).
    pub fn all_properties(&self) -> Vec<Property> {
        self.lock().properties.clone()
    }

    /// Lookup by id. A miss is a valid result, not an error.
    pub fn property(&self, id: i64) -> Option<Property> {
        self.lock().properties.iter().find(|p| p.id == id).cloned()
    }

    /// Assigns the next sequential id and the current timestamp, stores, and
    /// returns the stored record. Field validation happens at the API layer.
    pub fn create_property(&self, new: NewProperty) -> Property {
        let mut inner = self.lock();
        let id = inner.next_property_id;
        inner.next_property_id += 1;

        let property = Property {
            id,
            title: new.title,
            description: new.description,
            price: new.price,
            location: new.location,
            image_url: new.image_url,
            bedrooms: new.bedrooms,
            bathrooms: new.bathrooms,
            area: new.area,
            features: new.features,
            open_house_date: new.open_house_date,
            created_at: Utc::now(),
        };
        inner.properties.push(property.clone());
        property
    }

    // -- Users --

    pub fn user(&self, id: i64) -> Option<User> {
        self.lock().users.iter().find(|u| u.id == id).cloned()
    }

    /// Exact, case-sensitive username match.
    pub fn user_by_username(&self, username: &str) -> Option<User> {
        self.lock()
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }

    /// Creates a user with the next sequential id and the fixed "agent"
    /// role. `password` must already be hashed by the caller. Duplicate
    /// usernames are rejected without consuming an id.
    pub fn create_user(&self, username: &str, password: &str) -> Result<User, StoreError> {
        let mut inner = self.lock();
        if inner.users.iter().any(|u| u.username == username) {
            return Err(StoreError::UsernameTaken);
        }

        let id = inner.next_user_id;
        inner.next_user_id += 1;

        let user = User {
            id,
            username: username.to_string(),
            password: password.to_string(),
            role: "agent".to_string(),
        };
        inner.users.push(user.clone());
        Ok(user)
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

fn demo_listings() -> Vec<NewProperty> {
    vec![
        NewProperty {
            title: "Stunning Home in Prime Location".into(),
            description: "Beautiful modern home with premium finishes and amazing views.".into(),
            price: 1_250_000.0,
            location: "Beverly Hills, CA".into(),
            image_url: "https://images.unsplash.com/photo-1564013799919-ab600027ffc6".into(),
            bedrooms: 4,
            bathrooms: 3,
            area: 2800.0,
            features: vec![
                "Pool".into(),
                "Garden".into(),
                "Smart Home".into(),
                "Solar Panels".into(),
            ],
            open_house_date: NaiveDate::from_ymd_opt(2024, 4, 15),
        },
        NewProperty {
            title: "Modern Downtown Loft".into(),
            description: "Spacious loft in the heart of downtown with high ceilings.".into(),
            price: 850_000.0,
            location: "Downtown LA".into(),
            image_url: "https://images.unsplash.com/photo-1554995207-c18c203602cb".into(),
            bedrooms: 2,
            bathrooms: 2,
            area: 1600.0,
            features: vec![
                "High Ceilings".into(),
                "Floor-to-ceiling Windows".into(),
                "Gourmet Kitchen".into(),
            ],
            open_house_date: NaiveDate::from_ymd_opt(2024, 4, 20),
        },
    ]
}
