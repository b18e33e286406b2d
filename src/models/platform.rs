use serde::Serialize;

/// A delivery app the courier works with (Uber Eats, Glovo, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Platform {
    pub id: i64,
    pub name: String,
    pub created_at: String,
}
