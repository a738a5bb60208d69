mod content_type;
mod elements;
mod item;
mod responses;
mod taxonomy;

pub use content_type::{ContentType, TypeElement};
pub use elements::*;
pub use item::{ContentItem, ContentItemSystem};
pub use responses::*;
pub use taxonomy::{TaxonomyGroup, TaxonomyTerm};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// System attributes shared by content types and taxonomy groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceSystem {
    pub id: String,
    pub name: String,
    pub codename: String,
    pub last_modified: Option<DateTime<Utc>>,
}
