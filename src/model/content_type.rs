use super::elements::ChoiceOption;
use super::ResourceSystem;
use indexmap::IndexMap;
use serde::Serialize;

/// A content type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentType {
    pub system: ResourceSystem,
    pub elements: IndexMap<String, TypeElement>,
}

impl ContentType {
    pub fn codename(&self) -> &str {
        &self.system.codename
    }
}

/// An element definition within a content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeElement {
    pub codename: String,
    pub name: String,
    pub element_type: String,
    /// Choices of a multiple choice element.
    pub options: Vec<ChoiceOption>,
    /// Codename of the taxonomy group a taxonomy element draws from.
    pub taxonomy_group: Option<String>,
}
