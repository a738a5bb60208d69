// src/query/filters.rs
//! Content filters. The comparison operator travels in the parameter name,
//! e.g. `elements.price[gte]=10`.

use super::parameters::{encode_value, encode_values, validate_name};
use crate::types::{Codename, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    Equals,
    All,
    Any,
    Contains,
    In,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Range,
}

impl FilterOperator {
    /// Operator suffix inside the brackets; equality has none.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            Self::Equals => None,
            Self::All => Some("all"),
            Self::Any => Some("any"),
            Self::Contains => Some("contains"),
            Self::In => Some("in"),
            Self::GreaterThan => Some("gt"),
            Self::GreaterThanOrEqual => Some("gte"),
            Self::LessThan => Some("lt"),
            Self::LessThanOrEqual => Some("lte"),
            Self::Range => Some("range"),
        }
    }
}

/// A single filter condition on a system attribute or element,
/// such as `system.type` or `elements.category`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    field: String,
    operator: FilterOperator,
    values: Vec<String>,
}

impl Filter {
    pub fn equals(field: &str, value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::single(field, FilterOperator::Equals, value.into())
    }

    pub fn all<I, S>(field: &str, values: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::multiple(field, FilterOperator::All, values)
    }

    pub fn any<I, S>(field: &str, values: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::multiple(field, FilterOperator::Any, values)
    }

    pub fn contains<I, S>(field: &str, values: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::multiple(field, FilterOperator::Contains, values)
    }

    pub fn in_set<I, S>(field: &str, values: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::multiple(field, FilterOperator::In, values)
    }

    pub fn greater_than(field: &str, value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::single(field, FilterOperator::GreaterThan, value.into())
    }

    pub fn greater_than_or_equal(
        field: &str,
        value: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::single(field, FilterOperator::GreaterThanOrEqual, value.into())
    }

    pub fn less_than(field: &str, value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::single(field, FilterOperator::LessThan, value.into())
    }

    pub fn less_than_or_equal(
        field: &str,
        value: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::single(field, FilterOperator::LessThanOrEqual, value.into())
    }

    pub fn range(
        field: &str,
        lower: impl Into<String>,
        upper: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            field: validate_field(field)?,
            operator: FilterOperator::Range,
            values: vec![lower.into(), upper.into()],
        })
    }

    /// Implicit content-type scoping for listing queries.
    pub(crate) fn system_type(content_type: &Codename) -> Self {
        Self {
            field: "system.type".to_string(),
            operator: FilterOperator::Equals,
            values: vec![content_type.as_str().to_string()],
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn operator(&self) -> FilterOperator {
        self.operator
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn parameter_name(&self) -> String {
        match self.operator.suffix() {
            Some(suffix) => format!("{}[{}]", self.field, suffix),
            None => self.field.clone(),
        }
    }

    pub(crate) fn encoded_value(&self) -> String {
        match self.operator {
            FilterOperator::Equals => encode_value(self.values.first().map_or("", String::as_str)),
            _ => encode_values(&self.values),
        }
    }

    fn single(
        field: &str,
        operator: FilterOperator,
        value: String,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            field: validate_field(field)?,
            operator,
            values: vec![value],
        })
    }

    fn multiple<I, S>(
        field: &str,
        operator: FilterOperator,
        values: I,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let field = validate_field(field)?;
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(ValidationError::EmptyValues(field));
        }
        Ok(Self {
            field,
            operator,
            values,
        })
    }
}

fn validate_field(field: &str) -> Result<String, ValidationError> {
    validate_name(field, "filter field")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_is_embedded_in_name() {
        let filter = Filter::greater_than_or_equal("elements.price", "10").unwrap();
        assert_eq!(filter.parameter_name(), "elements.price[gte]");
        assert_eq!(filter.encoded_value(), "10");

        let filter = Filter::equals("elements.color", "red").unwrap();
        assert_eq!(filter.parameter_name(), "elements.color");
    }

    #[test]
    fn list_filters_join_values() {
        let filter = Filter::any("elements.category", ["sci fi", "drama"]).unwrap();
        assert_eq!(filter.parameter_name(), "elements.category[any]");
        assert_eq!(filter.encoded_value(), "sci+fi,drama");

        let filter = Filter::range("system.last_modified", "2018-01-01", "2018-12-31").unwrap();
        assert_eq!(filter.encoded_value(), "2018-01-01,2018-12-31");
    }

    #[test]
    fn rejects_missing_field_and_empty_lists() {
        assert_eq!(
            Filter::equals("  ", "x"),
            Err(ValidationError::EmptyField("filter field"))
        );
        assert_eq!(
            Filter::in_set("elements.tags", Vec::<String>::new()),
            Err(ValidationError::EmptyValues("elements.tags".to_string()))
        );
    }

    #[test]
    fn system_type_scoping() {
        let filter = Filter::system_type(&Codename::new("movie").unwrap());
        assert_eq!(filter.parameter_name(), "system.type");
        assert_eq!(filter.encoded_value(), "movie");
    }
}
