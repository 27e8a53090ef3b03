// Query-string construction from validated tool arguments

use crate::schema::{EndpointDescriptor, ValidationError};
use serde_json::Value;

/// Canonical query parameters for one upstream request.
///
/// Pairs are kept in the endpoint's declaration order. Only parameters the
/// caller explicitly supplied with a non-null value are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Filter, validate and serialize `arguments` for `endpoint`
    pub fn build(endpoint: &EndpointDescriptor, arguments: &Value) -> Result<Self, ValidationError> {
        let present = endpoint.validate(arguments)?;

        let pairs: Vec<(&'static str, String)> = present
            .into_iter()
            .map(|(param, value)| (param.name, encode_value(value)))
            .collect();

        tracing::trace!(
            tool = endpoint.name,
            supplied = pairs.len(),
            declared = endpoint.params.len(),
            "Built query parameters"
        );

        Ok(Self { pairs })
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// Serialized value for a parameter, if it was supplied
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.iter().map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `application/x-www-form-urlencoded` rendering, as sent on the wire
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
    }
}

/// Render a validated scalar as its query-string literal.
///
/// Booleans become `true`/`false`, numbers keep serde_json's decimal form,
/// strings pass through untouched.
fn encode_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Validation only lets scalars through
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ParamDescriptor, ParamKind};
    use serde_json::json;

    const RENTALS: EndpointDescriptor = EndpointDescriptor::get(
        "rentals",
        "for-rent",
        "Rentals",
        &[
            ParamDescriptor::required("city", ParamKind::String, ""),
            ParamDescriptor::required("state_code", ParamKind::String, ""),
            ParamDescriptor::optional("limit", ParamKind::Float, "").with_default("42"),
            ParamDescriptor::optional("cats_ok", ParamKind::Boolean, ""),
            ParamDescriptor::optional("dogs_ok", ParamKind::Boolean, ""),
            ParamDescriptor::optional("latitude", ParamKind::Float, ""),
        ],
    );

    #[test]
    fn test_absent_optionals_never_serialized() {
        let query = QueryParams::build(&RENTALS, &json!({"city": "Detroit", "state_code": "MI"})).unwrap();

        assert_eq!(query.names().collect::<Vec<_>>(), vec!["city", "state_code"]);
        assert!(query.get("limit").is_none());
        assert!(!query.encode().contains("limit"));
    }

    #[test]
    fn test_null_optionals_never_serialized() {
        let query = QueryParams::build(
            &RENTALS,
            &json!({"city": "Detroit", "state_code": "MI", "cats_ok": null, "limit": null}),
        )
        .unwrap();

        assert_eq!(query.len(), 2);
        assert!(!query.encode().contains("cats_ok"));
    }

    #[test]
    fn test_boolean_literals() {
        let query = QueryParams::build(
            &RENTALS,
            &json!({"city": "Detroit", "state_code": "MI", "cats_ok": true, "dogs_ok": false}),
        )
        .unwrap();

        assert_eq!(query.get("cats_ok"), Some("true"));
        assert_eq!(query.get("dogs_ok"), Some("false"));
    }

    #[test]
    fn test_number_rendering() {
        let query = QueryParams::build(
            &RENTALS,
            &json!({"city": "Detroit", "state_code": "MI", "limit": 10, "latitude": 40.769135}),
        )
        .unwrap();

        assert_eq!(query.get("limit"), Some("10"));
        assert_eq!(query.get("latitude"), Some("40.769135"));
    }

    #[test]
    fn test_strings_pass_through_untouched() {
        let query = QueryParams::build(&RENTALS, &json!({"city": "  New York ", "state_code": "ny"})).unwrap();

        assert_eq!(query.get("city"), Some("  New York "));
        assert_eq!(query.get("state_code"), Some("ny"));
    }

    #[test]
    fn test_declaration_order_and_encoding() {
        let query = QueryParams::build(
            &RENTALS,
            &json!({"dogs_ok": true, "state_code": "MI", "city": "Ann Arbor"}),
        )
        .unwrap();

        assert_eq!(query.encode(), "city=Ann+Arbor&state_code=MI&dogs_ok=true");
    }

    #[test]
    fn test_validation_error_propagates() {
        let err = QueryParams::build(&RENTALS, &json!({"city": "Detroit"})).unwrap_err();
        assert_eq!(err, ValidationError::MissingRequired { name: "state_code" });
    }
}
