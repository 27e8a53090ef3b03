//! Static catalog of upstream endpoints exposed as tools.
//!
//! Tool names, parameter names, required flags, types and paths mirror the
//! upstream API surface exactly, including its own spellings
//! (`similiar-homes`). Callers depend on these names; do not "fix" them.

mod agents;
mod finance;
mod for_rent;
mod for_sale;
mod location;
mod property;

use crate::schema::EndpointDescriptor;

/// Process identifier under which the catalog is served
pub const SERVER_NAME: &str = "us-real-estate";

/// Value of the `x-rapidapi-host` header and host of the default base URL
pub const UPSTREAM_HOST: &str = "us-real-estate.p.rapidapi.com";

pub const DEFAULT_BASE_URL: &str = "https://us-real-estate.p.rapidapi.com";

/// Public listing page of the upstream API
pub const UPSTREAM_API_PAGE: &str = "https://rapidapi.com/datascraper/api/us-real-estate";

const GROUPS: &[&[EndpointDescriptor]] = &[
    property::ENDPOINTS,
    location::ENDPOINTS,
    for_sale::ENDPOINTS,
    for_rent::ENDPOINTS,
    finance::ENDPOINTS,
    agents::ENDPOINTS,
];

/// All endpoints, grouped by upstream area
pub fn endpoints() -> impl Iterator<Item = &'static EndpointDescriptor> {
    GROUPS.iter().copied().flatten()
}

/// Find an endpoint by tool name
pub fn find(name: &str) -> Option<&'static EndpointDescriptor> {
    endpoints().find(|endpoint| endpoint.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryParams;
    use crate::schema::{HttpMethod, ParamKind};
    use serde_json::{json, Map, Value};
    use std::collections::HashSet;

    fn sample_value(kind: ParamKind) -> Value {
        match kind {
            ParamKind::String => json!("sample"),
            ParamKind::Integer => json!(1),
            ParamKind::Float => json!(1.5),
            ParamKind::Boolean => json!(true),
            ParamKind::Enum(allowed) => json!(allowed[0]),
        }
    }

    #[test]
    fn test_catalog_size() {
        assert_eq!(endpoints().count(), 34);
    }

    #[test]
    fn test_tool_names_unique() {
        let mut seen = HashSet::new();
        for endpoint in endpoints() {
            assert!(seen.insert(endpoint.name), "duplicate tool {}", endpoint.name);
        }
    }

    #[test]
    fn test_param_names_unique_per_tool() {
        for endpoint in endpoints() {
            let mut seen = HashSet::new();
            for param in endpoint.params {
                assert!(
                    seen.insert(param.name),
                    "duplicate parameter {} on {}",
                    param.name,
                    endpoint.name
                );
            }
        }
    }

    #[test]
    fn test_paths_relative_and_get() {
        for endpoint in endpoints() {
            assert!(!endpoint.path.starts_with('/'), "{} has absolute path", endpoint.name);
            assert!(!endpoint.path.is_empty());
            assert_eq!(endpoint.method, HttpMethod::Get);
        }
    }

    #[test]
    fn test_required_only_query_contains_exactly_required() {
        for endpoint in endpoints() {
            let args: Map<String, Value> = endpoint
                .required_params()
                .map(|p| (p.name.to_string(), sample_value(p.kind)))
                .collect();

            let query = QueryParams::build(endpoint, &Value::Object(args)).unwrap();

            let got: HashSet<&str> = query.names().collect();
            let want: HashSet<&str> = endpoint.required_params().map(|p| p.name).collect();
            assert_eq!(got, want, "query mismatch for {}", endpoint.name);
        }
    }

    #[test]
    fn test_schema_required_matches_descriptor() {
        for endpoint in endpoints() {
            let schema = endpoint.input_schema();
            let required: Vec<&str> = schema["required"]
                .as_array()
                .unwrap()
                .iter()
                .map(|v| v.as_str().unwrap())
                .collect();
            let want: Vec<&str> = endpoint.required_params().map(|p| p.name).collect();
            assert_eq!(required, want);
            assert_eq!(
                schema["properties"].as_object().unwrap().len(),
                endpoint.params.len()
            );
        }
    }

    #[test]
    fn test_known_paths() {
        assert_eq!(find("property_detail").unwrap().path, "property-detail");
        assert_eq!(find("v3_property_detail").unwrap().path, "v3/property-detail");
        assert_eq!(find("location_suggest").unwrap().path, "location/suggest");
        assert_eq!(
            find("for_sale_similiar_homes").unwrap().path,
            "for-sale/similiar-homes"
        );
        assert_eq!(
            find("for_rent_similiar_homes").unwrap().path,
            "v2/for-rent/similiar-homes"
        );
        assert_eq!(
            find("agents_agent_listings").unwrap().path,
            "agents/agent-listings"
        );
        assert!(find("no_such_tool").is_none());
    }

    #[test]
    fn test_declared_types_preserved() {
        let mortgage = find("finance_mortgage_calculate").unwrap();
        assert_eq!(mortgage.param("show_amortization").unwrap().kind, ParamKind::Boolean);
        assert!(mortgage.param("show_amortization").unwrap().required);
        assert_eq!(mortgage.param("price").unwrap().kind, ParamKind::Float);

        let v2_detail = find("v2_property_detail").unwrap();
        assert_eq!(v2_detail.param("property_id").unwrap().kind, ParamKind::Float);
        assert_eq!(v2_detail.param("property_id").unwrap().default, Some("3199790641"));

        let detail = find("property_detail").unwrap();
        assert_eq!(detail.param("property_id").unwrap().kind, ParamKind::String);

        let schools = find("location_schools").unwrap();
        assert_eq!(schools.required_params().count(), 0);
    }
}
