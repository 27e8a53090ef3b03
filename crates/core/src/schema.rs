// Declarative parameter schema for upstream endpoints

use serde::Serialize;
use serde_json::{json, Map, Value};

/// HTTP method used to reach an upstream endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic type of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    /// Whole numbers only
    Integer,
    /// Any JSON number, integers included
    Float,
    Boolean,
    /// A string restricted to the listed values
    Enum(&'static [&'static str]),
}

impl ParamKind {
    /// JSON Schema `type` keyword for this kind
    pub fn json_type(&self) -> &'static str {
        match self {
            ParamKind::String | ParamKind::Enum(_) => "string",
            ParamKind::Integer => "integer",
            ParamKind::Float => "number",
            ParamKind::Boolean => "boolean",
        }
    }

    /// Whether a supplied (non-null) value matches this kind
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (ParamKind::String, Value::String(_)) => true,
            (ParamKind::Integer, Value::Number(n)) => n.is_i64() || n.is_u64(),
            (ParamKind::Float, Value::Number(_)) => true,
            (ParamKind::Boolean, Value::Bool(_)) => true,
            (ParamKind::Enum(allowed), Value::String(s)) => allowed.contains(&s.as_str()),
            _ => false,
        }
    }
}

/// Name of the JSON type of a value, as reported in validation errors
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Errors raised while checking a call's arguments against an endpoint
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("arguments must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("unknown parameter '{name}' for tool '{tool}'")]
    UnknownParameter { tool: &'static str, name: String },

    #[error("missing required parameter '{name}'")]
    MissingRequired { name: &'static str },

    #[error("parameter '{name}' expects {expected}, got {found}")]
    TypeMismatch {
        name: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("parameter '{name}' must be one of {}, got '{value}'", .allowed.join("|"))]
    NotInEnum {
        name: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
}

impl ValidationError {
    /// Name of the offending parameter, if the error is about one
    pub fn parameter(&self) -> Option<&str> {
        match self {
            ValidationError::NotAnObject { .. } => None,
            ValidationError::UnknownParameter { name, .. } => Some(name.as_str()),
            ValidationError::MissingRequired { name }
            | ValidationError::TypeMismatch { name, .. }
            | ValidationError::NotInEnum { name, .. } => Some(*name),
        }
    }
}

/// One declared parameter of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamDescriptor {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    /// Default hint published to callers. Never sent upstream on its own.
    pub default: Option<&'static str>,
    pub description: &'static str,
}

impl ParamDescriptor {
    pub const fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: None,
            description,
        }
    }

    pub const fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: None,
            description,
        }
    }

    pub const fn with_default(self, default: &'static str) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }

    /// The default hint as a typed JSON value.
    ///
    /// Numeric and boolean hints are published as JSON numbers/booleans when
    /// they parse as such; anything else falls back to the raw string.
    pub fn default_value(&self) -> Option<Value> {
        let raw = self.default?;
        if matches!(self.kind, ParamKind::String | ParamKind::Enum(_)) {
            return Some(Value::String(raw.to_string()));
        }
        match serde_json::from_str::<Value>(raw) {
            Ok(value) if self.kind.accepts(&value) => Some(value),
            _ => Some(Value::String(raw.to_string())),
        }
    }

    /// JSON Schema fragment describing this parameter
    pub fn schema(&self) -> Value {
        let mut schema = Map::new();
        schema.insert("type".to_string(), json!(self.kind.json_type()));
        if let ParamKind::Enum(allowed) = self.kind {
            schema.insert("enum".to_string(), json!(allowed));
        }
        schema.insert("description".to_string(), json!(self.description));
        if let Some(default) = self.default_value() {
            schema.insert("default".to_string(), default);
        }
        Value::Object(schema)
    }

    /// Check a supplied, non-null value against the declared kind
    pub fn check(&self, value: &Value) -> Result<(), ValidationError> {
        if self.kind.accepts(value) {
            return Ok(());
        }
        match (self.kind, value) {
            (ParamKind::Enum(allowed), Value::String(s)) => Err(ValidationError::NotInEnum {
                name: self.name,
                value: s.clone(),
                allowed,
            }),
            _ => Err(ValidationError::TypeMismatch {
                name: self.name,
                expected: self.kind.json_type(),
                found: json_type_name(value),
            }),
        }
    }
}

/// Static description of one upstream operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// Tool name exposed to callers
    pub name: &'static str,
    /// Path relative to the upstream base URL, without a leading slash
    pub path: &'static str,
    pub method: HttpMethod,
    pub description: &'static str,
    pub params: &'static [ParamDescriptor],
}

impl EndpointDescriptor {
    pub const fn get(
        name: &'static str,
        path: &'static str,
        description: &'static str,
        params: &'static [ParamDescriptor],
    ) -> Self {
        Self {
            name,
            path,
            method: HttpMethod::Get,
            description,
            params,
        }
    }

    /// Look up a declared parameter by name
    pub fn param(&self, name: &str) -> Option<&'static ParamDescriptor> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn required_params(&self) -> impl Iterator<Item = &'static ParamDescriptor> {
        self.params.iter().filter(|p| p.required)
    }

    /// JSON Schema object for the tool's arguments
    pub fn input_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|p| (p.name.to_string(), p.schema()))
            .collect();
        let required: Vec<&str> = self.required_params().map(|p| p.name).collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false
        })
    }

    /// Drop unset (null) arguments and check the rest against the schema.
    ///
    /// Returns the supplied values in declaration order, paired with their
    /// descriptors. A missing or null argument object counts as empty.
    pub fn validate<'a>(
        &self,
        arguments: &'a Value,
    ) -> Result<Vec<(&'static ParamDescriptor, &'a Value)>, ValidationError> {
        let supplied = match arguments {
            Value::Null => None,
            Value::Object(map) => Some(map),
            other => {
                return Err(ValidationError::NotAnObject {
                    found: json_type_name(other),
                })
            }
        };

        if let Some(map) = supplied {
            for (name, value) in map {
                let Some(param) = self.param(name) else {
                    return Err(ValidationError::UnknownParameter {
                        tool: self.name,
                        name: name.clone(),
                    });
                };
                if !value.is_null() {
                    param.check(value)?;
                }
            }
        }

        let mut present = Vec::new();
        for param in self.params {
            match supplied.and_then(|map| map.get(param.name)) {
                Some(value) if !value.is_null() => present.push((param, value)),
                _ if param.required => {
                    return Err(ValidationError::MissingRequired { name: param.name })
                }
                _ => {}
            }
        }

        Ok(present)
    }
}
