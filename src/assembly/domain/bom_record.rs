use serde::{Deserialize, Deserializer, Serialize};

/// BomRecord - one flat bill-of-materials row as delivered by the record source
///
/// `component_name` is the join key for the hierarchy, `id` is the selection
/// key. Neither is guaranteed unique by the source. The descriptive
/// attributes are opaque and passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct BomRecord {
    pub id: i64,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_name: Option<String>,
    pub component_name: String,
    #[serde(default, deserialize_with = "attribute_text")]
    pub part_number: String,
    #[serde(default, deserialize_with = "attribute_text")]
    pub title: String,
    #[serde(default, deserialize_with = "attribute_text")]
    pub quantity: String,
    #[serde(rename = "TYPE", default, deserialize_with = "attribute_text")]
    pub component_type: String,
    #[serde(default, deserialize_with = "attribute_text")]
    pub item: String,
    #[serde(default, deserialize_with = "attribute_text")]
    pub material: String,
}

impl BomRecord {
    /// Creates a record with empty descriptive attributes
    pub fn new(id: i64, component_name: &str, parent_name: Option<&str>) -> Self {
        Self {
            id,
            parent_name: parent_name
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            component_name: component_name.to_string(),
            ..Self::default()
        }
    }

    /// Returns the parent component name, treating an empty name as absent
    pub fn parent(&self) -> Option<&str> {
        self.parent_name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }

    /// Returns true if this record declares `component_name` as its parent
    pub fn is_child_of(&self, component_name: &str) -> bool {
        self.parent() == Some(component_name)
    }
}

/// `PARENT_NAME` arrives as a missing key, `null` or `""` for roots.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|name| !name.is_empty()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AttributeValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

/// Descriptive columns are text, but the API serves QUANTITY and friends as
/// numbers on some rows.
fn attribute_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<AttributeValue>::deserialize(deserializer)?;
    Ok(match value {
        None => String::new(),
        Some(AttributeValue::Text(text)) => text,
        Some(AttributeValue::Integer(number)) => number.to_string(),
        Some(AttributeValue::Float(number)) => number.to_string(),
        Some(AttributeValue::Flag(flag)) => flag.to_string(),
    })
}
