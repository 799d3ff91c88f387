use serde::{Deserialize, Serialize};

/// One inventory record.
///
/// Serialized as `{"name": ..., "stock": ...}`; both fields are required when
/// reading a snapshot back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub stock: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, stock: i64) -> Self {
        Self {
            name: name.into(),
            stock,
        }
    }
}

/// Policy applied when the backing file exists but cannot be read or parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadPolicy {
    /// Surface the failure to the caller.
    #[default]
    Fail,
    /// Log a warning and start with an empty inventory.
    #[serde(rename = "empty", alias = "start-empty")]
    StartEmpty,
}

impl LoadPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadPolicy::Fail => "fail",
            LoadPolicy::StartEmpty => "empty",
        }
    }
}

impl std::str::FromStr for LoadPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fail" => Ok(LoadPolicy::Fail),
            "empty" | "start-empty" => Ok(LoadPolicy::StartEmpty),
            other => Err(format!(
                "Unknown load policy '{}' (expected 'fail' or 'empty')",
                other
            )),
        }
    }
}
