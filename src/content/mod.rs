use serde_yaml::{Mapping, Value};

pub mod content_file;
pub mod front_matter;

/// One Octopress post as found on disk, before any conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPost {
    pub file_name: String,
    pub front_matter: FrontMatter,
    pub content: String,
}

/// The YAML block at the top of a post.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter(pub Mapping);

impl FrontMatter {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Text of a scalar field. `None` when missing, `null` or not a scalar.
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_to_string)
    }

    /// Like `get_str`, but empty strings and `false` count as missing.
    pub fn get_present(&self, key: &str) -> Option<String> {
        match self.get(key) {
            Some(Value::Bool(false)) => None,
            Some(v) => scalar_to_string(v).filter(|s| !s.is_empty()),
            None => None,
        }
    }

    /// A field that can be either a list or a single string.
    ///
    /// Blank entries and nested structures are skipped. A lone number or boolean is not a list.
    pub fn get_list(&self, key: &str) -> Vec<String> {
        let values: Vec<String> = match self.get(key) {
            Some(Value::Sequence(seq)) => seq.iter().filter_map(scalar_to_string).collect(),
            Some(Value::String(s)) => vec![s.clone()],
            Some(_) | None => vec![],
        };

        values.into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect()
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        _ => None,
    }
}
