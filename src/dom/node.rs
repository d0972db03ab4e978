/// Insertion-ordered attribute map with unique keys.
///
/// Attribute order is document order and must stay deterministic, so lookups
/// are linear scans over a small vector rather than hashed.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AttrMap(Vec<(String, String)>);

impl AttrMap {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether an attribute with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set an attribute, replacing the value in place if the name exists.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Iterate attributes in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

/// Closed tag category driving merge behavior.
///
/// Derived once per node from the namespace-stripped local name instead of
/// comparing tag strings at every decision point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TagCategory {
    /// A layer/group container (`g`).
    Group,
    /// A text element (`text`).
    Text,
    /// Anything else.
    Other,
}

/// One element of a keyframe document tree.
///
/// Each node exclusively owns its children; merged output trees are built
/// fresh and never alias input nodes.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementNode {
    /// Tag name, possibly namespace-qualified (`{uri}local`).
    pub tag: String,
    /// Attributes in document order.
    pub attrs: AttrMap,
    /// Child elements in document order.
    pub children: Vec<ElementNode>,
    /// Text preceding the first child.
    pub text: Option<String>,
    /// Text following this element's end tag.
    pub tail: Option<String>,
}

impl ElementNode {
    /// Create an element with the given tag and nothing else.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Tag name with any `{namespace}` qualifier stripped.
    pub fn local_name(&self) -> &str {
        self.tag
            .strip_prefix('{')
            .and_then(|rest| rest.split_once('}'))
            .map(|(_, local)| local)
            .unwrap_or(&self.tag)
    }

    /// Category of this element's tag.
    pub fn category(&self) -> TagCategory {
        match self.local_name() {
            "g" => TagCategory::Group,
            "text" => TagCategory::Text,
            _ => TagCategory::Other,
        }
    }
}
