use serde::{Deserialize, Serialize};
use serde_json_bytes::ByteString;
use std::fmt;

/// A JSON object.
pub type Object = serde_json_bytes::Map<ByteString, serde_json_bytes::Value>;

/// One element of an error [`Path`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathElement {
    /// An index into the child array.
    Index(usize),

    /// A key into the child object.
    Key(String),
}

/// A path into the result data, as reported in the `path` field of a graphql error.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Path(pub Vec<PathElement>);

impl Path {
    pub fn empty() -> Path {
        Path(Vec::new())
    }

    pub fn push(&mut self, element: PathElement) {
        self.0.push(element);
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathElement> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path(
            s.split('/')
                .filter(|part| !part.is_empty())
                .map(|part| {
                    if let Ok(index) = part.parse::<usize>() {
                        PathElement::Index(index)
                    } else {
                        PathElement::Key(part.to_string())
                    }
                })
                .collect(),
        )
    }
}

impl From<String> for Path {
    fn from(s: String) -> Self {
        Path::from(s.as_str())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, element) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            match element {
                PathElement::Index(index) => write!(f, "{index}")?,
                PathElement::Key(key) => write!(f, "{key}")?,
            }
        }
        Ok(())
    }
}
