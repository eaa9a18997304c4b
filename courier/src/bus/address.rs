use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Address {
    uri: String,
}

impl Address {
    pub fn new(uri: impl Into<String>) -> Self {
        return Address { uri: uri.into() };
    }

    pub fn as_str(&self) -> &str {
        return &self.uri;
    }
}

impl Display for Address {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.uri)
    }
}
