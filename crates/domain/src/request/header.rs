//! HTTP Header types

/// `Accept` header name.
pub const ACCEPT: &str = "Accept";
/// `Content-Type` header name.
pub const CONTENT_TYPE: &str = "Content-Type";
/// Media type for every body the item API speaks.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// A single HTTP header with name and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// The header name (e.g., "Content-Type")
    pub name: String,
    /// The header value (e.g., "application/json")
    pub value: String,
}

impl Header {
    /// Creates a new header.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An ordered collection of HTTP headers.
///
/// Names compare case-insensitively; setting an existing name replaces
/// its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    items: Vec<Header>,
}

impl Headers {
    /// Creates an empty header collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Sets a header, replacing any existing value with the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .items
            .iter_mut()
            .find(|h| h.name.eq_ignore_ascii_case(&name))
        {
            Some(existing) => existing.value = value,
            None => self.items.push(Header::new(name, value)),
        }
    }

    /// Gets a header value by name (case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }

    /// Returns an iterator over all headers.
    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.items.iter()
    }

    /// Returns the number of headers.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Vec::len is not const in stable
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no headers.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_replaces_case_insensitively() {
        let mut headers = Headers::new();
        headers.set("accept", "text/plain");
        headers.set(ACCEPT, JSON_MEDIA_TYPE);

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("ACCEPT"), Some(JSON_MEDIA_TYPE));
    }

    #[test]
    fn test_get_missing() {
        let headers = Headers::new();
        assert!(headers.is_empty());
        assert_eq!(headers.get(CONTENT_TYPE), None);
    }
}
