use url::form_urlencoded;

/// Ordered query-string parameters.
///
/// Empty values are never added, and lists are sent as repeated keys
/// (`senderRoles=COACH&senderRoles=PLAYER`) since the backend binds them that way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl ToString) {
        let value = value.to_string();
        if !value.trim().is_empty() {
            self.pairs.push((key.to_string(), value));
        }
    }

    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    pub fn with_opt<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn with_list<V: ToString>(mut self, key: &str, values: &[V]) -> Self {
        for value in values {
            self.push(key, value.to_string());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Percent-encoded query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

/// Conversion of a typed filter into query parameters.
pub trait ToQuery {
    fn to_query(&self) -> QueryParams;
}

impl ToQuery for QueryParams {
    fn to_query(&self) -> QueryParams {
        self.clone()
    }
}

/// Percent-encodes a single value for use inside a hand-built path.
pub fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod test;
