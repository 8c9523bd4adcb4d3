use crate::compat::{String, ToString, Vec};
use crate::encoding::{decode_component, encode_component_into};

/// An ordered set of query parameters.
///
/// Parsed fresh from a query string, mutated, and serialized back. Duplicate
/// names are allowed and insertion order is kept, matching `URLSearchParams`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parse from a query string (with or without leading `?`).
    ///
    /// Parsing is permissive: empty pieces between `&` are dropped, a piece
    /// without `=` gets an empty value, and bad escapes are kept literally.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let pairs = query
            .split('&')
            .filter(|piece| !piece.is_empty())
            .map(|piece| {
                let (name, value) = piece.split_once('=').unwrap_or((piece, ""));
                (
                    decode_component(name).into_owned(),
                    decode_component(value).into_owned(),
                )
            })
            .collect();

        Self { pairs }
    }

    /// Index of the first pair named `name`.
    fn position(&self, name: &str) -> Option<usize> {
        self.pairs.iter().position(|(k, _)| k == name)
    }

    /// Value of the first pair named `name`. Later duplicates are ignored.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.pairs[i].1.as_str())
    }

    /// Values of every pair named `name`, in query order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter_map(move |(k, v)| (k == name).then_some(v.as_str()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn append(&mut self, name: &str, value: &str) {
        self.pairs.push((name.to_string(), value.to_string()));
    }

    /// Give `name` exactly one value.
    ///
    /// If the name is present, its first pair keeps its position and takes
    /// the new value, and every later pair with that name is dropped. So
    /// `a=1&poolId=x&b=2&poolId=y` becomes `a=1&poolId=new&b=2`. Otherwise
    /// the pair goes at the end and all existing pairs keep their order.
    pub fn set(&mut self, name: &str, value: &str) {
        let Some(first) = self.position(name) else {
            self.append(name, value);
            return;
        };

        self.pairs[first].1.replace_range(.., value);
        let mut index = 0;
        self.pairs.retain(|(k, _)| {
            let keep = index <= first || k != name;
            index += 1;
            keep
        });
    }

    /// Remove every pair named `name`. Returns whether anything was removed.
    pub fn delete(&mut self, name: &str) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|(k, _)| k != name);
        self.pairs.len() != before
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(_, v)| v.as_str())
    }

    /// Query string with leading `?`, or empty string if there are no pairs.
    pub fn serialize(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }

        let mut result = String::from("?");
        self.write_pairs(&mut result);
        result
    }

    /// Query string without leading `?`.
    /// JavaScript `URLSearchParams.toString()` compatible.
    #[allow(clippy::inherent_to_string_shadow_display)]
    pub fn to_string(&self) -> String {
        let mut result = String::new();
        self.write_pairs(&mut result);
        result
    }

    fn write_pairs(&self, buffer: &mut String) {
        for (i, (name, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                buffer.push('&');
            }
            encode_component_into(buffer, name);
            buffer.push('=');
            encode_component_into(buffer, value);
        }
    }
}

impl core::fmt::Display for SearchParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_string())
    }
}

impl From<&str> for SearchParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for SearchParams {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for SearchParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let pairs = iter
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
            .collect();
        Self { pairs }
    }
}
