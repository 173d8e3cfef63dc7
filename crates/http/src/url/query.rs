use std::slice;

/// Ordered query parameters borrowed from a url.
///
/// The pairs keep the order they had in the query string and duplicate keys are
/// kept, so `?a=1&a=2` yields two entries. Lookups by key come in a first-wins
/// ([`get`](Self::get)) and a last-wins ([`get_last`](Self::get_last)) flavour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams<'a> {
    pairs: Vec<(&'a str, &'a str)>,
}

impl<'a> QueryParams<'a> {
    /// Creates an empty parameter list
    #[inline]
    pub fn empty() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Splits a raw query string (the text after `?`) on `&`, then each segment on its first `=`.
    ///
    /// A segment without `=` becomes a key with an empty value.
    pub fn from_query(query: &'a str) -> Self {
        query.split('&').map(|segment| segment.split_once('=').unwrap_or((segment, ""))).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the value of the first pair with the given key
    pub fn get(&self, key: impl AsRef<str>) -> Option<&'a str> {
        let key = key.as_ref();
        self.pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    /// Returns the value of the last pair with the given key
    pub fn get_last(&self, key: impl AsRef<str>) -> Option<&'a str> {
        let key = key.as_ref();
        self.pairs.iter().rev().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    /// Returns every value for the given key, in url order
    pub fn get_all<'p>(&'p self, key: &'p str) -> impl Iterator<Item = &'a str> + 'p {
        self.pairs.iter().filter(move |(k, _)| *k == key).map(|(_, v)| *v)
    }

    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        let key = key.as_ref();
        self.pairs.iter().any(|(k, _)| *k == key)
    }

    pub fn iter(&self) -> slice::Iter<'_, (&'a str, &'a str)> {
        self.pairs.iter()
    }

    pub fn as_slice(&self) -> &[(&'a str, &'a str)] {
        &self.pairs
    }

    /// Copies the pairs out of the url they borrow from
    pub fn to_owned_pairs(&self) -> Vec<(String, String)> {
        self.pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for QueryParams<'a> {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        Self { pairs: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for QueryParams<'a> {
    type Item = (&'a str, &'a str);
    type IntoIter = std::vec::IntoIter<(&'a str, &'a str)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'p, 'a> IntoIterator for &'p QueryParams<'a> {
    type Item = &'p (&'a str, &'a str);
    type IntoIter = slice::Iter<'p, (&'a str, &'a str)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
