//! Bidirectional token/code tables, one per categorical dimension.

use crate::error::MappingError;
use std::collections::{BTreeMap, HashMap};

/// Bijective mapping between tokens and dense codes for a single dimension.
///
/// Codes are handed out in first-seen order starting at 0, so the code of a
/// token is also its position in `tokens`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeBook {
    codes: HashMap<String, usize>,
    tokens: Vec<String>,
}

impl CodeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the code for `token`, inserting it if unseen.
    ///
    /// The boolean is true when the token was inserted by this call.
    pub fn get_or_insert(&mut self, token: &str) -> (usize, bool) {
        if let Some(&code) = self.codes.get(token) {
            return (code, false);
        }
        let code = self.tokens.len();
        self.codes.insert(token.to_string(), code);
        self.tokens.push(token.to_string());
        (code, true)
    }

    pub fn code(&self, token: &str) -> Option<usize> {
        self.codes.get(token).copied()
    }

    pub fn token(&self, code: usize) -> Option<&str> {
        self.tokens.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate `(token, code)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .map(|(code, token)| (token.as_str(), code))
    }

    /// Rebuild a codebook from persisted `(token, code)` pairs.
    ///
    /// Pairs must be listed in code order with codes `0..n` and no repeated
    /// token.
    pub fn from_pairs(pairs: &[(String, usize)]) -> Result<Self, MappingError> {
        let mut book = Self::new();
        for (expected, (token, code)) in pairs.iter().enumerate() {
            if *code != expected {
                return Err(MappingError::InvalidParams(format!(
                    "code {} for token '{}' breaks contiguous range (expected {})",
                    code, token, expected
                )));
            }
            let (_, inserted) = book.get_or_insert(token);
            if !inserted {
                return Err(MappingError::InvalidParams(format!(
                    "token '{}' mapped more than once",
                    token
                )));
            }
        }
        Ok(book)
    }
}

/// Per-dimension codebooks.
///
/// Entries exist only for dimensions that have had at least one token mapped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MappingTable {
    books: BTreeMap<usize, CodeBook>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Code for `token` in `dimension`, inserting it if unseen.
    pub fn get_or_insert(&mut self, token: &str, dimension: usize) -> (usize, bool) {
        self.books.entry(dimension).or_default().get_or_insert(token)
    }

    pub fn code(&self, token: &str, dimension: usize) -> Option<usize> {
        self.books.get(&dimension).and_then(|book| book.code(token))
    }

    pub fn contains(&self, token: &str, dimension: usize) -> bool {
        self.code(token, dimension).is_some()
    }

    pub fn unmap_token(&self, code: usize, dimension: usize) -> Result<&str, MappingError> {
        self.books
            .get(&dimension)
            .and_then(|book| book.token(code))
            .ok_or(MappingError::UnknownCode { code, dimension })
    }

    pub fn unmap_value(&self, token: &str, dimension: usize) -> Result<usize, MappingError> {
        self.code(token, dimension)
            .ok_or_else(|| MappingError::UnknownToken {
                token: token.to_string(),
                dimension,
            })
    }

    /// Number of codes assigned in `dimension` (0 if it has no table).
    pub fn count(&self, dimension: usize) -> usize {
        self.books.get(&dimension).map_or(0, CodeBook::len)
    }

    pub fn book(&self, dimension: usize) -> Option<&CodeBook> {
        self.books.get(&dimension)
    }

    /// Iterate codebooks in ascending dimension order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &CodeBook)> + '_ {
        self.books.iter().map(|(&dimension, book)| (dimension, book))
    }

    pub(crate) fn insert_book(&mut self, dimension: usize, book: CodeBook) {
        self.books.insert(dimension, book);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codebook_first_seen_order() {
        let mut book = CodeBook::new();
        assert_eq!(book.get_or_insert("red"), (0, true));
        assert_eq!(book.get_or_insert("blue"), (1, true));
        assert_eq!(book.get_or_insert("red"), (0, false));
        assert_eq!(book.get_or_insert("green"), (2, true));
        assert_eq!(book.len(), 3);

        let pairs: Vec<(&str, usize)> = book.iter().collect();
        assert_eq!(pairs, vec![("red", 0), ("blue", 1), ("green", 2)]);
    }

    #[test]
    fn test_codebook_bijection() {
        let mut book = CodeBook::new();
        for token in ["a", "b", "c", "b", "a"] {
            book.get_or_insert(token);
        }
        for (token, code) in book.iter() {
            assert_eq!(book.code(token), Some(code));
            assert_eq!(book.token(code), Some(token));
        }
        assert_eq!(book.token(3), None);
    }

    #[test]
    fn test_from_pairs_rejects_gap() {
        let pairs = vec![("a".to_string(), 0), ("b".to_string(), 2)];
        let err = CodeBook::from_pairs(&pairs).unwrap_err();
        assert!(matches!(err, MappingError::InvalidParams(_)));
    }

    #[test]
    fn test_from_pairs_rejects_nonzero_start() {
        let pairs = vec![("a".to_string(), 1)];
        assert!(CodeBook::from_pairs(&pairs).is_err());
    }

    #[test]
    fn test_from_pairs_rejects_duplicate_token() {
        let pairs = vec![("a".to_string(), 0), ("a".to_string(), 1)];
        assert!(CodeBook::from_pairs(&pairs).is_err());
    }

    #[test]
    fn test_table_dimensions_are_independent() {
        let mut table = MappingTable::new();
        assert_eq!(table.get_or_insert("x", 0), (0, true));
        assert_eq!(table.get_or_insert("y", 1), (0, true));
        assert_eq!(table.get_or_insert("y", 0), (1, true));
        assert_eq!(table.count(0), 2);
        assert_eq!(table.count(1), 1);
        assert_eq!(table.count(7), 0);
    }

    #[test]
    fn test_table_unmap_errors() {
        let mut table = MappingTable::new();
        table.get_or_insert("x", 0);

        assert!(matches!(
            table.unmap_token(1, 0),
            Err(MappingError::UnknownCode {
                code: 1,
                dimension: 0
            })
        ));
        assert!(matches!(
            table.unmap_token(0, 4),
            Err(MappingError::UnknownCode { .. })
        ));
        assert!(matches!(
            table.unmap_value("z", 0),
            Err(MappingError::UnknownToken { .. })
        ));
        assert_eq!(table.unmap_token(0, 0).unwrap(), "x");
        assert_eq!(table.unmap_value("x", 0).unwrap(), 0);
    }
}
