//! Sort keys derived from a free-form personal name
//!
//! A name is a sequence of whitespace separated tokens. The last token is the
//! primary key, and the tokens before it, joined with single spaces, are the
//! secondary key. Punctuation is never split, so `Smith-Jones`, `O'Neill` and
//! `Smith,` are each one token.
//!
//! ```
//! use name_sorter::name::NameKey;
//! let key = NameKey::new("  Hunter  Uriah Mathew Clarke ").unwrap();
//! assert_eq!(key.last(), "Clarke");
//! assert_eq!(key.given(), "Hunter Uriah Mathew");
//! ```

/// the whitespace separated tokens of a name, with no empty tokens
pub fn tokens(name: &str) -> impl DoubleEndedIterator<Item = &str> {
    name.split_whitespace()
}

/// Primary and secondary sort keys for one name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameKey<'a> {
    last: &'a str,
    given: String,
}

impl<'a> NameKey<'a> {
    /// Derive the keys. None if the name is blank.
    #[must_use]
    pub fn new(name: &'a str) -> Option<Self> {
        let mut parts = tokens(name);
        let last = parts.next_back()?;
        let mut given = String::new();
        for x in parts {
            if !given.is_empty() {
                given.push(' ');
            }
            given.push_str(x);
        }
        Some(Self { last, given })
    }
    /// like `new`, but a blank name yields empty keys
    #[must_use]
    pub fn new_lossy(name: &'a str) -> Self {
        Self::new(name).unwrap_or_default()
    }
    /// the last token
    #[must_use]
    pub const fn last(&self) -> &str {
        self.last
    }
    /// everything before the last token, single spaced
    #[must_use]
    pub fn given(&self) -> &str {
        &self.given
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys() {
        let k = NameKey::new("Adonis Julius Archer").unwrap();
        assert_eq!(k.last(), "Archer");
        assert_eq!(k.given(), "Adonis Julius");

        let k = NameKey::new("Madonna").unwrap();
        assert_eq!(k.last(), "Madonna");
        assert_eq!(k.given(), "");

        assert!(NameKey::new("").is_none());
        assert!(NameKey::new(" \t ").is_none());
        assert_eq!(NameKey::new_lossy("   "), NameKey::default());
    }

    #[test]
    fn spacing_is_normalized() {
        let a = NameKey::new("  John   Smith  ").unwrap();
        let b = NameKey::new("John Smith").unwrap();
        assert_eq!(a, b);
        let a = NameKey::new("\tJohn \u{3000}Adam  Smith").unwrap();
        assert_eq!(a.given(), "John Adam");
    }

    #[test]
    fn punctuation_is_opaque() {
        let k = NameKey::new("Anna-Marie Smith-Jones").unwrap();
        assert_eq!(k.last(), "Smith-Jones");
        assert_eq!(k.given(), "Anna-Marie");
        let k = NameKey::new("Smith, John").unwrap();
        assert_eq!(k.last(), "John");
        assert_eq!(k.given(), "Smith,");
        assert_eq!(tokens("O'Connor John").collect::<Vec<_>>(), ["O'Connor", "John"]);
    }
}
