use std::collections::HashMap;

use serde::{Serialize, Serializer};

/// Interned string table keeping first-seen order.
///
/// Used for the tag set: each distinct tag gets the next id and
/// iteration replays the order of discovery.
#[derive(Debug, Default, Clone)]
pub struct Quark {
    v: Vec<String>,
    m: HashMap<String, usize>,
}

impl Quark {
    pub fn find_or_insert(&mut self, key: &str) -> usize {
        if let Some(&id) = self.m.get(key) {
            return id;
        }
        let id = self.v.len();
        self.m.insert(key.to_string(), id);
        self.v.push(key.to_string());
        id
    }

    pub fn to_str(&self, id: usize) -> Option<&str> {
        self.v.get(id).map(String::as_str)
    }

    pub fn to_id(&self, s: &str) -> Option<usize> {
        self.m.get(s).copied()
    }

    pub fn contains(&self, s: &str) -> bool {
        self.m.contains_key(s)
    }

    pub fn len(&self) -> usize {
        self.v.len()
    }

    pub fn is_empty(&self) -> bool {
        self.v.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.v.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Quark {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut quark = Quark::default();
        for s in iter {
            quark.find_or_insert(s.as_ref());
        }
        quark
    }
}

impl PartialEq for Quark {
    fn eq(&self, other: &Self) -> bool {
        self.v == other.v
    }
}

impl Serialize for Quark {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.v.serialize(serializer)
    }
}
