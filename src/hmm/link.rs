use std::collections::HashMap;

use serde::Serialize;

/// A weighted edge `previous -> current`.
///
/// Transitions link two tags. Emissions link a tag (`previous`) to a
/// word (`current`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub previous: String,
    pub current: String,
    #[serde(skip)]
    pub occurrences: u64,
    pub weight: f64,
}

impl Link {
    pub fn new(previous: impl Into<String>, current: impl Into<String>, weight: f64) -> Self {
        Self { previous: previous.into(), current: current.into(), occurrences: 0, weight }
    }
}

/// Links indexed by their `(previous, current)` key, in first-seen order.
#[derive(Debug, Default, Clone)]
pub struct LinkTable {
    links: Vec<Link>,
    index: HashMap<String, HashMap<String, usize>>,
}

impl LinkTable {
    /// Counts one more occurrence of `previous -> current`.
    pub fn add(&mut self, previous: &str, current: &str) {
        if let Some(link) = self.get_mut(previous, current) {
            link.occurrences += 1;
            return;
        }
        let mut link = Link::new(previous, current, 0.0);
        link.occurrences = 1;
        self.insert(link);
    }

    /// Inserts a link, replacing any link already stored under its key.
    pub fn insert(&mut self, link: Link) {
        match self.position(&link.previous, &link.current) {
            Some(i) => self.links[i] = link,
            None => {
                self.index
                    .entry(link.previous.clone())
                    .or_default()
                    .insert(link.current.clone(), self.links.len());
                self.links.push(link);
            }
        }
    }

    pub fn get(&self, previous: &str, current: &str) -> Option<&Link> {
        self.position(previous, current).map(|i| &self.links[i])
    }

    fn get_mut(&mut self, previous: &str, current: &str) -> Option<&mut Link> {
        let i = self.position(previous, current)?;
        self.links.get_mut(i)
    }

    fn position(&self, previous: &str, current: &str) -> Option<usize> {
        self.index.get(previous)?.get(current).copied()
    }

    /// Sets `weight = occurrences / context[previous]` on every link.
    pub fn normalize(&mut self, context: &HashMap<String, u64>) {
        for link in &mut self.links {
            let total = context.get(&link.previous).copied().unwrap_or_default();
            link.weight = if total > 0 { link.occurrences as f64 / total as f64 } else { 0.0 };
        }
    }

    pub fn as_slice(&self) -> &[Link] {
        &self.links
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Link> {
        self.links.iter()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl FromIterator<Link> for LinkTable {
    fn from_iter<I: IntoIterator<Item = Link>>(iter: I) -> Self {
        let mut table = Self::default();
        for link in iter {
            table.insert(link);
        }
        table
    }
}

impl<'a> IntoIterator for &'a LinkTable {
    type Item = &'a Link;
    type IntoIter = std::slice::Iter<'a, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for LinkTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.links.serialize(serializer)
    }
}
