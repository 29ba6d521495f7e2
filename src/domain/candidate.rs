use std::collections::HashSet;
use std::fmt;

/// Ordered candidate items as entered by the user. Duplicates are kept;
/// empty lines never make it in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateList(Vec<String>);

impl CandidateList {
    /// Splits raw editor text into candidates, one per non-empty line.
    pub fn parse(text: &str) -> Self {
        let items = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self(items)
    }

    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            items
                .into_iter()
                .map(Into::into)
                .filter(|item: &String| !item.is_empty())
                .collect(),
        )
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Distinct items in first-seen order.
    pub fn unique(&self) -> Vec<String> {
        dedupe(&self.0)
    }

    pub fn unique_count(&self) -> usize {
        self.0.iter().collect::<HashSet<_>>().len()
    }

    /// Editor representation: one item per line.
    pub fn to_text(&self) -> String {
        self.0.join("\n")
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for CandidateList {
    fn from(items: Vec<String>) -> Self {
        Self::from_items(items)
    }
}

impl fmt::Display for CandidateList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

/// Returns the distinct items of `items`, keeping the first occurrence of each.
pub fn dedupe(items: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}
