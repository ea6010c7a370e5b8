use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Section titles whose body is always a list in generated reports.
pub const DEFAULT_LIST_SECTIONS: [&str; 7] = [
    "Executive Summary",
    "Key Points",
    "Timeline Highlights",
    "Decisions",
    "Action Items",
    "Key Topics",
    "Risks",
];

static BUILTIN: LazyLock<ListSections> = LazyLock::new(ListSections::default);

/// The vocabulary of list-section titles.
///
/// Under a level 1 or 2 heading whose text is in this set, plain lines are
/// read as list items until the next blank line or heading. Matching is an
/// exact, case-sensitive comparison against the heading text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSections {
    titles: BTreeSet<String>,
}

impl ListSections {
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }

    /// An empty vocabulary: no implicit list items anywhere.
    #[must_use]
    pub fn none() -> Self {
        Self {
            titles: BTreeSet::new(),
        }
    }

    /// Shared instance of [`DEFAULT_LIST_SECTIONS`].
    #[must_use]
    pub fn builtin() -> &'static ListSections {
        &BUILTIN
    }

    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.titles.contains(title)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

impl Default for ListSections {
    fn default() -> Self {
        Self::new(DEFAULT_LIST_SECTIONS)
    }
}

impl<S: Into<String>> FromIterator<S> for ListSections {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
