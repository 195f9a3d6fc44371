//! Classified element collections.
//!
//! A resolved node set is labelled by inspecting its members at resolution
//! time. Rules are checked in order and the first match wins:
//!
//! 1. every node is `<input type="radio">` sharing one `name` → [`ElementCollection::RadioGroup`]
//! 2. every node is `<option>` → [`ElementCollection::OptionList`]
//! 3. anything else → [`ElementCollection::Generic`]

use serde::{Deserialize, Serialize};

use crate::query::ElementNode;

/// Collection classification tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    /// No special structure
    Generic,
    /// Mutually exclusive radio buttons
    RadioGroup,
    /// `<select>` options
    OptionList,
}

/// An ordered set of resolved elements, tagged by structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementCollection<N> {
    /// No special structure
    Generic(Vec<N>),
    /// Radio inputs sharing one `name`
    RadioGroup {
        /// Shared `name` attribute
        name: String,
        /// Radio inputs in document order
        elements: Vec<N>,
    },
    /// `<option>` elements
    OptionList(Vec<N>),
}

impl<N: ElementNode> ElementCollection<N> {
    /// Classify `elements`
    #[must_use]
    pub fn classify(elements: Vec<N>) -> Self {
        if let Some(name) = radio_group_name(&elements) {
            return Self::RadioGroup { name, elements };
        }
        let all_options = elements
            .iter()
            .all(|e| e.tag_name().eq_ignore_ascii_case("option"));
        if all_options && !elements.is_empty() {
            return Self::OptionList(elements);
        }
        Self::Generic(elements)
    }
}

fn radio_group_name<N: ElementNode>(elements: &[N]) -> Option<String> {
    let (first, rest) = elements.split_first()?;
    let name = radio_name(first)?;
    rest.iter()
        .all(|e| radio_name(e) == Some(name))
        .then(|| name.to_string())
}

fn radio_name<N: ElementNode>(element: &N) -> Option<&str> {
    let is_radio = element.tag_name().eq_ignore_ascii_case("input")
        && element
            .attribute("type")
            .is_some_and(|t| t.eq_ignore_ascii_case("radio"));
    if is_radio {
        element.attribute("name")
    } else {
        None
    }
}

impl<N> ElementCollection<N> {
    /// The classification tag
    #[must_use]
    pub const fn kind(&self) -> CollectionKind {
        match self {
            Self::Generic(_) => CollectionKind::Generic,
            Self::RadioGroup { .. } => CollectionKind::RadioGroup,
            Self::OptionList(_) => CollectionKind::OptionList,
        }
    }

    /// Elements in document order
    #[must_use]
    pub fn elements(&self) -> &[N] {
        match self {
            Self::Generic(elements)
            | Self::RadioGroup { elements, .. }
            | Self::OptionList(elements) => elements,
        }
    }

    /// Consume the collection, returning its elements
    #[must_use]
    pub fn into_elements(self) -> Vec<N> {
        match self {
            Self::Generic(elements)
            | Self::RadioGroup { elements, .. }
            | Self::OptionList(elements) => elements,
        }
    }

    /// Number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements().len()
    }

    /// Whether the collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }

    /// Element at a zero-based index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&N> {
        self.elements().get(index)
    }

    /// Iterate over the elements
    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.elements().iter()
    }
}

impl<N> IntoIterator for ElementCollection<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_elements().into_iter()
    }
}

impl<'a, N> IntoIterator for &'a ElementCollection<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
