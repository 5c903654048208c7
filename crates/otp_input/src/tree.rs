//! Declarative layout of an OTP root.
//!
//! A root's children form a tree of [`Node`]s: exactly one hidden input,
//! any number of items nested at any depth inside groups, and free text.
//! Items do not carry indices when declared. Building the root walks the
//! tree in document order and numbers them `0..item_count` before anything
//! renders.

/// How a group lays out its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Side by side.
    #[default]
    Row,
    /// Stacked.
    Column,
}

/// Declaration of the hidden input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenInputDecl {
    /// Validation pattern; digits only when absent.
    pub pattern: Option<String>,
}

/// Declaration of a display cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDecl {
    index: Option<usize>,
    caret: Option<String>,
}

impl ItemDecl {
    /// The index assigned when the root was built.
    ///
    /// # Panics
    ///
    /// Panics if the item was never numbered, which means it is being
    /// rendered outside a built root.
    #[must_use]
    pub fn index(&self) -> usize {
        match self.index {
            Some(index) => index,
            None => panic!(
                "otp item rendered without an index; items must be declared inside an otp root"
            ),
        }
    }

    /// The index, if assigned.
    #[must_use]
    pub fn assigned_index(&self) -> Option<usize> {
        self.index
    }

    /// The caret glyph, if the item declares a caret.
    #[must_use]
    pub fn caret(&self) -> Option<&str> {
        self.caret.as_deref()
    }
}

/// A container of nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    /// Layout direction.
    pub direction: Direction,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

/// A node in a root's layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// The hidden input.
    HiddenInput(HiddenInputDecl),
    /// A display cell.
    Item(ItemDecl),
    /// A group of nodes.
    Group(Group),
    /// Literal text, such as a separator.
    Text(String),
}

impl Node {
    /// A hidden input with the default pattern.
    #[must_use]
    pub fn hidden_input() -> Self {
        Self::HiddenInput(HiddenInputDecl::default())
    }

    /// A hidden input validating against `pattern`.
    #[must_use]
    pub fn hidden_input_with_pattern(pattern: impl Into<String>) -> Self {
        Self::HiddenInput(HiddenInputDecl {
            pattern: Some(pattern.into()),
        })
    }

    /// An item without a caret.
    #[must_use]
    pub fn item() -> Self {
        Self::Item(ItemDecl::default())
    }

    /// An item drawing `glyph` as its caret.
    #[must_use]
    pub fn item_with_caret(glyph: impl Into<String>) -> Self {
        Self::Item(ItemDecl {
            index: None,
            caret: Some(glyph.into()),
        })
    }

    /// A horizontal group.
    #[must_use]
    pub fn row(children: impl IntoIterator<Item = Node>) -> Self {
        Self::Group(Group {
            direction: Direction::Row,
            children: children.into_iter().collect(),
        })
    }

    /// A vertical group.
    #[must_use]
    pub fn column(children: impl IntoIterator<Item = Node>) -> Self {
        Self::Group(Group {
            direction: Direction::Column,
            children: children.into_iter().collect(),
        })
    }

    /// Literal text.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

/// The usual layout: a hidden input followed by a row of `length` items,
/// each with a caret.
#[must_use]
pub fn standard_layout(length: usize, caret: &str) -> Vec<Node> {
    vec![
        Node::hidden_input(),
        Node::row((0..length).map(|_| Node::item_with_caret(caret))),
    ]
}

/// What numbering found in a tree.
#[derive(Debug, Default)]
pub(crate) struct Census {
    pub(crate) item_count: usize,
    pub(crate) hidden_inputs: Vec<HiddenInputDecl>,
}

/// Numbers every item in document order and collects the hidden inputs.
pub(crate) fn assign_indices(nodes: &mut [Node]) -> Census {
    let mut census = Census::default();
    number(nodes, &mut census);
    census
}

fn number(nodes: &mut [Node], census: &mut Census) {
    for node in nodes {
        match node {
            Node::Item(decl) => {
                decl.index = Some(census.item_count);
                census.item_count += 1;
            }
            Node::HiddenInput(decl) => census.hidden_inputs.push(decl.clone()),
            Node::Group(group) => number(&mut group.children, census),
            Node::Text(_) => {}
        }
    }
}

/// Items in document order.
pub(crate) fn items(nodes: &[Node]) -> Vec<&ItemDecl> {
    let mut found = Vec::new();
    collect_items(nodes, &mut found);
    found
}

fn collect_items<'a>(nodes: &'a [Node], found: &mut Vec<&'a ItemDecl>) {
    for node in nodes {
        match node {
            Node::Item(decl) => found.push(decl),
            Node::Group(group) => collect_items(&group.children, found),
            Node::HiddenInput(_) | Node::Text(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering_is_document_order() {
        let mut nodes = vec![
            Node::row([Node::item(), Node::item()]),
            Node::hidden_input(),
            Node::text("-"),
            Node::column([Node::row([Node::item()]), Node::item()]),
        ];
        let census = assign_indices(&mut nodes);
        assert_eq!(census.item_count, 4);
        assert_eq!(census.hidden_inputs.len(), 1);

        let indices: Vec<usize> = items(&nodes).iter().map(|d| d.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_standard_layout() {
        let mut nodes = standard_layout(6, "_");
        let census = assign_indices(&mut nodes);
        assert_eq!(census.item_count, 6);
        assert_eq!(census.hidden_inputs, vec![HiddenInputDecl::default()]);
        assert!(items(&nodes).iter().all(|d| d.caret() == Some("_")));
    }

    #[test]
    fn test_renumbering_is_stable() {
        let mut nodes = standard_layout(3, "|");
        assign_indices(&mut nodes);
        let census = assign_indices(&mut nodes);
        assert_eq!(census.item_count, 3);
        assert_eq!(items(&nodes)[2].assigned_index(), Some(2));
    }

    #[test]
    fn test_hidden_input_pattern_recorded() {
        let mut nodes = vec![Node::hidden_input_with_pattern("^[a-z]*$"), Node::item()];
        let census = assign_indices(&mut nodes);
        assert_eq!(census.hidden_inputs[0].pattern.as_deref(), Some("^[a-z]*$"));
    }

    #[test]
    #[should_panic(expected = "without an index")]
    fn test_unnumbered_item_panics() {
        let Node::Item(decl) = Node::item() else {
            unreachable!()
        };
        let _ = decl.index();
    }
}
