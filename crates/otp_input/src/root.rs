//! The OTP root: owns the shared state, wires cells to the hidden input and
//! notifies the host of value changes.
//!
//! # Example
//!
//! ```rust
//! use otp_input::{InputEvent, KeyEvent, Otp};
//!
//! let mut otp = Otp::with_length(4).unwrap();
//! otp.init();
//! otp.update(InputEvent::Focus);
//! for c in "1234".chars() {
//!     otp.update(InputEvent::KeyDown(KeyEvent::from_char(c)));
//! }
//! assert_eq!(otp.value(), "1234");
//! assert!(otp.is_complete());
//! ```

use std::fmt;

use tracing::{debug, warn};

use crate::caret::CaretMode;
use crate::cell::Cell;
use crate::controller::HiddenInput;
use crate::error::{Error, Result};
use crate::event::InputEvent;
use crate::markup::{Content, Element};
use crate::pattern::Pattern;
use crate::signal::Signal;
use crate::state::{OtpState, SelectionPhase, SharedState};
use crate::style::{Styles, join_horizontal};
use crate::tree::{self, Direction, Node};

/// Called with the new value after every change except the initial one.
pub type ChangeFn = Box<dyn FnMut(&str) + Send>;
/// Called whenever the value's length reaches the item count.
pub type CompleteFn = Box<dyn FnMut() + Send>;

/// Builder for an [`Otp`].
pub struct OtpBuilder {
    children: Vec<Node>,
    value: String,
    bound: Option<Signal<String>>,
    disabled: bool,
    shift_password_managers: bool,
    on_change: Option<ChangeFn>,
    on_complete: Option<CompleteFn>,
    styles: Styles,
    caret_mode: CaretMode,
}

impl Default for OtpBuilder {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            value: String::new(),
            bound: None,
            disabled: false,
            shift_password_managers: true,
            on_change: None,
            on_complete: None,
            styles: Styles::default(),
            caret_mode: CaretMode::Blink,
        }
    }
}

impl fmt::Debug for OtpBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OtpBuilder")
            .field("children", &self.children)
            .field("value", &self.value)
            .field("bound", &self.bound.is_some())
            .field("disabled", &self.disabled)
            .field("shift_password_managers", &self.shift_password_managers)
            .field("caret_mode", &self.caret_mode)
            .finish_non_exhaustive()
    }
}

impl OtpBuilder {
    /// Appends a child node.
    #[must_use]
    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Appends child nodes.
    #[must_use]
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Initial value, used when no signal is bound.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Binds the value to a caller-owned signal.
    ///
    /// The component adopts the signal as its value storage: edits are
    /// written to it, and writes by the caller are picked up on the next
    /// [`Otp::update`] or [`Otp::sync`]. A bound signal overrides
    /// [`value`](Self::value).
    #[must_use]
    pub fn bind(mut self, signal: Signal<String>) -> Self {
        self.bound = Some(signal);
        self
    }

    /// Starts disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Marks the hidden input for password-manager badge offset.
    #[must_use]
    pub fn shift_password_managers(mut self, shift: bool) -> Self {
        self.shift_password_managers = shift;
        self
    }

    /// Sets the change callback.
    #[must_use]
    pub fn on_change(mut self, f: impl FnMut(&str) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Sets the completion callback.
    #[must_use]
    pub fn on_complete(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Sets terminal styles.
    #[must_use]
    pub fn styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the caret drawing mode.
    #[must_use]
    pub fn caret_mode(mut self, mode: CaretMode) -> Self {
        self.caret_mode = mode;
        self
    }

    /// Numbers the items and builds the component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoItems`] if no items are declared,
    /// [`Error::MissingHiddenInput`] or [`Error::DuplicateHiddenInput`]
    /// unless exactly one hidden input is declared, and
    /// [`Error::InvalidPattern`] if its pattern does not compile.
    pub fn build(self) -> Result<Otp> {
        let mut children = self.children;
        let census = tree::assign_indices(&mut children);

        let item_count = census.item_count;
        if item_count == 0 {
            return Err(Error::NoItems);
        }
        let decl = match census.hidden_inputs.as_slice() {
            [] => return Err(Error::MissingHiddenInput),
            [decl] => decl,
            many => return Err(Error::DuplicateHiddenInput(many.len())),
        };
        let pattern = match &decl.pattern {
            Some(p) => Pattern::new(p)?,
            None => Pattern::default(),
        };

        let value = self.bound.unwrap_or_else(|| Signal::new(self.value));
        let len = value.with(|v| v.chars().count());
        if len > item_count {
            let truncated: String = value.with(|v| v.chars().take(item_count).collect());
            warn!(len, item_count, "initial otp value longer than item count; truncating");
            value.set(truncated);
        }
        if !value.with(|v| pattern.is_match(v)) {
            warn!(pattern = %pattern, "initial otp value does not match pattern");
        }

        let state = SharedState::new(OtpState::new(value, item_count, self.disabled));
        let input = HiddenInput::new(state.clone(), pattern, self.shift_password_managers);
        let cells = tree::items(&children)
            .into_iter()
            .map(|decl| Cell::new(decl.index(), state.clone(), decl.caret()))
            .collect();

        debug!(
            item_count,
            pattern = %input.pattern(),
            disabled = self.disabled,
            "built otp input"
        );

        Ok(Otp {
            children,
            state,
            input,
            cells,
            on_change: self.on_change,
            on_complete: self.on_complete,
            styles: self.styles,
            caret_mode: self.caret_mode,
            blink_on: true,
            mounted: false,
            seen_version: 0,
        })
    }
}

/// A segmented one-time-code input.
///
/// Drive it with [`update`](Self::update) and draw it with
/// [`view`](Self::view); [`markup`](Self::markup) describes the same state
/// as an element tree.
pub struct Otp {
    children: Vec<Node>,
    state: SharedState,
    input: HiddenInput,
    cells: Vec<Cell>,
    on_change: Option<ChangeFn>,
    on_complete: Option<CompleteFn>,
    styles: Styles,
    caret_mode: CaretMode,
    blink_on: bool,
    mounted: bool,
    seen_version: u64,
}

impl fmt::Debug for Otp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Otp")
            .field("value", &self.value())
            .field("item_count", &self.item_count())
            .field("focused", &self.is_focused())
            .field("disabled", &self.is_disabled())
            .field("phase", &self.phase())
            .field("caret_mode", &self.caret_mode)
            .finish_non_exhaustive()
    }
}

impl Otp {
    /// Starts building an input.
    #[must_use]
    pub fn builder() -> OtpBuilder {
        OtpBuilder::default()
    }

    /// An input with the standard layout: `length` cells in a row, each with
    /// a `|` caret.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoItems`] if `length` is zero.
    pub fn with_length(length: usize) -> Result<Self> {
        Self::builder()
            .children(tree::standard_layout(length, "|"))
            .build()
    }

    /// Mounts the component: records the initial value without reporting a
    /// change, and reports completion if it is already full.
    ///
    /// Calling it again is a no-op; [`update`](Self::update) mounts on
    /// first use.
    pub fn init(&mut self) {
        if !self.mounted {
            self.track_value();
        }
    }

    /// Handles one event on the hidden input.
    pub fn update(&mut self, event: InputEvent) {
        self.init();
        if matches!(
            event,
            InputEvent::Focus | InputEvent::KeyDown(_) | InputEvent::Paste(_) | InputEvent::Click(_)
        ) {
            self.blink_on = true;
        }
        self.input.handle(&event);
        self.sync();
    }

    /// Picks up writes to the value signal made outside the component and
    /// fires callbacks for any change not yet reported.
    pub fn sync(&mut self) {
        self.init();
        self.input.sync_external();
        self.track_value();
    }

    fn track_value(&mut self) {
        let (version, value, item_count) = {
            let state = self.state.read();
            (state.value().version(), state.value().get(), state.item_count())
        };
        if self.mounted && version == self.seen_version {
            return;
        }
        self.seen_version = version;

        if self.mounted {
            debug!(%value, "otp value changed");
            if let Some(on_change) = self.on_change.as_mut() {
                on_change(&value);
            }
        }
        self.mounted = true;

        if value.chars().count() == item_count {
            debug!(%value, "otp value complete");
            if let Some(on_complete) = self.on_complete.as_mut() {
                on_complete();
            }
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> String {
        self.state.read().value().get()
    }

    /// Replaces the value, as a write to the bound signal would.
    pub fn set_value(&mut self, value: &str) {
        self.state.read().value().set(value.to_string());
        self.sync();
    }

    /// Whether the current value matches the validation pattern.
    ///
    /// Typed and pasted input is always checked, but initial, bound and
    /// programmatic values are adopted as given.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.input.pattern().is_match(&self.value())
    }

    /// The signal backing the value.
    #[must_use]
    pub fn value_signal(&self) -> Signal<String> {
        self.state.read().value().clone()
    }

    /// Whether every cell holds a character.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let state = self.state.read();
        state.value_len() == state.item_count()
    }

    /// Number of cells.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.state.read().item_count()
    }

    /// Whether the hidden input has focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.state.read().is_focused()
    }

    /// Whether input is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.state.read().is_disabled()
    }

    /// Enables or disables input; disabling blurs a focused input.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.input.set_disabled(disabled);
    }

    /// Index of the current cell, if focused.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.state.read().current_index()
    }

    /// Projected selection `[start, end)`, if focused.
    #[must_use]
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.state.read().selection()
    }

    /// Selection phase.
    #[must_use]
    pub fn phase(&self) -> SelectionPhase {
        self.state.read().phase()
    }

    /// Cells in index order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell `index`.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Shared state handle.
    #[must_use]
    pub fn state(&self) -> &SharedState {
        &self.state
    }

    /// The hidden input.
    #[must_use]
    pub fn hidden_input(&self) -> &HiddenInput {
        &self.input
    }

    /// Caret drawing mode.
    #[must_use]
    pub fn caret_mode(&self) -> CaretMode {
        self.caret_mode
    }

    /// Sets the caret drawing mode.
    pub fn set_caret_mode(&mut self, mode: CaretMode) {
        self.caret_mode = mode;
        self.blink_on = true;
    }

    /// Toggles the blinking caret; call on a timer.
    pub fn blink(&mut self) {
        if self.caret_mode == CaretMode::Blink {
            self.blink_on = !self.blink_on;
        }
    }

    /// Whether a blinking caret is in its visible phase.
    #[must_use]
    pub fn is_blink_on(&self) -> bool {
        self.blink_on
    }

    /// Terminal styles.
    #[must_use]
    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// Replaces the terminal styles.
    pub fn set_styles(&mut self, styles: Styles) {
        self.styles = styles;
    }

    /// Renders the component for the terminal.
    #[must_use]
    pub fn view(&self) -> String {
        self.view_nodes(&self.children, Direction::Column)
    }

    fn view_nodes(&self, nodes: &[Node], direction: Direction) -> String {
        let parts: Vec<String> = nodes
            .iter()
            .filter_map(|node| self.view_node(node))
            .collect();
        match direction {
            Direction::Row => join_horizontal(&parts, self.styles.gap),
            Direction::Column => parts.join("\n"),
        }
    }

    fn view_node(&self, node: &Node) -> Option<String> {
        match node {
            Node::HiddenInput(_) => None,
            Node::Item(decl) => self
                .cells
                .get(decl.index())
                .map(|cell| cell.view(&self.styles, self.caret_mode, self.blink_on)),
            Node::Group(group) => Some(self.view_nodes(&group.children, group.direction)),
            Node::Text(text) => Some(text.clone()),
        }
    }

    /// Describes the component as markup.
    #[must_use]
    pub fn markup(&self) -> Element {
        let root = Element::new("div")
            .flag("data-qds-otp-root", true)
            .flag("data-disabled", self.is_disabled());
        self.children
            .iter()
            .fold(root, |el, node| el.content(self.node_markup(node)))
    }

    fn node_markup(&self, node: &Node) -> Content {
        match node {
            Node::HiddenInput(decl) => {
                Content::Element(self.hidden_input_markup(decl.pattern.as_deref()))
            }
            Node::Item(decl) => {
                let index = decl.index();
                Content::Element(match self.cells.get(index) {
                    Some(cell) => cell.element(),
                    None => Element::new("div").attr("data-qds-otp-item", index.to_string()),
                })
            }
            Node::Group(group) => Content::Element(
                group
                    .children
                    .iter()
                    .fold(Element::new("div"), |el, child| el.content(self.node_markup(child))),
            ),
            Node::Text(text) => Content::Text(text.clone()),
        }
    }

    fn hidden_input_markup(&self, pattern: Option<&str>) -> Element {
        let native = self.input.native();
        let mut el = Element::new("input")
            .flag("data-qds-otp-hidden-input", true)
            .flag("data-shift", self.input.shift_password_managers())
            .attr("inputmode", "numeric");
        if let Some(pattern) = pattern {
            el = el.attr("pattern", pattern);
        }
        el.attr("maxlength", native.max_length().to_string())
            .attr("value", native.value())
            .flag("disabled", native.is_disabled())
    }
}
