#![forbid(unsafe_code)]

//! The persistent node tree.
//!
//! Concrete nodes are the only mutable, frame-surviving values in the
//! engine. A node is created the first time its identifier appears under a
//! parent, reused on every later frame where the same identifier recurs at
//! the same structural position, and dropped with its subtree when the
//! identifier no longer appears among the parent's children. The parent's
//! child list and id set are rebuilt from scratch each frame, so
//! disappearance is automatic.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use rustc_hash::FxHashSet;
use weft_core::geometry::Rect;

/// Shared handle to a node.
pub type NodeRef = Rc<RefCell<Node>>;

/// Non-owning handle to a node, used for parent back-references and the
/// current first responder.
pub type WeakNode = Weak<RefCell<Node>>;

/// Node-specific mutable state. This is exactly what survives
/// reconciliation.
pub enum NodeState {
    /// No state; the node only marks a position in the tree.
    Passive,
    /// A press-activated control.
    Button {
        /// Currently held down (mouse press not yet released).
        pressed: bool,
        /// Currently the first responder.
        focused: bool,
        /// Fired on activation.
        action: Rc<dyn Fn()>,
    },
    /// An editable single-line text buffer.
    TextField {
        /// Current contents.
        value: String,
        /// Currently the first responder.
        focused: bool,
        /// Fired with the contents when Enter is pressed.
        on_submit: Rc<dyn Fn(&str)>,
    },
}

impl fmt::Debug for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passive => write!(f, "Passive"),
            Self::Button { pressed, focused, .. } => f
                .debug_struct("Button")
                .field("pressed", pressed)
                .field("focused", focused)
                .finish_non_exhaustive(),
            Self::TextField { value, focused, .. } => f
                .debug_struct("TextField")
                .field("value", value)
                .field("focused", focused)
                .finish_non_exhaustive(),
        }
    }
}

/// A concrete node: stable identifier, ordered children with a parallel id
/// set, a non-owning parent back-reference, the last-computed rectangle,
/// and node-specific state.
#[derive(Debug)]
pub struct Node {
    identifier: String,
    children: Vec<NodeRef>,
    child_ids: FxHashSet<String>,
    parent: WeakNode,
    rect: Rect,
    state: NodeState,
}

impl Node {
    /// Create a detached node.
    #[must_use]
    pub fn new(identifier: impl Into<String>, state: NodeState) -> NodeRef {
        Rc::new(RefCell::new(Self {
            identifier: identifier.into(),
            children: Vec::new(),
            child_ids: FxHashSet::default(),
            parent: Weak::new(),
            rect: Rect::NULL,
            state,
        }))
    }

    /// The node's positional identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The node's children, in document order.
    #[must_use]
    pub fn children(&self) -> &[NodeRef] {
        &self.children
    }

    /// Non-owning handle to the parent.
    #[must_use]
    pub fn parent(&self) -> WeakNode {
        self.parent.clone()
    }

    /// The rectangle computed for this node on the last build.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Record the rectangle computed for this node.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Shared access to the node state.
    #[must_use]
    pub const fn state(&self) -> &NodeState {
        &self.state
    }

    /// Mutable access to the node state.
    pub fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    /// Look up a direct child by identifier.
    ///
    /// The id set answers existence in O(1); a missing child is not an
    /// error, it is the signal to create a new node.
    #[must_use]
    pub fn child_with_id(&self, identifier: &str) -> Option<NodeRef> {
        if !self.child_ids.contains(identifier) {
            return None;
        }
        self.children
            .iter()
            .find(|child| child.borrow().identifier == identifier)
            .cloned()
    }

    /// Whether this node can receive focus. False by default; stateful
    /// leaves opt in.
    #[must_use]
    pub const fn can_become_first_responder(&self) -> bool {
        matches!(
            self.state,
            NodeState::Button { .. } | NodeState::TextField { .. }
        )
    }

    /// Accept focus. The default is a no-op accept; stateful leaves flip
    /// their internal flag.
    pub fn become_first_responder(&mut self) -> bool {
        match &mut self.state {
            NodeState::Passive => true,
            NodeState::Button { focused, .. } | NodeState::TextField { focused, .. } => {
                *focused = true;
                true
            }
        }
    }

    /// Give up focus, clearing the internal flag.
    pub fn resign_first_responder(&mut self) {
        match &mut self.state {
            NodeState::Passive => {}
            NodeState::Button { focused, .. } | NodeState::TextField { focused, .. } => {
                *focused = false;
            }
        }
    }

    /// Whether this node currently holds focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        matches!(
            self.state,
            NodeState::Button { focused: true, .. } | NodeState::TextField { focused: true, .. }
        )
    }
}

/// Attach `child` under `parent`, registering its identifier.
pub fn append_child(parent: &NodeRef, child: NodeRef) {
    child.borrow_mut().parent = Rc::downgrade(parent);
    let mut node = parent.borrow_mut();
    let identifier = child.borrow().identifier.clone();
    debug_assert!(
        !node.child_ids.contains(&identifier),
        "duplicate child identifier {identifier}"
    );
    node.child_ids.insert(identifier);
    node.children.push(child);
}

/// Clear the parent's child list and id set, then re-add `nodes` in order.
///
/// Children present last frame but absent from `nodes` are dropped here
/// along with their subtrees and state.
pub fn set_children(parent: &NodeRef, nodes: Vec<NodeRef>) {
    {
        let mut node = parent.borrow_mut();
        node.children.clear();
        node.child_ids.clear();
    }
    for child in nodes {
        let identifier = child.borrow().identifier.clone();
        let mut node = parent.borrow_mut();
        if node.child_ids.contains(&identifier) {
            debug_assert!(false, "duplicate child identifier {identifier}");
            continue;
        }
        node.child_ids.insert(identifier);
        drop(node);
        child.borrow_mut().parent = Rc::downgrade(parent);
        parent.borrow_mut().children.push(child);
    }
}

/// Look up the parent's child by identifier, creating and attaching a new
/// node when absent. This is the only place nodes are created.
pub fn resolve_child(
    parent: &NodeRef,
    identifier: &str,
    state: impl FnOnce() -> NodeState,
) -> NodeRef {
    if let Some(existing) = parent.borrow().child_with_id(identifier) {
        return existing;
    }
    tracing::trace!(identifier, "node created");
    let node = Node::new(identifier, state());
    append_child(parent, node.clone());
    node
}
