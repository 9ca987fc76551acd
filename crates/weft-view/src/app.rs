#![forbid(unsafe_code)]

//! The application context.
//!
//! Owns the root node, the current first responder, and the render signal.
//! All mutation (render, input dispatch, focus changes) happens on the one
//! logical thread that owns this value; concurrent input sources must
//! marshal onto it.

use std::io::{self, Write};
use std::rc::{Rc, Weak};

use weft_core::event::{ButtonState, MouseEvent, key};
use weft_core::geometry::{Point, Rect, Size};
use weft_render::AttributedBuffer;

use crate::focus;
use crate::node::{self, Node, NodeRef, NodeState, WeakNode};
use crate::state::{RenderSignal, StateCell};
use crate::view::{BuildInputs, View};

/// Identifier of the root node; the literal head of every path.
const ROOT_IDENTIFIER: &str = "root";

/// The context object driving a view hierarchy.
pub struct App {
    root_view: Box<dyn Fn() -> Box<dyn View>>,
    root: NodeRef,
    first_responder: WeakNode,
    signal: Rc<RenderSignal>,
}

impl App {
    /// Create a context over a view factory.
    ///
    /// The factory runs once per frame; state captured by the descriptions
    /// it returns (cells, bindings) is how content changes between frames.
    pub fn new(root_view: impl Fn() -> Box<dyn View> + 'static) -> Self {
        Self::with_signal(RenderSignal::new(), root_view)
    }

    /// Create a context sharing an existing render signal, so state cells
    /// created before the context can still request frames through it.
    pub fn with_signal(
        signal: Rc<RenderSignal>,
        root_view: impl Fn() -> Box<dyn View> + 'static,
    ) -> Self {
        Self {
            root_view: Box::new(root_view),
            root: Node::new(ROOT_IDENTIFIER, NodeState::Passive),
            first_responder: Weak::new(),
            signal,
        }
    }

    /// Whether a render has been requested since the last frame.
    #[must_use]
    pub fn needs_render(&self) -> bool {
        self.signal.is_dirty()
    }

    /// Install a hook invoked synchronously on every state mutation, for
    /// the driver to schedule the next frame.
    pub fn set_render_hook(&self, hook: impl Fn() + 'static) {
        self.signal.set_hook(hook);
    }

    /// Create a state cell wired to this context's render signal.
    #[must_use]
    pub fn state<T>(&self, value: T) -> StateCell<T> {
        StateCell::new(value, self.signal.clone())
    }

    /// The root of the node tree.
    #[must_use]
    pub fn root_node(&self) -> NodeRef {
        self.root.clone()
    }

    /// The node currently holding focus, if any.
    #[must_use]
    pub fn first_responder(&self) -> Option<NodeRef> {
        self.first_responder.upgrade()
    }

    /// Render one frame: rebuild the node tree from the root description
    /// and write the full styled buffer to `sink`.
    ///
    /// Child lookups during the build hit the previous frame's children;
    /// the root's child list and id set are then cleared and rebuilt from
    /// the returned nodes, dropping whatever no longer appears.
    pub fn render<W: Write>(&mut self, sink: &mut W, size: Size) -> io::Result<()> {
        let _span =
            tracing::debug_span!("render", width = size.width, height = size.height).entered();
        let mut buffer = AttributedBuffer::new(size.width, size.height);
        let view = (self.root_view)();
        let mut interpolation = view.interpolation();
        let inputs = BuildInputs {
            identifier: String::from(ROOT_IDENTIFIER),
            parent: self.root.clone(),
            available: Rect::from_size(size),
        };
        let built = interpolation.build(&inputs, &mut buffer);
        node::set_children(&self.root, built.nodes);
        self.root.borrow_mut().set_rect(Rect::from_size(size));
        buffer.write(sink)?;
        self.signal.clear();
        Ok(())
    }

    /// Dispatch a key press top-down through the node tree. Composites
    /// forward unconditionally; only the focused node acts.
    pub fn key_down(&mut self, code: u8) {
        let Some(responder) = self.first_responder.upgrade() else {
            return;
        };
        let changed = Self::dispatch_key(&self.root.clone(), &responder, code);
        if changed {
            self.signal.mark();
        }
    }

    fn dispatch_key(node: &NodeRef, responder: &NodeRef, code: u8) -> bool {
        let mut changed = false;
        if Rc::ptr_eq(node, responder) {
            changed |= Self::handle_key(node, code);
        }
        let children: Vec<NodeRef> = node.borrow().children().to_vec();
        for child in &children {
            changed |= Self::dispatch_key(child, responder, code);
        }
        changed
    }

    fn handle_key(node: &NodeRef, code: u8) -> bool {
        let mut submit: Option<(Rc<dyn Fn(&str)>, String)> = None;
        let mut activate: Option<Rc<dyn Fn()>> = None;
        let mut changed = false;
        {
            let mut n = node.borrow_mut();
            match n.state_mut() {
                NodeState::TextField { value, on_submit, .. } => match code {
                    key::BACKSPACE | key::DELETE => changed = value.pop().is_some(),
                    key::NEWLINE | key::RETURN => {
                        submit = Some((on_submit.clone(), value.clone()));
                    }
                    0x20..=0x7e => {
                        value.push(code as char);
                        changed = true;
                    }
                    _ => {}
                },
                NodeState::Button { action, .. } => match code {
                    key::SPACE | key::NEWLINE | key::RETURN => activate = Some(action.clone()),
                    _ => {}
                },
                NodeState::Passive => {}
            }
        }
        if let Some((on_submit, value)) = submit {
            on_submit(&value);
            changed = true;
        }
        if let Some(action) = activate {
            action();
            changed = true;
        }
        changed
    }

    /// Dispatch a mouse event. A press focuses and activates the topmost
    /// focusable node under the point; a release clears pressed flags.
    pub fn mouse_event(&mut self, event: MouseEvent) {
        match event.state {
            ButtonState::Pressed => {
                let point = Point::new(event.x, event.y);
                let Some(target) = Self::focusable_node_at(&self.root, point) else {
                    return;
                };
                self.make_first_responder(Some(target.clone()));
                let mut activate: Option<Rc<dyn Fn()>> = None;
                if let NodeState::Button { pressed, action, .. } =
                    target.borrow_mut().state_mut()
                {
                    *pressed = true;
                    activate = Some(action.clone());
                }
                if let Some(action) = activate {
                    action();
                }
                self.signal.mark();
            }
            ButtonState::Released => {
                let mut changed = false;
                Self::release_buttons(&self.root, &mut changed);
                if changed {
                    self.signal.mark();
                }
            }
        }
    }

    /// Topmost focusable node under `point`: later siblings draw on top,
    /// so children are searched in reverse document order, deepest first.
    fn focusable_node_at(node: &NodeRef, point: Point) -> Option<NodeRef> {
        let children: Vec<NodeRef> = node.borrow().children().to_vec();
        for child in children.iter().rev() {
            if let Some(found) = Self::focusable_node_at(child, point) {
                return Some(found);
            }
        }
        let n = node.borrow();
        if n.rect().contains(point) && n.can_become_first_responder() {
            drop(n);
            Some(node.clone())
        } else {
            None
        }
    }

    fn release_buttons(node: &NodeRef, changed: &mut bool) {
        if let NodeState::Button { pressed, .. } = node.borrow_mut().state_mut() {
            if *pressed {
                *pressed = false;
                *changed = true;
            }
        }
        let children: Vec<NodeRef> = node.borrow().children().to_vec();
        for child in &children {
            Self::release_buttons(child, changed);
        }
    }

    /// Move focus to `node`, resigning the previous holder first.
    pub fn make_first_responder(&mut self, node: Option<NodeRef>) {
        if let Some(old) = self.first_responder.upgrade() {
            let same = node.as_ref().is_some_and(|new| Rc::ptr_eq(&old, new));
            if !same {
                old.borrow_mut().resign_first_responder();
            }
        }
        match node {
            Some(new) => {
                if new.borrow_mut().become_first_responder() {
                    self.first_responder = Rc::downgrade(&new);
                } else {
                    self.first_responder = Weak::new();
                }
            }
            None => self.first_responder = Weak::new(),
        }
        self.signal.mark();
    }

    /// Advance focus to the next control in document order, wrapping
    /// around to the start after the last one.
    pub fn advance_focus(&mut self) {
        let current = self.first_responder.upgrade();
        let previous = current.clone();
        let mut try_activate = |candidate: &NodeRef| -> bool {
            if !candidate.borrow().can_become_first_responder() {
                return false;
            }
            // Resign the previous holder before the new gain hook runs.
            if let Some(prev) = &previous {
                if !Rc::ptr_eq(prev, candidate) {
                    prev.borrow_mut().resign_first_responder();
                }
            }
            candidate.borrow_mut().become_first_responder()
        };

        let found = match &current {
            None => focus::search_tree(&self.root, &mut try_activate),
            Some(current) => focus::search_after(current, &mut try_activate)
                .or_else(|| focus::search_tree(&self.root, &mut try_activate)),
        };

        if let Some(node) = found {
            tracing::debug!(identifier = %node.borrow().identifier(), "focus advanced");
            self.first_responder = Rc::downgrade(&node);
            self.signal.mark();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::Button;
    use crate::stack::VStack;
    use crate::text_field::TextField;
    use std::cell::Cell;

    fn render(app: &mut App) -> String {
        let mut out = Vec::new();
        app.render(&mut out, Size::new(20, 6)).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn two_buttons() -> App {
        App::new(|| {
            Box::new(VStack::new((
                Button::new("One", || {}),
                Button::new("Two", || {}),
            )))
        })
    }

    #[test]
    fn render_clears_dirty_flag() {
        let mut app = two_buttons();
        assert!(app.needs_render());
        render(&mut app);
        assert!(!app.needs_render());
    }

    #[test]
    fn key_without_responder_is_ignored() {
        let mut app = two_buttons();
        render(&mut app);
        app.key_down(b'x');
        assert!(!app.needs_render());
    }

    #[test]
    fn typed_keys_reach_the_focused_field() {
        let submitted = Rc::new(Cell::new(false));
        let seen = submitted.clone();
        let mut app = App::new(move || {
            let seen = seen.clone();
            Box::new(TextField::new(move |text| {
                assert_eq!(text, "hi");
                seen.set(true);
            }))
        });
        render(&mut app);
        app.advance_focus();
        app.key_down(b'h');
        app.key_down(b'i');
        app.key_down(key::RETURN);
        assert!(submitted.get());

        // Submit keeps the buffer content.
        let responder = app.first_responder().unwrap();
        if let NodeState::TextField { value, .. } = responder.borrow().state() {
            assert_eq!(value, "hi");
        } else {
            panic!("responder is not a text field");
        }
    }

    #[test]
    fn backspace_edits_the_buffer() {
        let mut app = App::new(|| Box::new(TextField::new(|_| {})));
        render(&mut app);
        app.advance_focus();
        app.key_down(b'a');
        app.key_down(b'b');
        app.key_down(key::DELETE);
        let responder = app.first_responder().unwrap();
        if let NodeState::TextField { value, .. } = responder.borrow().state() {
            assert_eq!(value, "a");
        } else {
            panic!("responder is not a text field");
        }
    }

    #[test]
    fn mouse_press_focuses_and_fires_button() {
        let fired = Rc::new(Cell::new(0));
        let count = fired.clone();
        let mut app = App::new(move || {
            let count = count.clone();
            Box::new(VStack::new((
                Button::new("One", move || count.set(count.get() + 1)),
                Button::new("Two", || {}),
            )))
        });
        render(&mut app);
        app.mouse_event(MouseEvent::new(1, 0, ButtonState::Pressed));
        assert_eq!(fired.get(), 1);
        let responder = app.first_responder().unwrap();
        assert_eq!(responder.borrow().identifier(), "root0");
        assert!(responder.borrow().is_focused());

        app.mouse_event(MouseEvent::new(1, 0, ButtonState::Released));
        if let NodeState::Button { pressed, .. } = responder.borrow().state() {
            assert!(!pressed);
        }
    }

    #[test]
    fn mouse_press_outside_controls_is_ignored() {
        let mut app = two_buttons();
        render(&mut app);
        app.mouse_event(MouseEvent::new(19, 5, ButtonState::Pressed));
        assert!(app.first_responder().is_none());
    }
}
