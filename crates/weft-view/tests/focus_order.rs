//! Tab-order traversal across a rendered tree.

use std::rc::Rc;

use weft_core::geometry::Size;
use weft_view::{App, Button, Spacer, Text, VStack};

fn render(app: &mut App) {
    let mut out = Vec::new();
    app.render(&mut out, Size::new(24, 9)).unwrap();
}

fn responder_id(app: &App) -> String {
    app.first_responder()
        .expect("a responder should be active")
        .borrow()
        .identifier()
        .to_string()
}

#[test]
fn advance_walks_document_order_and_wraps() {
    let mut app = App::new(|| {
        Box::new(VStack::new((
            Button::new("A", || {}),
            Button::new("B", || {}),
            Button::new("C", || {}),
        )))
    });
    render(&mut app);

    app.advance_focus();
    assert_eq!(responder_id(&app), "root0");
    app.advance_focus();
    assert_eq!(responder_id(&app), "root1");
    app.advance_focus();
    assert_eq!(responder_id(&app), "root2");
    // Fourth advance wraps back to the first control.
    app.advance_focus();
    assert_eq!(responder_id(&app), "root0");
}

#[test]
fn advance_skips_non_focusable_leaves() {
    let mut app = App::new(|| {
        Box::new(VStack::new((
            Text::new("label"),
            Button::new("A", || {}),
            Spacer::new(),
            Button::new("B", || {}),
        )))
    });
    render(&mut app);

    app.advance_focus();
    assert_eq!(responder_id(&app), "root1");
    app.advance_focus();
    assert_eq!(responder_id(&app), "root3");
    app.advance_focus();
    assert_eq!(responder_id(&app), "root1");
}

#[test]
fn advancing_resigns_the_previous_responder() {
    let mut app = App::new(|| {
        Box::new(VStack::new((
            Button::new("A", || {}),
            Button::new("B", || {}),
        )))
    });
    render(&mut app);

    app.advance_focus();
    let first = app.first_responder().unwrap();
    assert!(first.borrow().is_focused());

    app.advance_focus();
    let second = app.first_responder().unwrap();
    assert!(!Rc::ptr_eq(&first, &second));
    assert!(!first.borrow().is_focused());
    assert!(second.borrow().is_focused());
}

#[test]
fn sole_control_keeps_focus_on_wrap() {
    let mut app = App::new(|| Box::new(Button::new("only", || {})));
    render(&mut app);

    app.advance_focus();
    let responder = app.first_responder().unwrap();
    app.advance_focus();
    let again = app.first_responder().unwrap();
    assert!(Rc::ptr_eq(&responder, &again));
    assert!(again.borrow().is_focused());
}

#[test]
fn advance_on_empty_tree_is_a_no_op() {
    let mut app = App::new(|| Box::new(Text::new("static")));
    render(&mut app);
    app.advance_focus();
    assert!(app.first_responder().is_none());
}
