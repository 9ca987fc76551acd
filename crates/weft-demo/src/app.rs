#![forbid(unsafe_code)]

//! The showcase view hierarchy.

use weft::prelude::*;
use weft::view::{RenderSignal, View};

/// Assemble the demo application.
pub fn build() -> App {
    let signal = RenderSignal::new();
    let count = StateCell::new(0i32, signal.clone());
    let name = StateCell::new(String::new(), signal.clone());

    let count_up = count.clone();
    let count_down = count.clone();
    let submitted = name.clone();
    let count_label = count.clone();
    let greeting = name.clone();

    App::with_signal(signal, move || {
        let count_up = count_up.clone();
        let count_down = count_down.clone();
        let submitted = submitted.clone();

        let header = Text::new("weft showcase").bold().foreground(Color::Cyan);
        let field = TextField::new(move |text| submitted.set(text.to_string()))
            .placeholder("type a name, press enter");
        let plus = Button::new("[ + ]", move || count_up.update(|n| *n += 1));
        let minus = Button::new("[ - ]", move || count_down.update(|n| *n -= 1));
        let counter = Text::new(format!("count: {}", count_label.get()))
            .foreground(Color::Yellow);

        let greeting = if greeting.with(|name| name.is_empty()) {
            Either::B(Text::new("tab cycles focus, esc quits").attributes(StyleFlags::DIM))
        } else {
            Either::A(
                Text::new(format!("hello, {}!", greeting.get())).foreground(Color::Green),
            )
        };

        Box::new(
            VStack::new((header, field, plus, minus, counter, greeting))
                .padding(1)
                .bordered(BorderGlyphs::LINE),
        ) as Box<dyn View>
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft::core::geometry::Size;

    #[test]
    fn first_frame_renders_chrome_and_placeholder() {
        let mut app = build();
        let mut out = Vec::new();
        app.render(&mut out, Size::new(40, 14)).unwrap();
        let frame = String::from_utf8(out).unwrap();
        assert!(frame.contains("weft showcase"));
        assert!(frame.contains("type a name"));
        assert!(frame.contains("count: 0"));
    }

    #[test]
    fn buttons_mutate_the_counter() {
        let mut app = build();
        let mut out = Vec::new();
        app.render(&mut out, Size::new(40, 14)).unwrap();

        // Focus order: field, then [ + ].
        app.advance_focus();
        app.advance_focus();
        app.key_down(0x20);
        assert!(app.needs_render());

        let mut out = Vec::new();
        app.render(&mut out, Size::new(40, 14)).unwrap();
        let frame = String::from_utf8(out).unwrap();
        assert!(frame.contains("count: 1"));
    }
}
