//! About page: who we are, mission, stack.

use crate::dom::{Element, Node};

pub fn render() -> Node {
    Element::new("div")
        .class("about")
        .child(
            Element::new("section")
                .class("about-content")
                .child(Element::new("h1").text("About ConfigSite"))
                .child(Element::new("p").text(
                    "ConfigSite is a small informational site delivered as \
                     prerendered pages. It provides a solid foundation for \
                     publishing fast, maintainable marketing sites.",
                ))
                .child(Element::new("h2").text("Our Mission"))
                .child(Element::new("p").text(
                    "To keep simple sites simple: content that ships as plain \
                     documents, loads instantly, and works on any static host.",
                ))
                .child(Element::new("h2").text("Technology Stack"))
                .child(
                    Element::new("ul").children(
                        [
                            "Prerendered static pages",
                            "In-app navigation over the history API",
                            "A single embedded stylesheet",
                            "One self-contained binary",
                        ]
                        .into_iter()
                        .map(|item| Element::new("li").text(item).into()),
                    ),
                ),
        )
        .into()
}
