//! Fallback page for unmatched paths.

use crate::dom::{Element, Node};

pub fn render() -> Node {
    Element::new("div")
        .class("not-found")
        .child(
            Element::new("section")
                .child(Element::new("h1").text("Page Not Found"))
                .child(Element::new("p").text(
                    "The address you followed does not match any page on this site.",
                ))
                .child(
                    Element::new("p")
                        .child(Element::new("a").attr("href", "/").text("Back to the home page")),
                ),
        )
        .into()
}
