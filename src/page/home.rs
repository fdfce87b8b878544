//! Home page: hero banner plus feature grid.

use crate::dom::{Element, Node};

pub fn render() -> Node {
    Element::new("div")
        .class("home")
        .child(
            Element::new("section")
                .class("hero")
                .child(Element::new("h1").text("Welcome to ConfigSite"))
                .child(Element::new("p").text("Your modern web application solution")),
        )
        .child(
            Element::new("section")
                .class("features")
                .child(Element::new("h2").text("Features"))
                .child(
                    Element::new("div")
                        .class("feature-grid")
                        .child(feature_card(
                            "Modern Design",
                            "Clean and responsive interface",
                        ))
                        .child(feature_card(
                            "Static Delivery",
                            "Every page is prerendered and served as plain files",
                        ))
                        .child(feature_card(
                            "Instant Navigation",
                            "In-app routing without full page reloads",
                        )),
                ),
        )
        .into()
}

fn feature_card(title: &'static str, blurb: &'static str) -> Element {
    Element::new("div")
        .class("feature-card")
        .child(Element::new("h3").text(title))
        .child(Element::new("p").text(blurb))
}
