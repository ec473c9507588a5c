//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A full-width container for your content.
/// Wraps content in a `<main class="container-fluid">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container-fluid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

#[derive(Props, PartialEq, Clone)]
pub struct AccordionProps {
    title: String,
    #[props(default = false)]
    open: bool,
    children: Element,
}

/// An accordion for showing/hiding content, using the <details> element.
pub fn Accordion(props: AccordionProps) -> Element {
    rsx! {
        details {
            open: props.open,
            summary { "{props.title}" }
            {props.children}
        }
    }
}

//=============================================================================
// Feedback Components
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct SpinnerProps {
    #[props(default)]
    label: Option<String>,
}

/// Pico's busy indicator. The label is read by screen readers and shown
/// next to the spinner.
pub fn Spinner(props: SpinnerProps) -> Element {
    let label = props.label.unwrap_or_default();
    rsx! {
        span {
            class: "spinner",
            "aria-busy": "true",
            "{label}"
        }
    }
}
