#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic, missing_docs, unreachable_pub)]

pub mod button;
pub mod chat_bubble;
pub mod checkbox;
pub mod combobox;
pub mod input;
mod paint;
pub mod pin_input;
pub mod size;
pub mod state;
pub mod switch;
pub mod tag;
pub mod time_picker;

pub use size::{ComponentSize, SizeMetrics};
pub use state::{InteractionState, VisualState, NO_RING};

/// Returns the names of the components this crate resolves styles for.
#[must_use]
pub fn component_catalog() -> Vec<&'static str> {
    vec![
        "button",
        "chat-bubble",
        "checkbox",
        "combobox",
        "input",
        "pin-input",
        "switch",
        "tag",
        "time-picker",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_sorted_and_unique() {
        let catalog = component_catalog();
        let mut sorted = catalog.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(catalog, sorted);
        assert_eq!(catalog.len(), 9);
    }
}
