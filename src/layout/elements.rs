//! Static page chrome: the elements the layout is made of.

use strum::IntoEnumIterator;

/// Prefix shared by every element class name.
pub const CLASS_PREFIX: &str = "game--";

/// Role an element plays on the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ElementRole {
    /// Page title.
    Head,
    /// Board size input.
    Count,
    /// Start/reset button.
    Start,
    /// Status line.
    Status,
    /// Board container.
    Container,
}

/// What kind of widget an element is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Plain text block.
    Block,
    /// Editable text field.
    Input,
    /// Pressable button.
    Button,
}

/// One element of the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Role of the element.
    pub role: ElementRole,
    /// Widget kind.
    pub kind: ElementKind,
    /// Initial text content.
    pub text: Option<&'static str>,
    /// Placeholder shown while an input is empty.
    pub placeholder: Option<&'static str>,
}

impl Element {
    /// Class name of the element, e.g. `game--status`.
    pub fn class_name(&self) -> String {
        format!("{}{}", CLASS_PREFIX, self.role)
    }
}

/// Builds the element list in display order.
pub fn element_list() -> Vec<Element> {
    ElementRole::iter()
        .map(|role| match role {
            ElementRole::Head => Element {
                role,
                kind: ElementKind::Block,
                text: Some("Tic Tac Toe Game"),
                placeholder: None,
            },
            ElementRole::Count => Element {
                role,
                kind: ElementKind::Input,
                text: None,
                placeholder: Some("Set counter"),
            },
            ElementRole::Start => Element {
                role,
                kind: ElementKind::Button,
                text: Some("Start"),
                placeholder: None,
            },
            ElementRole::Status | ElementRole::Container => Element {
                role,
                kind: ElementKind::Block,
                text: None,
                placeholder: None,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names_in_order() {
        let names: Vec<String> = element_list().iter().map(Element::class_name).collect();
        assert_eq!(
            names,
            ["game--head", "game--count", "game--start", "game--status", "game--container"]
        );
    }

    #[test]
    fn test_button_and_input() {
        let elements = element_list();
        assert_eq!(elements[1].kind, ElementKind::Input);
        assert_eq!(elements[1].placeholder, Some("Set counter"));
        assert_eq!(elements[2].kind, ElementKind::Button);
        assert_eq!(elements[2].text, Some("Start"));
    }
}
