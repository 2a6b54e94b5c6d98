//! Class-name composition for primitive and control markup.

/// Joins the present, non-blank class fragments with single spaces.
///
/// Fragments keep their order. Whitespace inside a fragment is collapsed so
/// callers can pass multi-class strings such as `"ui-button ui-button-large"`.
pub fn class_names<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    parts
        .into_iter()
        .flatten()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Appends an optional caller-supplied layout class to a primitive's base class.
pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    class_names([Some(base), layout_class])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_present_parts_in_order() {
        assert_eq!(
            class_names([Some("ui-button"), None, Some("ui-button-large")]),
            "ui-button ui-button-large"
        );
    }

    #[test]
    fn skips_blank_parts_and_collapses_whitespace() {
        assert_eq!(class_names([Some("  a   b "), Some(""), Some(" "), Some("c")]), "a b c");
        assert_eq!(class_names(std::iter::empty()), "");
    }

    #[test]
    fn layout_class_is_optional() {
        assert_eq!(merge_layout_class("ui-spinner", None), "ui-spinner");
        assert_eq!(merge_layout_class("ui-spinner", Some("")), "ui-spinner");
        assert_eq!(
            merge_layout_class("ui-spinner", Some("chat-spinner")),
            "ui-spinner chat-spinner"
        );
    }
}
