use std::fmt;

/// One member of a produced value sequence.
///
/// An item carries the canonical string representation of its value and the
/// qualified name of its type as reported by the engine under test (for
/// instance `xs:integer`), or a node-kind tag for non-atomic nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    lexical_form: String,
    type_name: String,
}

impl Item {
    pub fn new(lexical_form: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            lexical_form: lexical_form.into(),
            type_name: type_name.into(),
        }
    }

    pub fn lexical_form(&self) -> &str {
        &self.lexical_form
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.lexical_form, self.type_name)
    }
}

// the engine's default sequence-to-string convention: items joined by a
// single space
pub(crate) fn string_value(items: &[Item]) -> String {
    items
        .iter()
        .map(|item| item.lexical_form())
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn normalize_space(s: &str) -> String {
    s.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_value_joins_with_single_space() {
        let items = vec![
            Item::new("1", "xs:integer"),
            Item::new("2", "xs:integer"),
            Item::new("3", "xs:integer"),
        ];
        assert_eq!(string_value(&items), "1 2 3");
    }

    #[test]
    fn string_value_of_empty_sequence_is_empty() {
        assert_eq!(string_value(&[]), "");
    }

    #[test]
    fn normalize_space_collapses_and_trims() {
        assert_eq!(normalize_space("  a \t b\n\nc "), "a b c");
    }
}
