//! Unit tests for the traversal engine.

use super::*;
use rstest::rstest;
use std::collections::HashMap;

struct Inner {
    label: String,
    hidden: u8,
}

impl Walk for Inner {
    fn node(&self) -> Node<'_> {
        Node::Struct(vec![
            Field::new("label", FieldAnnotation::new("label"), &self.label),
            Field::new("hidden", FieldAnnotation::EXCLUDED, &self.hidden),
        ])
    }
}

struct Outer {
    inner: Option<Inner>,
    items: Vec<Inner>,
    named: HashMap<String, Inner>,
}

impl Walk for Outer {
    fn node(&self) -> Node<'_> {
        Node::Struct(vec![
            Field::new("inner", FieldAnnotation::UNSET, &self.inner),
            Field::new("items", FieldAnnotation::UNSET, &self.items),
            Field::new("named", FieldAnnotation::UNSET, &self.named),
        ])
    }
}

fn inner(label: &str) -> Inner {
    Inner {
        label: label.to_owned(),
        hidden: 7,
    }
}

/// Records every visited path and whether it carried an annotation, then
/// skips nodes whose annotation is excluded.
#[derive(Default)]
struct Recorder {
    visited: Vec<(String, bool)>,
}

impl Visitor for Recorder {
    type Error = String;

    fn visit(
        &mut self,
        path: &FieldPath,
        annotation: Option<&FieldAnnotation>,
        _value: &dyn Walk,
    ) -> Result<Visit, Self::Error> {
        self.visited.push((path.to_string(), annotation.is_some()));
        match annotation.map(FieldAnnotation::flag) {
            Some(crate::FlagName::Excluded) => Ok(Visit::Skip),
            _ => Ok(Visit::Descend),
        }
    }
}

#[rstest]
fn visits_every_node_once_in_order() {
    let mut named = HashMap::new();
    named.insert("zeta".to_owned(), inner("z"));
    named.insert("alpha".to_owned(), inner("a"));
    let outer = Outer {
        inner: Some(inner("solo")),
        items: vec![inner("first")],
        named,
    };

    let mut recorder = Recorder::default();
    let outcome = walk(&outer, &mut recorder);

    assert_eq!(outcome, Ok(()));
    let expected: Vec<(String, bool)> = [
        ("", false),
        (".inner", true),
        (".inner", false),
        (".inner.label", true),
        (".inner.hidden", true),
        (".items", true),
        (".items[0]", false),
        (".items[0].label", true),
        (".items[0].hidden", true),
        (".named", true),
        (".named[alpha]", false),
        (".named[alpha].label", true),
        (".named[alpha].hidden", true),
        (".named[zeta]", false),
        (".named[zeta].label", true),
        (".named[zeta].hidden", true),
    ]
    .into_iter()
    .map(|(path, annotated)| (path.to_owned(), annotated))
    .collect();
    assert_eq!(recorder.visited, expected);
}

#[rstest]
fn skip_at_root_visits_nothing_else() {
    struct SkipAll(usize);

    impl Visitor for SkipAll {
        type Error = ();

        fn visit(
            &mut self,
            _path: &FieldPath,
            _annotation: Option<&FieldAnnotation>,
            _value: &dyn Walk,
        ) -> Result<Visit, Self::Error> {
            self.0 += 1;
            Ok(Visit::Skip)
        }
    }

    let mut visitor = SkipAll(0);
    let outcome = walk(&inner("x"), &mut visitor);
    assert_eq!(outcome, Ok(()));
    assert_eq!(visitor.0, 1);
}

#[rstest]
fn first_error_stops_the_walk() {
    struct FailOnLabel(Vec<String>);

    impl Visitor for FailOnLabel {
        type Error = String;

        fn visit(
            &mut self,
            path: &FieldPath,
            _annotation: Option<&FieldAnnotation>,
            _value: &dyn Walk,
        ) -> Result<Visit, Self::Error> {
            self.0.push(path.to_string());
            if path.as_str().ends_with("label") {
                return Err(path.to_string());
            }
            Ok(Visit::Descend)
        }
    }

    let outer = Outer {
        inner: None,
        items: vec![inner("a"), inner("b")],
        named: HashMap::new(),
    };
    let mut visitor = FailOnLabel(Vec::new());
    let outcome = walk(&outer, &mut visitor);

    assert_eq!(outcome, Err(".items[0].label".to_owned()));
    assert_eq!(visitor.0.last().map(String::as_str), Some(".items[0].label"));
    assert!(!visitor.0.iter().any(|path| path.starts_with(".items[1]")));
}

#[rstest]
fn sequences_know_when_they_hold_strings() {
    let empty_strings: Vec<String> = Vec::new();
    let numbers = vec![1_u32, 2];

    let Node::Seq(strings) = empty_strings.node() else {
        panic!("expected a sequence node");
    };
    assert_eq!(strings.into_text().ok(), Some(Vec::new()));

    let Node::Seq(seq) = numbers.node() else {
        panic!("expected a sequence node");
    };
    assert!(seq.into_text().is_err());
}

#[rstest]
fn maps_sort_string_pairs_by_key() {
    let labels: HashMap<String, String> = [("b", "2"), ("a", "1"), ("c", "3")]
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect();

    let Node::Map(map) = labels.node() else {
        panic!("expected a map node");
    };
    assert_eq!(
        map.into_text().ok(),
        Some(vec![("a", "1"), ("b", "2"), ("c", "3")])
    );
}

#[rstest]
#[case::text(Node::Text("x"), "\"x\"")]
#[case::number(Node::Number("42".to_owned()), "42")]
#[case::none(Node::Indirect(None), "None")]
#[case::opaque(Node::opaque(&'c'), "'c'")]
fn summarises_nodes(#[case] node: Node<'static>, #[case] expected: &str) {
    assert_eq!(node.summary(), expected);
}

#[rstest]
fn summarises_structs_by_field_names() {
    assert_eq!(inner("x").node().summary(), "{label, hidden}");
}
