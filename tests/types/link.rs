use std::error::Error;

use linked_errors::{chain, Link};

use crate::common::{code, messages, wrap};

#[test]
fn link_views_the_chain_from_itself_onward() {
    let chain = chain!["a", "b", "c"];
    let head: &Link = chain.head().unwrap();

    assert_eq!(head.len(), 3);
    assert_eq!(head.rest().unwrap().len(), 2);
    assert_eq!(messages(head.rest().unwrap().errors()), ["b", "c"]);
    assert_eq!(messages(head), ["a", "b", "c"]);
}

#[test]
fn link_renders_its_own_error() {
    let chain = chain!["a", wrap("outer", code(5))];
    let second = chain.rest().unwrap();

    assert_eq!(second.to_string(), "outer 5");
    assert_eq!(second.message(), "outer 5");
    assert_eq!(second.error().to_string(), "outer 5");
    assert!(second.is_last());
}

#[test]
fn link_source_is_the_next_link() {
    let chain = chain!["a", "b"];
    let head = chain.head().unwrap();

    let next = head.source().unwrap();
    assert!(next.downcast_ref::<Link>().is_some());
    assert_eq!(next.to_string(), "b");
    assert!(next.source().is_none());
}

#[test]
fn link_matches_only_its_own_error() {
    let chain = chain![code(1), wrap("ctx", code(2))];
    let second = chain.rest().unwrap();

    assert!(second.matches(&code(2)));
    assert!(!second.matches(&code(1)));
    assert!(!chain.head().unwrap().matches(&code(2)));
}

#[test]
fn link_debug_reports_remaining_links() {
    let chain = chain![code(1), code(2), code(3)];

    let head = format!("{:?}", chain.head().unwrap());
    assert!(head.contains("CodeError { code: 1 }"));
    assert!(head.contains("remaining: 2"));

    let tail = format!("{:?}", chain.tail().unwrap());
    assert!(tail.contains("remaining: 0"));
}
