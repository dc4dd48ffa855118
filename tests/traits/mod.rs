use std::num::ParseIntError;

use linked_errors::traits::{ResultExt, ResultIteratorExt};
use linked_errors::{inspect, ErrorChain};

use crate::common::{code, messages, CodeError};

#[test]
fn record_err_passes_ok_values_through() {
    let mut chain = ErrorChain::new();

    let value = Ok::<i32, CodeError>(42).record_err(&mut chain);

    assert_eq!(value, Some(42));
    assert!(chain.is_empty());
}

#[test]
fn record_err_appends_errors_in_call_order() {
    let mut chain = ErrorChain::new();

    let a = Err::<(), _>(code(1)).record_err(&mut chain);
    let b = Ok::<_, CodeError>(2).record_err(&mut chain);
    let c = Err::<(), _>("three").record_err(&mut chain);

    assert_eq!((a, b, c), (None, Some(2), None));
    assert_eq!(messages(&chain), ["1", "three"]);
    assert!(chain.matches(&code(1)));
}

#[test]
fn collect_chain_returns_values_when_all_succeed() {
    let values = ["1", "2", "3"].iter().map(|s| s.parse::<i32>()).collect_chain();

    assert_eq!(values.unwrap(), vec![1, 2, 3]);
}

#[test]
fn collect_chain_keeps_every_error() {
    let mut seen = 0;
    let result = ["1", "a", "2", "b"]
        .iter()
        .inspect(|_| seen += 1)
        .map(|s| s.parse::<i32>())
        .collect_chain();

    assert_eq!(seen, 4);
    let chain = result.unwrap_err();
    assert_eq!(chain.len(), 2);
    assert!(chain.iter().all(|e| e.downcast_ref::<ParseIntError>().is_some()));
    assert!(inspect::is_type::<ParseIntError>(&chain));
}

#[test]
fn collect_chain_on_empty_iterator_is_ok() {
    let values = std::iter::empty::<Result<u8, CodeError>>().collect_chain();

    assert_eq!(values.unwrap(), Vec::<u8>::new());
}
