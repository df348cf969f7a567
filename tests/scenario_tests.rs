//! Behavioural scenarios for the priority queue
//!
//! Each test drives the public API the way a caller would and checks the
//! observable contract: polarity, peeking, popping, second-best, sizes and
//! the traversal guard.

use keyed_pq::{Polarity, PriorityQueue, QueueError};
use std::collections::HashSet;

fn six_entry_max_queue() -> PriorityQueue<&'static str, f64> {
    let mut pq = PriorityQueue::new(Polarity::Max);
    pq.push("x", 100.0);
    pq.push("y", 80.0);
    pq.push("z", 40.0);
    pq.push("w", 60.0);
    pq.push("i", 90.0);
    pq.push("j", 95.0);
    pq
}

#[test]
fn test_new_object_creation() {
    let pq: PriorityQueue<String, f64> = PriorityQueue::from_token(":max").unwrap();
    assert!(pq.is_empty());
    assert_eq!(pq.polarity(), Polarity::Max);
}

#[test]
fn test_new_handling_of_bad_parameter() {
    let result = PriorityQueue::<String, f64>::from_token("true");
    assert!(matches!(result, Err(QueueError::Configuration { .. })));
}

#[test]
fn test_push_returns_self() {
    let mut pq = PriorityQueue::max();
    let len = pq.push("test", 10).push("again", 5).len();
    assert_eq!(len, 2);
}

#[test]
fn test_top_on_a_single_element_queue_returns_that_element() {
    let mut pq = PriorityQueue::max();
    pq.push("test", 10);
    assert_eq!(pq.top(), Some(&"test"));
    assert_eq!(pq.next(), Some(&"test"));
}

#[test]
fn test_top_returns_the_maximal_element_in_a_max_queue() {
    let mut pq = PriorityQueue::max();
    pq.push("10", 10).push("30", 30).push("20", 20);

    assert_eq!(pq.top(), Some(&"30"));
    assert_eq!(pq.next(), Some(&"30"));
    assert_eq!(pq.top_key(), Some(30));
    assert_eq!(pq.next_key(), Some(30));
}

#[test]
fn test_top_returns_the_minimal_element_in_a_min_queue() {
    let mut pq = PriorityQueue::min();
    pq.push("10", 10).push("30", 30).push("20", 20);

    assert_eq!(pq.top(), Some(&"10"));
    assert_eq!(pq.next(), Some(&"10"));
}

#[test]
fn test_pop_removes_an_element_from_the_top() {
    let mut pq = PriorityQueue::max();
    pq.push("10", 10).push("30", 30).push("20", 20);

    let extracted = pq.pop();

    assert_eq!(extracted, Ok("30"));
    assert_eq!(pq.top_key(), Some(20));
}

#[test]
fn test_pop_fails_if_the_queue_is_empty() {
    let mut pq = PriorityQueue::max();
    assert_eq!(pq.pop(), Err(QueueError::EmptyQueue));

    pq.push("10", 10);
    pq.pop().unwrap();
    assert_eq!(pq.pop(), Err(QueueError::EmptyQueue));
    assert_eq!(pq.top(), None);
    assert_eq!(pq.top_key(), None);
}

#[test]
fn test_empty_and_size() {
    let mut pq = PriorityQueue::max();
    assert!(pq.is_empty());
    assert_eq!(pq.size(), 0);

    pq.push("x", 10).push("y", 20).push("z", 30);
    assert!(!pq.is_empty());
    assert_eq!(pq.size(), 3);
}

#[test]
fn test_enumerable() {
    let mut pq = PriorityQueue::max();
    pq.push(1, 10.0).push(2, 20.0).push(3, 30.0);

    let mut sum_o = 0;
    let mut sum_p = 0.0;
    pq.each(|o, p| {
        sum_o += o;
        sum_p += p;
    });

    assert_eq!(sum_o, 6);
    assert_eq!(sum_p, 60.0);
}

#[test]
fn test_second_best_key() {
    let pq = six_entry_max_queue();
    assert_eq!(pq.second_best_key(), Some(95.0));
}

#[test]
fn test_second_best_key_on_small_queues() {
    let mut pq = PriorityQueue::max();
    assert_eq!(pq.second_best_key(), None);

    pq.push("x", 100);
    assert_eq!(pq.second_best_key(), None);

    pq.push("x", 80);
    assert_eq!(pq.second_best_key(), Some(80));
}

#[test]
fn test_each_will_iterate_over_all_elements() {
    let mut pq = six_entry_max_queue();
    let mut objects = HashSet::new();

    let result = pq.try_for_each(|_, obj, _| {
        objects.insert(obj);
    });

    assert!(result.is_ok());
    assert_eq!(objects, HashSet::from(["x", "y", "z", "w", "i", "j"]));
}

#[test]
fn test_each_will_abort_if_queue_changes() {
    let mut pq = six_entry_max_queue();
    let mut objects = HashSet::new();
    let mut count = 0;

    let err = pq
        .try_for_each(|q, obj, _| {
            if count == 3 {
                q.push("no way!", 90.0);
            }
            count += 1;
            objects.insert(obj);
        })
        .unwrap_err();

    assert_eq!(err, QueueError::IteratorInvalidated);
    assert!(err
        .to_string()
        .contains("a change in the priority queue invalidated the current iterator"));
    assert_eq!(objects.len(), 4);
}

#[test]
fn test_pop_each_yields_priority_order() {
    let mut pq = six_entry_max_queue();
    let order: Vec<_> = pq.drain_sorted().map(|(obj, _)| obj).collect();

    assert_eq!(order, vec!["x", "j", "i", "y", "w", "z"]);
    assert!(pq.is_empty());
}
