//! Integration tests for Collection construction, traversal and queries.
//!
//! Each section exercises one operation through the public API only.

use std::cell::RefCell;
use std::collections::LinkedList;
use std::rc::Rc;

use ordo::prelude::*;
use rstest::{fixture, rstest};

#[derive(Debug, Clone, PartialEq)]
struct Person {
    age: i32,
}

impl Person {
    const fn new(age: i32) -> Self {
        Self { age }
    }
}

#[fixture]
fn numbers() -> Collection<i32> {
    collection![10, 20, 30]
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_from_array_of_items() {
    let data = [10, 20, 30];
    let collection = Collection::from(data);
    assert_eq!(collection[0], 10);
    assert_eq!(collection[1], 20);
    assert_eq!(collection[2], 30);
}

#[rstest]
fn test_macro_takes_multiple_parameters(numbers: Collection<i32>) {
    assert_eq!(numbers[0], 10);
    assert_eq!(numbers[1], 20);
    assert_eq!(numbers[2], 30);
}

#[rstest]
fn test_from_items_accepts_any_sequence() {
    let mut list = LinkedList::new();
    list.push_back("a");
    list.push_back("b");
    let collection = Collection::from_items(list);
    assert_eq!(collection.as_slice(), &["a", "b"]);
}

#[rstest]
fn test_collect_into_collection() {
    let collection: Collection<i32> = (1..=4).collect();
    assert_eq!(collection.len(), 4);
    assert_eq!(collection[3], 4);
}

#[rstest]
fn test_empty_collection() {
    let collection: Collection<String> = Collection::empty();
    assert!(collection.is_empty());
    assert_eq!(collection.get(0), None);
}

// =============================================================================
// Reduce / All
// =============================================================================

#[rstest]
fn test_reduce_to_another_data_type(numbers: Collection<i32>) {
    assert_eq!(numbers.reduce(|current, item| current + item, 0), 60);
    assert_eq!(
        numbers.reduce(|current, item| current + &item.to_string(), String::new()),
        "102030"
    );
}

#[rstest]
fn test_all_returns_every_item_in_order(numbers: Collection<i32>) {
    let items = numbers.all();
    assert_eq!(items[0], 10);
    assert_eq!(items[1], 20);
    assert_eq!(items[2], 30);
}

#[rstest]
fn test_from_all_round_trips(numbers: Collection<i32>) {
    assert_eq!(Collection::from(numbers.all()), numbers);
}

// =============================================================================
// Each
// =============================================================================

#[rstest]
fn test_each_doubles_shared_ages() {
    let people = collection![
        Rc::new(RefCell::new(Person::new(10))),
        Rc::new(RefCell::new(Person::new(18))),
        Rc::new(RefCell::new(Person::new(63)))
    ];

    people.each(|person| {
        let mut person = person.borrow_mut();
        person.age *= 2;
    });

    assert_eq!(people[0].borrow().age, 20);
    assert_eq!(people[1].borrow().age, 36);
    assert_eq!(people[2].borrow().age, 126);
}

#[rstest]
fn test_each_mut_doubles_owned_ages() {
    let mut people = collection![Person::new(10), Person::new(18), Person::new(63)];

    people.each_mut(|person| person.age *= 2);

    assert_eq!(people[0].age, 20);
    assert_eq!(people[1].age, 36);
    assert_eq!(people[2].age, 126);
}

#[rstest]
fn test_each_chains_into_other_operations(numbers: Collection<i32>) {
    let mut seen = Vec::new();
    let total = numbers
        .each(|item| seen.push(*item))
        .reduce(|sum, item| sum + item, 0);
    assert_eq!(seen, vec![10, 20, 30]);
    assert_eq!(total, 60);
}

// =============================================================================
// Every / Filter / First
// =============================================================================

#[rstest]
#[case(5, true)]
#[case(8, true)]
#[case(15, false)]
fn test_every_item_passes(numbers: Collection<i32>, #[case] minimum: i32, #[case] expected: bool) {
    assert_eq!(numbers.every(|item| *item >= minimum), expected);
}

#[rstest]
fn test_filter_a_given_collection(numbers: Collection<i32>) {
    let filtered = numbers.filter(|item| *item >= 15);
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0], 20);
    assert_eq!(filtered[1], 30);
}

#[rstest]
fn test_first_item_of_a_collection(numbers: Collection<i32>) {
    assert_eq!(numbers.first(), Ok(&10));
}

#[rstest]
fn test_first_item_that_passes_a_callable(numbers: Collection<i32>) {
    assert_eq!(numbers.first_where(|number| *number >= 15), Ok(&20));
}

#[rstest]
fn test_first_on_empty_surfaces_error() {
    let empty: Collection<i32> = collection![];
    let error = empty.first().unwrap_err();
    assert_eq!(error, CollectionError::Empty { operation: "first" });
    assert_eq!(error.to_string(), "first: collection is empty");
}

// =============================================================================
// Diff
// =============================================================================

#[rstest]
fn test_diff_of_two_collections(numbers: Collection<i32>) {
    let other = collection![10, 30, 40];
    let diff = numbers.diff(&other);
    assert_eq!(diff.len(), 1);
    assert!(diff.contains(&20));
}

#[rstest]
fn test_diff_against_an_array(numbers: Collection<i32>) {
    let diff = numbers.diff(&[10, 30, 40]);
    assert_eq!(diff.as_slice(), &[20]);
}

#[rstest]
fn test_diff_against_a_list(numbers: Collection<i32>) {
    let other = vec![10, 30, 40];
    let diff = numbers.diff(&other);
    assert_eq!(diff.as_slice(), &[20]);
}

#[rstest]
fn test_diff_by_value_equality() {
    let people = collection![Person::new(1), Person::new(2)];
    let diff = people.diff(&[Person::new(2)]);
    assert_eq!(diff.as_slice(), &[Person::new(1)]);
}

// =============================================================================
// When
// =============================================================================

#[rstest]
fn test_when_runs_callable_if_true(numbers: Collection<i32>) {
    let result = numbers.when(true, |mut col| {
        col.add(40);
        col
    });
    assert_eq!(result.len(), 4);
    assert_eq!(result[3], 40);
    assert_eq!(numbers.len(), 3);
}

#[rstest]
fn test_when_skips_callable_if_false(numbers: Collection<i32>) {
    let result = numbers.when(false, |mut col| {
        col.add(40);
        col
    });
    assert_eq!(result.len(), 3);
    assert_eq!(numbers.len(), 3);
}

// =============================================================================
// Storage primitives
// =============================================================================

#[rstest]
fn test_try_get_out_of_range(numbers: Collection<i32>) {
    assert_eq!(
        numbers.try_get(3),
        Err(CollectionError::IndexOutOfRange {
            index: 3,
            length: 3
        })
    );
}

#[rstest]
fn test_add_range_appends_in_order(mut numbers: Collection<i32>) {
    numbers.add_range([40, 50]);
    assert_eq!(numbers.all(), vec![10, 20, 30, 40, 50]);
}
