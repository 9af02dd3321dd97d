//! Collection showcase
//!
//! Builds a few collections, runs each operation family once and prints the
//! results. Set `RUST_LOG` to control the library's tracing output, for
//! example:
//!
//! ```bash
//! RUST_LOG=ordo=trace cargo run --example showcase
//! ```

use std::fmt;

use ordo::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Person {
    age: i32,
}

impl Person {
    const fn new(age: i32) -> Self {
        Self { age }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Person({})", self.age)
    }
}

fn main() -> Result<(), CollectionError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ordo=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Running collection showcase");

    show_reduce();
    show_all();
    show_avg()?;
    show_median()?;
    show_mode()?;
    show_diff();
    show_queries()?;

    let empty: Collection<i32> = Collection::empty();
    if let Err(error) = empty.avg() {
        tracing::warn!("Expected failure on empty collection: {error}");
    }

    Ok(())
}

fn show_reduce() {
    let collection = collection![10, 20, 30];
    let result = collection.reduce(|value, item| value + item, 0);
    println!("Reduce result: {result}");
}

fn show_all() {
    let collection = collection![10, 20, 30];
    let result = collection.all();
    println!("All result: {}", result[0]);
}

fn show_avg() -> Result<(), CollectionError> {
    let people = collection![Person::new(10), Person::new(45), Person::new(36)];
    let result = people.avg_by(|person| person.age)?;
    println!("Avg result: {result}");
    Ok(())
}

fn show_median() -> Result<(), CollectionError> {
    let people = collection![Person::new(10), Person::new(45), Person::new(36)];
    let result = people.dump().median_by(|person| person.age)?;
    println!("Median result: {result}");
    Ok(())
}

fn show_mode() -> Result<(), CollectionError> {
    let collection = collection![1, 1, 4, 1, 3, 3];
    let result = collection.mode()?;
    println!("Mode result: {result}");
    Ok(())
}

fn show_diff() {
    let collection = collection![10, 20, 30];
    let other = collection![10, 30, 40];
    let result = collection.diff(&other);
    println!("Diff result: {result}");
}

fn show_queries() -> Result<(), CollectionError> {
    let collection = collection![10, 20, 30];

    println!("Every > 8: {}", collection.every(|item| *item > 8));
    println!("Filter > 15: {}", collection.filter(|item| *item > 15));
    println!("First >= 15: {}", collection.first_where(|item| *item >= 15)?);

    let extended = collection.when(true, |mut clone| {
        clone.add(40);
        clone
    });
    println!("When result: {}", extended.implode(" - "));
    Ok(())
}
