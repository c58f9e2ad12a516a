//! Batch checking: collect every failure before reporting.
//!
//! Run with: `cargo run --example batch_checking`

use requirements_rail::config::Configuration;
use requirements_rail::prelude::*;

#[derive(Debug)]
struct Order {
    id: String,
    quantities: Vec<u32>,
    coupons: Vec<&'static str>,
}

fn review(validators: &Validators, order: &Order) -> ValidationResult<Vec<String>> {
    let id = validators.that(order.id.clone(), "id")?.matches("ORD-[0-9]{4}")?;
    let quantities = validators
        .that(order.quantities.clone(), "quantities")?
        .with_context(&order.id, "order")?
        .is_not_empty()?
        .is_sorted(|a, b| a.cmp(b))?;
    let coupons = validators
        .that(order.coupons.clone(), "coupons")?
        .does_not_contain_duplicates()?
        .does_not_contain_any(named(vec!["EXPIRED"], "retired"))?;

    Ok(id.and(&[&quantities, &coupons]).else_get_messages())
}

fn main() {
    let orders = [
        Order { id: "ORD-0042".to_string(), quantities: vec![1, 2, 5], coupons: vec!["WELCOME"] },
        Order {
            id: "42".to_string(),
            quantities: vec![3, 1],
            coupons: vec!["EXPIRED", "SPRING", "SPRING"],
        },
    ];

    let checking = Validators::checking();
    for order in &orders {
        match review(&checking, order) {
            Ok(messages) if messages.is_empty() => println!("{}: ok\n", order.id),
            Ok(messages) => {
                println!("{}: {} problem(s)", order.id, messages.len());
                for message in messages {
                    println!("---\n{message}");
                }
                println!();
            },
            Err(error) => println!("{}: misuse: {error}", order.id),
        }
    }

    println!("=== Without diffs, lazily materialized ===\n");
    let quiet = Validators::with_configuration(
        Configuration::builder()
            .throw_on_failure(false)
            .record_stacktrace(false)
            .allow_diff(false)
            .build(),
    );
    let greeting = quiet
        .that("Hello, World".to_string(), "greeting")
        .and_then(|v| v.is_equal_to("Hello World"));
    if let Ok(validator) = greeting {
        if let Some(error) = validator.else_get_exception() {
            println!("{}: {error}", error.kind());
        }
    }
}
