//! Quick start: fail-fast argument checks.
//!
//! Run with: `cargo run --example quick_start`

use requirements_rail::prelude::*;
use std::collections::BTreeMap;

#[derive(Debug)]
struct Account {
    owner: String,
    balance: u64,
}

impl Account {
    fn open(owner: &str, deposit: u64) -> ValidationResult<Self> {
        require_that(owner.to_string(), "owner")?
            .is_not_blank()?
            .is_trimmed()?
            .length()?
            .is_between_closed(2, 32)?;
        require_that(deposit, "deposit")?.is_greater_than_or_equal_to(10)?;
        Ok(Self { owner: owner.to_string(), balance: deposit })
    }

    fn withdraw(&mut self, amount: u64) -> ValidationResult<u64> {
        let balance = self.balance;
        require_that!(amount)?.is_positive()?.is_less_than_or_equal_to(named!(balance))?;
        self.balance -= amount;
        Ok(self.balance)
    }
}

fn configure(settings: BTreeMap<&str, u32>) -> ValidationResult<u32> {
    require_that(settings.clone(), "settings")?
        .keys()?
        .contains_all(vec!["port", "workers"])?;
    let port = settings.get("port").copied();
    require_that_option(port, "port")?.is_between(1024, 65536)?.into_value()
}

fn main() {
    println!("=== Opening accounts ===\n");
    for (owner, deposit) in [("Ada", 100), (" Grace", 100), ("Linus", 5)] {
        match Account::open(owner, deposit) {
            Ok(account) => println!("opened: {account:?}"),
            Err(error) => println!("rejected ({}):\n{error}\n", error.kind()),
        }
    }

    println!("\n=== Withdrawing ===\n");
    if let Ok(mut account) = Account::open("Ada", 100) {
        println!("withdraw 30 -> {:?}", account.withdraw(30));
        if let Err(error) = account.withdraw(500) {
            println!("withdraw 500 rejected:\n{error}");
        }
    }

    println!("\n=== Nested values ===\n");
    let settings = BTreeMap::from([("port", 80), ("workers", 4)]);
    match configure(settings) {
        Ok(port) => println!("port: {port}"),
        Err(error) => println!("{error}"),
    }
}
