mod config;

use tqe::{Result, Trader, TraderRef, Transaction, TransactionStore};

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Seeding sample history...");

    let mut store = TransactionStore::new();
    seed_sample_history(&mut store);

    log::debug!("Seeded {} transactions. Running queries...", store.len());

    report_queries(&mut store);

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Builds the classic trading dataset: four traders across Cambridge and
/// Milan, trading in 2011 and 2012. Raoul and Mario each appear in two
/// transactions through a shared handle.
fn seed_sample_history(store: &mut TransactionStore) {
    let raoul = TraderRef::new(Trader::new("Raoul", "Cambridge"));
    let mario = TraderRef::new(Trader::new("Mario", "Milan"));
    let alan = TraderRef::new(Trader::new("Alan", "Cambridge"));
    let brian = TraderRef::new(Trader::new("Brian", "Cambridge"));

    store.add(Transaction::new(brian, 2011, 300));
    store.add(Transaction::new(raoul.clone(), 2012, 1000));
    store.add(Transaction::new(raoul, 2011, 400));
    store.add(Transaction::new(mario.clone(), 2012, 710));
    store.add(Transaction::new(mario, 2012, 700));
    store.add(Transaction::new(alan, 2012, 950));
}

/// Walks every query once and prints the results to stdout.
fn report_queries(store: &mut TransactionStore) {
    println!("{} transactions on record", store.len());

    for year in [2011, 2012] {
        println!("\ntransactions in {year}, cheapest first:");
        for tx in store.transactions_in_year(year) {
            println!("  {tx}");
        }
    }

    println!("\ncities traded from: {}", store.cities().join(", "));

    for city in ["Cambridge", "Milan"] {
        let traders = store
            .traders_in(city)
            .iter()
            .map(|trader| trader.name())
            .collect::<Vec<_>>()
            .join(", ");
        println!("traders in {city}: {traders}");
    }

    println!("\ngrouped by year:");
    for (year, transactions) in store.transactions_by_year() {
        println!("  {year}: {} transactions", transactions.len());
    }

    println!("\nhighest value: {}", store.highest_value());
    println!("total value: {}", store.total_value());
    match store.lowest_value_transaction() {
        Some(tx) => println!("lowest value transaction: {tx}"),
        None => println!("lowest value transaction: none"),
    }
    println!("all trader names: {}", store.trader_names());

    store.relocate_traders("Cambridge", "Milan");
    println!(
        "\nafter relocating Cambridge to Milan: any trader left in Cambridge? {}",
        store.trader_in_city("Cambridge")
    );
    println!(
        "traders now in Milan: {}",
        store
            .traders_in("Milan")
            .iter()
            .map(|trader| trader.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
}
