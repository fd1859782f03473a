//! Interactive storefront client.
//!
//! Browses the catalog and drives a shopping session against a running
//! server. Commands: list, show <id>, add <id>, remove <id>,
//! qty <id> <delta>, cart, checkout, help, quit.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pooja_store::client::{ApiClient, ClientError};
use pooja_store::session::StoreSession;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = ApiClient::from_env();
    println!("pooja-store client - {}", client.base_url());

    let mut session = StoreSession::new(client);
    session.load_catalog().await;
    if session.catalog().is_empty() {
        println!("No products available (is the server running?)");
    } else {
        print_catalog(&session);
    }

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => {}
            ["list"] => print_catalog(&session),
            ["show", id] => match session.find_product(id) {
                Some(p) => println!("{} - {}\n  {}", p.name, p.price, p.description),
                None => println!("No product with id {id}"),
            },
            ["add", id] => {
                if session.add_to_cart(id) {
                    println!("Added. Cart has {} item(s).", session.cart().unit_count());
                } else {
                    println!("No product with id {id}");
                }
            }
            ["remove", id] => {
                session.remove_from_cart(id);
                print_cart(&session);
            }
            ["qty", id, delta] => match delta.parse::<i64>() {
                Ok(delta) => {
                    session.update_quantity(id, delta);
                    print_cart(&session);
                }
                Err(_) => println!("qty takes a signed number, e.g. qty 1 -2"),
            },
            ["cart"] => print_cart(&session),
            ["checkout"] => match session.checkout().await {
                Ok(confirmation) => {
                    println!("{}", confirmation.message);
                    println!("Order ID: {}", confirmation.order_id);
                }
                Err(err) => report_checkout_failure(&err),
            },
            ["help"] => print_help(),
            ["quit"] | ["exit"] => break,
            _ => {
                println!("Unknown command.");
                print_help();
            }
        }
    }
    Ok(())
}

fn print_catalog(session: &StoreSession) {
    if session.is_loading() {
        println!("Loading products...");
        return;
    }
    for product in session.catalog() {
        println!(
            "[{}] {} - {} ({})",
            product.id, product.name, product.price, product.category
        );
    }
}

fn print_cart(session: &StoreSession) {
    if session.cart().is_empty() {
        println!("Your cart is empty.");
        return;
    }
    for item in session.cart_items() {
        println!(
            "{} x{} = {}",
            item.product.name,
            item.quantity,
            item.line_total()
        );
    }
    println!("Total: {}", session.total());
}

fn report_checkout_failure(err: &ClientError) {
    // Cart stays intact so the user can retry.
    tracing::warn!(error = %err, "checkout failed");
    println!("Checkout failed. Please try again.");
}

fn print_help() {
    println!("Commands: list, show <id>, add <id>, remove <id>, qty <id> <delta>, cart, checkout, quit");
}
