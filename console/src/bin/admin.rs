use clap::{Parser, Subcommand};
use common::config::Config;
use common::executable::init_tracing;
use common::format::{format_currency, format_date};
use console::api::HttpOrderApi;
use console::bucket::StatusBucket;
use console::console::{Notice, OrderConsole};
use std::error::Error;
use std::str::FromStr;
use std::sync::Arc;
use storefront::api::ApiClient;
use storefront::session::Session;

#[derive(Parser, Debug)]
#[command(about = "C-C Mart admin order console", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "config/config.yaml")]
    config: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List orders, optionally restricted to one status tab
    Orders {
        #[arg(long, default_value = "all")]
        bucket: String,
        /// Free-text match over order id, customer name, and email
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one order with its line items
    Show { id: i64 },
    /// Approve a pending order
    Approve { id: i64 },
    /// Assign a delivery agent to an approved order
    Assign {
        id: i64,
        #[arg(long)]
        agent: Option<i64>,
    },
    /// Dispatch the next forward transition for the order
    Advance { id: i64 },
    /// List available delivery agents
    Agents,
    /// Per-status order counts
    Stats,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let config = Config::load(&args.config)?;
    init_tracing(&config.console.log_level);

    let api = ApiClient::new(&config.common.api_base_url)?;
    let session = Session::init(&config.storefront.token_path);
    let mut console = OrderConsole::new(Arc::new(HttpOrderApi::new(api, session)));

    match args.command {
        Command::Orders { bucket, search } => {
            let bucket = StatusBucket::from_str(&bucket)
                .map_err(|_| format!("unknown bucket: {bucket}"))?;
            console.refresh().await;
            let rows = match search.as_deref() {
                Some(term) => console.search(bucket, term),
                None => console.bucket(bucket),
            };
            if rows.is_empty() {
                println!("No orders found.");
            }
            for order in rows {
                println!(
                    "{:>5}  {:<24} {:<17} {:>12}  {}",
                    order.id,
                    order.customer_label(),
                    format_date(&order.created_at),
                    format_currency(order.display_total()),
                    order.status
                );
            }
        }
        Command::Show { id } => {
            console.refresh().await;
            console.expand(id).await;
            if let Some(order) = console.store().get(id) {
                println!("Order #{} — {}", order.id, order.status);
                println!("Customer: {}", order.customer_label());
                if let Some(email) = order.customer_email.as_deref() {
                    println!("Email:    {email}");
                }
                if let Some(address) = order.delivery_address.as_deref() {
                    println!("Address:  {address}");
                }
                if let Some(agent) = &order.delivery_agent {
                    println!("Agent:    {}", agent.name);
                }
                println!("Placed:   {}", format_date(&order.created_at));
                println!();
                if order.order_items.is_empty() {
                    println!("No items found.");
                } else {
                    for item in &order.order_items {
                        println!(
                            "  {:<28} x{:<3} {:>12}",
                            item.product_name,
                            item.quantity,
                            format_currency(item.subtotal())
                        );
                    }
                    println!("  items subtotal: {}", format_currency(order.items_subtotal()));
                }
                println!("Total: {}", format_currency(order.display_total()));
            }
        }
        Command::Approve { id } => {
            console.approve(id).await;
        }
        Command::Assign { id, agent } => {
            console.assign_agent(id, agent).await;
        }
        Command::Advance { id } => {
            console.refresh().await;
            console.advance(id).await;
        }
        Command::Agents => {
            console.load_agents().await;
            for agent in console.agents() {
                println!(
                    "{:>4}  {:<24} {:<14} {}",
                    agent.id,
                    agent.name,
                    agent.phone.as_deref().unwrap_or("-"),
                    agent.vehicle_type.as_deref().unwrap_or("-")
                );
            }
        }
        Command::Stats => {
            console.refresh().await;
            let stats = console.stats();
            println!("total:       {}", stats.total);
            println!("pending:     {}", stats.pending);
            println!("approved:    {}", stats.approved);
            println!("assigned:    {}", stats.assigned);
            println!("in_delivery: {}", stats.in_delivery);
            println!("delivered:   {}", stats.delivered);
            println!("cancelled:   {}", stats.cancelled);
        }
    }

    for notice in console.take_notices() {
        match notice {
            Notice::Success(text) => println!("ok: {text}"),
            Notice::Error(text) => eprintln!("error: {text}"),
        }
    }

    Ok(())
}
