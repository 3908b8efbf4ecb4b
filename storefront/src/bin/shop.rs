use clap::{Parser, Subcommand};
use common::config::Config;
use common::executable::init_tracing;
use common::format::format_currency;
use std::error::Error;
use storefront::api::ApiClient;
use storefront::model::AddToCartRequest;
use storefront::session::{self, Session};
use storefront::{cart, catalog, checkout};

#[derive(Parser, Debug)]
#[command(about = "C-C Mart storefront client", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "config/config.yaml")]
    config: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse the catalog, optionally filtered
    Products {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one product
    Product { id: i64 },
    /// Show the cart with its checkout summary
    Cart {
        #[arg(long, default_value = "local")]
        session: String,
    },
    /// Add a product to the cart
    Add {
        #[arg(long, default_value = "local")]
        session: String,
        product: i64,
        #[arg(default_value_t = 1)]
        quantity: u32,
    },
    Login {
        email: String,
        password: String,
    },
    Logout,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let config = Config::load(&args.config)?;
    init_tracing(&config.storefront.log_level);

    let api = ApiClient::new(&config.common.api_base_url)?;
    let mut user_session = Session::init(&config.storefront.token_path);

    match args.command {
        Command::Products { search, category } => {
            let products = catalog::fetch_products(&api).await?;
            let filtered =
                catalog::filter_products(&products, search.as_deref(), category.as_deref());
            if filtered.is_empty() {
                println!("No products found.");
            }
            for product in filtered {
                println!(
                    "{:>4}  {:<28} {:>12}  {}",
                    product.id,
                    product.name,
                    format_currency(product.price),
                    product.category
                );
            }
        }
        Command::Product { id } => {
            let product = catalog::fetch_product(&api, id).await?;
            println!("{} — {}", product.name, format_currency(product.price));
            println!("{}", product.description);
            println!(
                "image: {}",
                catalog::image_url(&config.common.backend_base_url, product.image.as_deref())
            );
        }
        Command::Cart { session } => {
            let items = cart::fetch_items(&api, &session).await?;
            for item in &items {
                println!(
                    "{:<28} x{:<3} {:>12}",
                    item.product.name,
                    item.quantity,
                    format_currency(item.product.price * f64::from(item.quantity))
                );
            }
            let summary = checkout::summarize(&items);
            println!("Subtotal:     {}", format_currency(summary.subtotal));
            println!("Delivery fee: {}", format_currency(summary.delivery_fee));
            println!("Total:        {}", format_currency(summary.total));
        }
        Command::Add {
            session,
            product,
            quantity,
        } => {
            let request = AddToCartRequest {
                product_id: product,
                quantity,
            };
            let item = cart::add_item(&api, &session, &request).await?;
            println!("Added {} x{}", item.product.name, item.quantity);
        }
        Command::Login { email, password } => {
            if session::login(&api, &mut user_session, &email, &password).await? {
                let name = user_session
                    .user()
                    .map(|user| user.name.clone())
                    .unwrap_or_else(|| email.clone());
                println!("Logged in as {name}");
            } else {
                println!("Login failed");
            }
        }
        Command::Logout => {
            session::logout(&api, &mut user_session).await;
            println!("Logged out");
        }
    }

    Ok(())
}
