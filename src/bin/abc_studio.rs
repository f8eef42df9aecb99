//! abc-studio: drive the studio shop page from the command line
//!
//! Builds the shop page in memory, binds it to the cart and order storage
//! and reads one command per line from stdin.
//!
//! ## Commands
//! ```text
//! click <element-id>              click an element by id
//! add <product-id>                click a product's Add to Cart control
//! key <key-name>                  key press on the page (e.g. Escape)
//! fill <form-id> <field> <value>  set a form field
//! submit <form-id>                submit a form
//! cart                            print the rendered cart
//! orders                          print recorded orders as JSON
//! quit
//! ```
//!
//! ## Configuration
//! - `--config <path>`: YAML config file (optional)
//! - ABC_STUDIO_CONFIG: Path to a YAML config file (optional)
//! - ABC_STUDIO__STORAGE__TYPE: `memory` or `sqlite` (default: sqlite)
//! - ABC_STUDIO__STORAGE__PATH: SQLite database path
//! - ABC_STUDIO_LOG: Log filter (default: info)

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

use abc_studio::cart::render_cart;
use abc_studio::config::Config;
use abc_studio::page::bindings::attrs;
use abc_studio::page::demo::studio_page;
use abc_studio::page::{Dom, Key, MemoryDom, ModalState, PageEvent, Storefront};
use abc_studio::storage::{init_storage, StorageError};
use abc_studio::utils::bootstrap::{init_tracing, parse_config_path};

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Click(String),
    Add(String),
    Key(String),
    Fill {
        form: String,
        field: String,
        value: String,
    },
    Submit(String),
    Cart,
    Orders,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let mut arg = |what: &str| {
            words
                .next()
                .map(str::to_string)
                .ok_or_else(|| format!("{} needs a {}", verb, what))
        };

        let command = match verb {
            "click" => Command::Click(arg("element id")?),
            "add" => Command::Add(arg("product id")?),
            "key" => Command::Key(arg("key name")?),
            "submit" => Command::Submit(arg("form id")?),
            "fill" => {
                let form = arg("form id")?;
                let field = arg("field name")?;
                let value = words.collect::<Vec<_>>().join(" ");
                Command::Fill { form, field, value }
            }
            "cart" => Command::Cart,
            "orders" => Command::Orders,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("unknown command: {}", other)),
        };
        Ok(Some(command))
    }
}

/// What the loop does after a command.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config_path = parse_config_path();
    let config = Config::load(config_path.as_deref()).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;
    let (session, persistent) = init_storage(&config.storage).await?;
    let mut storefront = Storefront::new(studio_page(), session, persistent);

    info!("abc-studio started");

    run(&mut storefront, BufReader::new(tokio::io::stdin())).await?;

    if storefront.modal_state() == ModalState::Open {
        warn!("Exiting with the cart modal open");
    }
    info!("abc-studio stopped");
    Ok(())
}

/// Read and execute commands until `quit` or end of input.
///
/// A failed command is reported and the loop goes on.
async fn run<R>(storefront: &mut Storefront<MemoryDom>, input: R) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut reports_seen = 0;

    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("error: {}", e);
                continue;
            }
        };

        match execute(storefront, command).await {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => {
                warn!(error = %e, "Command failed");
                println!("error: {}", e);
            }
        }

        reports_seen = print_feedback(storefront.dom_mut(), reports_seen);
    }

    Ok(())
}

async fn execute(
    storefront: &mut Storefront<MemoryDom>,
    command: Command,
) -> Result<Flow, StorageError> {
    match command {
        Command::Quit => return Ok(Flow::Quit),
        Command::Cart => {
            let view = render_cart(&storefront.cart().get_cart().await);
            if view.empty {
                println!("Your cart is empty.");
            }
            for line in &view.lines {
                println!("{}", line);
            }
            if let Some(total) = &view.total {
                println!("{}", total);
            }
        }
        Command::Orders => {
            let orders = storefront.orders().orders().await;
            println!("{}", serde_json::to_string_pretty(&orders)?);
        }
        Command::Fill { form, field, value } => {
            if !storefront.dom_mut().fill(&form, &field, value) {
                println!("error: no field {} in form {}", field, form);
            }
        }
        Command::Click(id) => match storefront.dom().get_element_by_id(&id) {
            Some(node) => {
                storefront.dispatch(PageEvent::Click(node)).await?;
            }
            None => println!("error: no element {}", id),
        },
        Command::Add(product) => {
            match storefront
                .dom()
                .find_by_attribute(attrs::PRODUCT_ID, &product)
            {
                Some(node) => {
                    storefront.dispatch(PageEvent::Click(node)).await?;
                }
                None => println!("error: no product {}", product),
            }
        }
        Command::Key(name) => {
            storefront
                .dispatch(PageEvent::KeyDown(Key::from_name(&name)))
                .await?;
        }
        Command::Submit(id) => match storefront.dom().get_element_by_id(&id) {
            Some(node) => {
                storefront.dispatch(PageEvent::Submit(node)).await?;
            }
            None => println!("error: no element {}", id),
        },
    }
    Ok(Flow::Continue)
}

/// Print alerts and validation messages raised by the last command.
fn print_feedback(dom: &mut MemoryDom, reports_seen: usize) -> usize {
    for alert in dom.take_alerts() {
        println!("[alert] {}", alert);
    }
    let reports = dom.validity_reports();
    for (_, error) in &reports[reports_seen..] {
        println!("[invalid] {}", error);
    }
    reports.len()
}
