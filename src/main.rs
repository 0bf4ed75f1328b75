use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use mediator::{DefaultMediator, Mediator};
use product_catalog::commands::{
    AddProductCommand, AddProductRequestHandler, DeleteProductCommand, DeleteProductRequestHandler,
    HydrateCatalogCommand, HydrateCatalogRequestHandler, HydrateOutcome, ResetCatalogCommand,
    ResetCatalogRequestHandler,
};
use product_catalog::events::{
    CatalogClearedEvent, CatalogHydratedEvent, ProductAddedEvent, ProductDeletedEvent,
};
use product_catalog::queries::{GetAllProductsRequest, GetAllProductsRequestHandler, GetProductRequestHandler};
use product_catalog::render::render_catalog;
use product_catalog::services::remote_service::RemoteCatalogService;
use product_catalog::{CatalogService, Product, SharedCatalogService, SharedSnapshotService, SnapshotService};

const DEFAULT_SNAPSHOT_PATH: &str = "products.json";
const DEFAULT_REMOTE_URL: &str = "https://fakestoreapi.com/products";

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let snapshot_path =
        std::env::var("CATALOG_SNAPSHOT").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_owned());
    let remote_url =
        std::env::var("CATALOG_REMOTE_URL").unwrap_or_else(|_| DEFAULT_REMOTE_URL.to_owned());

    let catalog: SharedCatalogService = Arc::new(Mutex::new(CatalogService::new()));
    let snapshot: SharedSnapshotService<Product> =
        Arc::new(Mutex::new(SnapshotService::new(snapshot_path)));
    let remote = Arc::new(Mutex::new(RemoteCatalogService::new(remote_url)));

    let mut mediator = create_mediator_service(&catalog, &snapshot, &remote);

    match mediator
        .send(HydrateCatalogCommand)
        .expect("Unable to send command")
    {
        HydrateOutcome::Unavailable => {
            println!("Could not load products. Starting with an empty catalog.")
        }
        HydrateOutcome::FromSnapshot(_) | HydrateOutcome::FromRemote(_) => {}
    }

    render_current(&mut mediator);
    print_help();
    repl(&mut mediator)
}

fn create_mediator_service(
    catalog: &SharedCatalogService,
    snapshot: &SharedSnapshotService<Product>,
    remote: &Arc<Mutex<RemoteCatalogService>>,
) -> DefaultMediator {
    DefaultMediator::builder()
        .add_handler(GetAllProductsRequestHandler(catalog.clone()))
        .add_handler(GetProductRequestHandler(catalog.clone()))
        .add_handler_deferred(|m| {
            AddProductRequestHandler(catalog.clone(), snapshot.clone(), m)
        })
        .add_handler_deferred(|m| {
            DeleteProductRequestHandler(catalog.clone(), snapshot.clone(), m)
        })
        .add_handler_deferred(|m| {
            ResetCatalogRequestHandler(catalog.clone(), snapshot.clone(), m)
        })
        .add_handler_deferred(|m| {
            HydrateCatalogRequestHandler(catalog.clone(), snapshot.clone(), remote.clone(), m)
        })
        .subscribe_fn(|event: ProductAddedEvent| {
            log::info!("Added: {} - {}", event.0.title, event.0.id);
        })
        .subscribe_fn(|event: ProductDeletedEvent| {
            log::info!("Deleted: {} - {}", event.0.title, event.0.id);
        })
        .subscribe_fn(|event: CatalogClearedEvent| {
            log::info!("Cleared {} products", event.0);
        })
        .subscribe_fn(|event: CatalogHydratedEvent| match event.0 {
            HydrateOutcome::FromSnapshot(count) => {
                log::info!("Hydrated {} products from the snapshot", count)
            }
            HydrateOutcome::FromRemote(count) => {
                log::info!("Hydrated {} products from the remote source", count)
            }
            HydrateOutcome::Unavailable => {}
        })
        .build()
}

fn repl(mediator: &mut DefaultMediator) -> anyhow::Result<()> {
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        let (action, rest) = match line.split_once(char::is_whitespace) {
            Some((action, rest)) => (action, rest.trim()),
            None => (line, ""),
        };

        match action {
            "" => {}
            "add" => handle_add(mediator)?,
            "delete" => handle_delete(mediator, rest),
            "reset" => {
                let removed: usize = mediator
                    .send(ResetCatalogCommand)
                    .expect("Unable to send command");
                println!("Removed {} products.", removed);
                render_current(mediator);
            }
            "list" => render_current(mediator),
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("Unknown command '{}'. Type 'help' for the list.", other),
        }
    }

    Ok(())
}

/// The form analog: prompts for the five fields in order, then submits.
fn handle_add(mediator: &mut DefaultMediator) -> anyhow::Result<()> {
    let title = prompt("Name")?;
    let description = prompt("Description")?;
    let image = prompt("Image URL")?;
    let price_text = prompt("Price")?;
    let brand_text = prompt("Brand (optional)")?;

    let price = match price_text.parse::<f64>() {
        Ok(price) => price,
        Err(_) => {
            println!("Price must be a positive number");
            return Ok(());
        }
    };

    let command = AddProductCommand {
        title,
        description,
        image,
        price,
        brand: Some(brand_text).filter(|brand| !brand.is_empty()),
    };

    match mediator.send(command).expect("Unable to send command") {
        Ok(_) => {
            println!("Product added successfully!");
            render_current(mediator);
        }
        Err(e) => println!("{}", e),
    }

    Ok(())
}

fn handle_delete(mediator: &mut DefaultMediator, rest: &str) {
    let id = match rest.parse::<u64>() {
        Ok(id) => id,
        Err(_) => {
            println!("Usage: delete <id>");
            return;
        }
    };

    let removed: Option<Product> = mediator
        .send(DeleteProductCommand(id))
        .expect("Unable to send command");

    match removed {
        Some(product) => {
            println!("Deleted '{}'.", product.title);
            render_current(mediator);
        }
        None => println!("No product with id {}.", id),
    }
}

fn render_current(mediator: &mut DefaultMediator) {
    let products: Vec<Product> = mediator
        .send(GetAllProductsRequest)
        .expect("Unable to send command");
    println!("\n{}", render_catalog(&products));
}

fn print_help() {
    println!("Commands: add, delete <id>, reset, list, help, quit");
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}
