//! Terminal host: browse categories and compose WhatsApp orders.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use maskshop_catalog::{ContactNumber, load_pages};
use maskshop_core::ProductId;
use maskshop_ordering::Toggle;

use crate::controller::PageController;
use crate::navigator::Navigator;
use crate::storefront::Storefront;

#[derive(Parser, Debug)]
#[command(name = "maskshop")]
#[command(about = "Masquerade mask catalogue with WhatsApp ordering")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// JSON catalogue file replacing the built-in collections
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Send every order to this WhatsApp number instead of the category's own
    #[arg(long, global = true)]
    pub contact: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the categories on the landing page
    List,

    /// Show one category page
    Show {
        /// Category slug, e.g. `basic-masks`
        category: String,
    },

    /// Order a single product
    Order {
        category: String,
        /// Product id, e.g. `bm-01`
        product: String,
    },

    /// Select several products and order them together
    Batch {
        category: String,
        #[arg(required = true)]
        products: Vec<String>,
    },

    /// Drive a category page interactively from stdin
    Session { category: String },
}

/// Built-in collections, or a catalogue file, with an optional contact override.
pub fn build_storefront(catalog: Option<&Path>, contact: Option<&str>) -> anyhow::Result<Storefront> {
    let store = match catalog {
        Some(path) => {
            let pages = load_pages(path)
                .with_context(|| format!("failed to load catalogue from {}", path.display()))?;
            Storefront::from_pages(pages)?
        }
        None => Storefront::builtin().context("built-in collections are invalid")?,
    };

    match contact {
        Some(raw) => {
            let contact = ContactNumber::new(raw).context("invalid --contact")?;
            Ok(store.with_contact(contact))
        }
        None => Ok(store),
    }
}

/// Run a non-interactive command.
pub fn run<W: Write, N: Navigator>(
    cli: &Cli,
    store: &Storefront,
    mut out: W,
    navigator: N,
) -> anyhow::Result<()> {
    match &cli.command {
        Command::List => list(store, cli.json, &mut out),
        Command::Show { category } => show(store, category, cli.json, &mut out),
        Command::Order { category, product } => {
            let mut page = store.open(category, navigator)?;
            let link = page
                .order_one(product)
                .with_context(|| format!("no product `{product}` in `{category}`"))?;
            if cli.json {
                serde_json::to_writer_pretty(&mut out, &link)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", link.text)?;
            }
            Ok(())
        }
        Command::Batch { category, products } => {
            let mut page = store.open(category, navigator)?;
            for raw in products {
                let id: ProductId = raw.parse()?;
                if page.is_selected(id.as_str()) {
                    continue;
                }
                page.toggle(&id);
                if !page.catalog().contains(&id) {
                    tracing::warn!(category = %category, product = %id, "not in this category");
                }
            }
            match page.order_selected() {
                Some(link) if cli.json => {
                    serde_json::to_writer_pretty(&mut out, &link)?;
                    writeln!(out)?;
                }
                Some(link) => writeln!(out, "{}", link.text)?,
                None => writeln!(out, "Nothing to order: none of the products are in `{category}`.")?,
            }
            Ok(())
        }
        Command::Session { category } => {
            let page = store.open(category, navigator)?;
            let stdin = std::io::stdin();
            session(page, stdin.lock(), out)
        }
    }
}

fn list<W: Write>(store: &Storefront, json: bool, out: &mut W) -> anyhow::Result<()> {
    let cards = store.index()?;
    if json {
        serde_json::to_writer_pretty(&mut *out, &cards)?;
        writeln!(out)?;
        return Ok(());
    }
    for card in cards {
        let link = card.page_path().unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "{:<20} {:<20} {:>9} {:>3} items  {}",
            card.id,
            card.name,
            card.price.to_string(),
            card.items.len(),
            link
        )?;
    }
    Ok(())
}

fn show<W: Write>(store: &Storefront, category: &str, json: bool, out: &mut W) -> anyhow::Result<()> {
    let page = store.page(category)?;
    if json {
        serde_json::to_writer_pretty(&mut *out, page)?;
        writeln!(out)?;
        return Ok(());
    }

    let config = page.config();
    writeln!(out, "{}: {}", config.title, config.tagline)?;
    let stats = crate::summary::PageStats::of(page.catalog());
    let price = stats.price.map(|band| band.to_string()).unwrap_or_default();
    writeln!(out, "{} designs, {} ({})", stats.designs, price, stats.price_caption())?;
    for product in page.catalog() {
        writeln!(
            out,
            "  {:<6} {:<6} {:<26} {:>8}  {}",
            product.id_typed(),
            product.code(),
            product.name(),
            product.price().to_string(),
            product.description()
        )?;
    }
    Ok(())
}

const SESSION_HELP: &str = "commands: toggle <id> | clear | order <id> | checkout | summary | guide | help | quit";

/// Line-oriented page session: each input line is one user intent.
pub fn session<N: Navigator, R: BufRead, W: Write>(
    mut page: PageController<N>,
    input: R,
    mut out: W,
) -> anyhow::Result<()> {
    writeln!(out, "{}: {}", page.config().title, page.config().tagline)?;
    if page.guide_visible() {
        writeln!(out, "{SESSION_HELP}")?;
    }

    for line in input.lines() {
        let line = line.context("failed to read session input")?;
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            continue;
        };
        let arg = words.next();

        match (verb, arg) {
            ("toggle", Some(raw)) => match raw.parse::<ProductId>() {
                Ok(id) => {
                    let verb = match page.toggle(&id) {
                        Toggle::Added => "added",
                        Toggle::Removed => "removed",
                    };
                    writeln!(out, "{verb} {id}")?;
                    print_summary(&page, &mut out)?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            ("clear", None) => {
                page.clear();
                print_summary(&page, &mut out)?;
            }
            ("order", Some(id)) => match page.order_one(id) {
                Some(link) => writeln!(out, "{}", link.text)?,
                None => writeln!(out, "no product `{id}` on this page")?,
            },
            ("checkout", None) => match page.order_selected() {
                Some(link) => writeln!(out, "{}", link.text)?,
                None => writeln!(out, "nothing selected")?,
            },
            ("summary", None) => print_summary(&page, &mut out)?,
            ("guide" | "help", None) => {
                page.show_guide();
                writeln!(out, "{SESSION_HELP}")?;
            }
            ("quit" | "exit", None) => break,
            _ => writeln!(out, "unrecognized: {line}\n{SESSION_HELP}")?,
        }
    }
    Ok(())
}

fn print_summary<N: Navigator, W: Write>(page: &PageController<N>, out: &mut W) -> anyhow::Result<()> {
    let summary = page.summary();
    if summary.is_visible() {
        writeln!(out, "{} | {}", summary.label, summary.total_price)?;
    } else {
        writeln!(out, "nothing selected")?;
    }
    Ok(())
}
