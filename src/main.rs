use clap::Parser;
use spendlog::application::{self, ConfigService, RecordService};
use spendlog::cli::{
    format_category_list, format_company_list, format_item_list, AddCommands, Cli, Commands,
};
use spendlog::error::SpendlogError;
use spendlog::infrastructure::FileStore;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), SpendlogError> {
    match cli.command {
        Some(Commands::Init { path, currency }) => application::init::init(&path, &currency),
        Some(Commands::Config { key, value, list }) => {
            let store = FileStore::discover()?;
            let service = ConfigService::new(store);

            if list {
                let config = service.list()?;
                println!("currency = {}", config.currency);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: spendlog config [--list | <key> [<value>]]");
                println!("Valid keys: currency, created");
                Ok(())
            }
        }
        Some(Commands::Add { entry }) => {
            let store = FileStore::discover()?;
            let config = store.load_config()?;
            let service = RecordService::new(store);

            match entry {
                AddCommands::Category {
                    key,
                    name,
                    color,
                    description,
                } => {
                    let category = service.add_category(&key, &name, &color, description)?;
                    println!("Added category {} ({})", category.name, category.key);
                }
                AddCommands::Company {
                    key,
                    name,
                    category,
                    description,
                } => {
                    let company = service.add_company(&key, &name, &category, description)?;
                    println!(
                        "Added company {} ({}) in {}",
                        company.name, company.key, company.category.name
                    );
                }
                AddCommands::Item {
                    name,
                    price,
                    company,
                } => {
                    let item = service.add_item(&name, price, &company)?;
                    println!(
                        "Recorded {} {}{:.2} from {} on {}",
                        item.name,
                        config.currency,
                        item.price,
                        item.company.name,
                        item.date_string()
                    );
                }
            }
            Ok(())
        }
        Some(Commands::List {
            target,
            from,
            to,
            limit,
        }) => {
            let store = FileStore::discover()?;

            match target.as_str() {
                "items" => {
                    let config = store.load_config()?;
                    let from = from
                        .map(|s| application::parse_display_date(&s))
                        .transpose()?;
                    let to = to.map(|s| application::parse_display_date(&s)).transpose()?;
                    let items =
                        application::list_items(&store, from, to, Some(limit.unwrap_or(10)))?;
                    println!("{}", format_item_list(&items, &config.currency).trim_end());
                    Ok(())
                }
                "companies" => {
                    let companies = application::list_companies(&store)?;
                    println!("{}", format_company_list(&companies).trim_end());
                    Ok(())
                }
                "categories" => {
                    let categories = application::list_categories(&store)?;
                    println!("{}", format_category_list(&categories).trim_end());
                    Ok(())
                }
                other => Err(SpendlogError::Config(format!(
                    "Unknown list target: '{}'. Valid targets are: items, companies, categories",
                    other
                ))),
            }
        }
        Some(Commands::Export { path }) => {
            let store = FileStore::discover()?;
            let written = application::export(&store, path.as_deref())?;
            println!("Exported ledger to {}", written.display());
            Ok(())
        }
        Some(Commands::Import { path }) => {
            let store = FileStore::discover()?;
            let summary = application::import(&store, &path)?;
            println!(
                "Imported {} categories, {} companies, {} items",
                summary.categories, summary.companies, summary.items
            );
            Ok(())
        }
        None => {
            println!("spendlog - Terminal purchase ledger");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
