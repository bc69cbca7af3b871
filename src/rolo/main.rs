use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use rolo::api::{ConfigAction, ContactBookApi};
use rolo::config::RoloConfig;
use rolo::error::{Result, RoloError};
use rolo::filter::{CategoryFilter, ContactFilter};
use rolo::model::ContactId;
use rolo::store::http::HttpRemote;
use std::path::PathBuf;

mod args;
mod print;

use args::{Cli, Commands, ContactFields};
use print::{print_contact_detail, print_contacts, print_messages};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        print_error(&e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let _logger = init_logging(cli.verbose);

    let config_dir = config_dir()?;
    let config = RoloConfig::load(&config_dir).unwrap_or_default();
    let api_url =
        std::env::var("ROLO_API_URL").unwrap_or_else(|_| config.get_api_url().to_string());

    let remote = HttpRemote::new(&api_url)?;
    let mut api = ContactBookApi::new(remote, config_dir);

    match cli.command {
        Some(Commands::List { category, search }) => {
            handle_list(&mut api, category, search).await
        }
        Some(Commands::Add { fields }) => handle_add(&mut api, fields).await,
        Some(Commands::View { id }) => handle_view(&mut api, id).await,
        Some(Commands::Edit { id, fields }) => handle_edit(&mut api, id, fields).await,
        Some(Commands::Delete { id, yes }) => handle_delete(&mut api, id, yes).await,
        Some(Commands::Config { key, value }) => handle_config(&api, key, value),
        None => handle_list(&mut api, CategoryFilter::All, None).await,
    }
}

fn init_logging(verbose: bool) -> Option<flexi_logger::LoggerHandle> {
    let spec = if verbose { "debug" } else { "warn" };
    flexi_logger::Logger::try_with_env_or_str(spec)
        .and_then(|logger| logger.log_to_stderr().start())
        .ok()
}

fn config_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("ROLO_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let dirs = ProjectDirs::from("com", "rolo", "rolo")
        .ok_or_else(|| RoloError::Store("Could not determine config dir".to_string()))?;
    Ok(dirs.config_dir().to_path_buf())
}

async fn handle_list(
    api: &mut ContactBookApi<HttpRemote>,
    category: CategoryFilter,
    search: Option<String>,
) -> Result<()> {
    api.load().await?;
    let filter = ContactFilter {
        category,
        query: search,
    };
    let result = api.list(&filter)?;
    print_contacts(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

async fn handle_add(api: &mut ContactBookApi<HttpRemote>, fields: ContactFields) -> Result<()> {
    let result = api.add(&fields.into_patch()).await?;
    print_messages(&result.messages);
    Ok(())
}

async fn handle_view(api: &mut ContactBookApi<HttpRemote>, id: String) -> Result<()> {
    api.load().await?;
    let id = ContactId::new(id);
    match api.view(&id) {
        Ok(result) => {
            if let Some(contact) = result.listed.first() {
                print_contact_detail(contact);
            }
            print_messages(&result.messages);
            Ok(())
        }
        Err(RoloError::NotFound(id)) => {
            // Fall back to the listing, the home view.
            let listing = api.list(&ContactFilter::default())?;
            print_contacts(&listing.listed);
            Err(RoloError::NotFound(id))
        }
        Err(e) => Err(e),
    }
}

async fn handle_edit(
    api: &mut ContactBookApi<HttpRemote>,
    id: String,
    fields: ContactFields,
) -> Result<()> {
    let id = ContactId::new(id);
    let result = api.edit(&id, &fields.into_patch()).await?;
    print_messages(&result.messages);
    Ok(())
}

async fn handle_delete(api: &mut ContactBookApi<HttpRemote>, id: String, yes: bool) -> Result<()> {
    api.load().await?;
    let id = ContactId::new(id);
    let result = api.delete(&id, yes).await?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    api: &ContactBookApi<HttpRemote>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.config(action)?;
    if let Some(config) = &result.config {
        println!("api-url = {}", config.get_api_url());
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_error(err: &RoloError) {
    match err {
        RoloError::Validation(errors) => {
            eprintln!("{}", "Validation failed:".red());
            for (field, message) in errors.iter() {
                eprintln!("  {}: {}", field.to_string().yellow(), message);
            }
        }
        _ => eprintln!("{} {}", "Error:".red(), err),
    }
}
