use clap::Parser;
use clipvault::api::ClipperApi;
use clipvault::error::Result;
use clipvault::model::ClipContext;
use clipvault::store::fs::FileStore;

mod args;
use args::{Cli, Commands};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let store_path = match cli.store {
        Some(path) => path,
        None => FileStore::default_location()?,
    };
    let mut api = ClipperApi::new(FileStore::new(store_path));

    match cli.command {
        Commands::Show => {
            let settings = api.load_settings().await?;
            println!("vault:    {}", settings.vault_name);
            println!("folder:   {}", settings.folder_template);
            println!("advanced: {}", settings.advanced_formatting);
            println!("template: {}", settings.content_template.replace('\n', "\\n"));
        }
        Commands::Set {
            vault,
            folder,
            advanced,
            template,
        } => {
            let mut settings = api.load_settings().await?;
            if let Some(vault) = vault {
                settings.vault_name = vault;
            }
            if let Some(folder) = folder {
                settings.folder_template = folder;
            }
            if let Some(template) = template {
                settings.content_template = template;
            }
            // Applied after the template so turning advanced off always
            // reverts to the default format.
            if let Some(enabled) = advanced {
                settings.set_advanced_formatting(enabled);
            }
            api.save_settings(&settings).await?;
            println!(
                "Settings saved. Notes will go to the vault \"{}\" using \"{}\".",
                settings.vault_name, settings.folder_template
            );
        }
        Commands::Test => {
            println!("{}", api.test_clip().await?.to_uri());
        }
        Commands::Clip {
            title,
            url,
            content,
            date,
        } => {
            let ctx = match date {
                Some(date) => ClipContext::with_date(title, url, content, date),
                None => ClipContext::new(title, url, content),
            };
            println!("{}", api.clip(&ctx).await?.to_uri());
        }
    }

    Ok(())
}
