/*
[INPUT]:  Token subcommands and the configured storage
[OUTPUT]: Stored, shown (masked) or removed access token
[POS]:    CLI token maintenance - the owner of the token lifecycle
[UPDATE]: When storage keys or token display change
*/

use anyhow::{Result, bail};
use console::style;
use todo_adapter::AccessToken;
use todo_form::AppConfig;
use todo_form::context::open_storage;
use tracing::info;

pub enum TokenAction {
    Set(String),
    Show,
    Clear,
}

pub async fn run_token(config: &AppConfig, action: TokenAction) -> Result<()> {
    let storage = open_storage(config).await?;
    let key = config.storage.token_key.as_str();

    match action {
        TokenAction::Set(raw) => {
            let Some(token) = AccessToken::new(raw) else {
                bail!("token must not be blank");
            };
            storage.set_item(key, token.as_str()).await?;
            info!(path = %storage.path().display(), "access token stored");
            println!("{} token saved as {}", style("✓").green(), token.masked());
        }
        TokenAction::Show => match storage.access_token(key).await {
            Some(token) => println!("{} = {}", key, token.masked()),
            None => println!("{}", style(format!("no token stored under '{key}'")).yellow()),
        },
        TokenAction::Clear => {
            if storage.remove_item(key).await? {
                println!("{} token removed", style("✓").green());
            } else {
                println!("{}", style("no token to remove").yellow());
            }
        }
    }
    Ok(())
}
