use std::sync::Arc;

use statline_core::{AuthClient, ReqwestHttpClient, DEFAULT_API_BASE};

use crate::cli::{Cli, LoginArgs};
use crate::error::CliError;
use crate::prompt;

pub async fn run(cli: &Cli, args: &LoginArgs) -> Result<(), CliError> {
    let api_base = cli
        .api_base
        .clone()
        .unwrap_or_else(|| String::from(DEFAULT_API_BASE));
    let auth = AuthClient::new(Arc::new(ReqwestHttpClient::new()), api_base, cli.timeout_ms);

    let client_id = auth
        .request_code(&args.client_name, &args.phone_number)
        .await?;

    let code = prompt::line("Enter the verification code shown on your primary device:")?;
    let credential = auth
        .verify_code(&client_id, &args.phone_number, &code)
        .await?;

    println!("export STATLINE_API_KEY={}", credential.api_key);
    println!("export STATLINE_AUTH_TOKEN={}", credential.auth_token);
    println!("Store these somewhere safe; the service will not show them again.");
    Ok(())
}
