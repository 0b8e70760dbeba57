use tokio_util::sync::CancellationToken;

use typecast_engine::Converter;

use crate::config::{FileConfig, ServeArgs};
use crate::error::CliError;

pub async fn run(args: &ServeArgs, config: &FileConfig, converter: Converter) -> Result<(), CliError> {
    let host = args.host.clone().unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    tracing::info!(%host, port, "typecast server starting");

    let token = CancellationToken::new();
    let api_token = token.clone();
    let mut api_handle = tokio::spawn(async move {
        typecast_api_server::run(&host, port, converter, api_token).await
    });

    // A bind failure ends the server task before any signal arrives.
    tokio::select! {
        joined = &mut api_handle => {
            return match joined {
                Ok(result) => result.map_err(CliError::from),
                Err(e) => Err(CliError::Io(std::io::Error::other(e))),
            };
        }
        signal = tokio::signal::ctrl_c() => signal?,
    }

    tracing::info!("shutting down...");
    token.cancel();

    match api_handle.await {
        Ok(result) => result?,
        Err(e) => return Err(CliError::Io(std::io::Error::other(e))),
    }
    tracing::info!("server stopped");
    Ok(())
}
