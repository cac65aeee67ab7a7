use anyhow::Result;
use clap::{Parser, Subcommand};
use sobject_rest::{Client, ClientError, Error as RestError};

#[derive(Parser)]
#[command(name = "sobject")]
#[command(about = "Look up and delete records over the REST API")]
struct Cli {
    /// Instance base URL (e.g. https://example.my.salesforce.com)
    #[arg(long, env = "SOBJECT_INSTANCE_URL", global = true)]
    instance_url: Option<String>,

    /// REST API version
    #[arg(long, default_value = sobject_rest::DEFAULT_API_VERSION, global = true)]
    api_version: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a record by type and ID
    Get { sobject: String, id: String },
    /// Run a query and print its first record
    First { soql: String },
    /// Delete a record by type and ID
    Delete { sobject: String, id: String },
}

/// Turns a client failure into a user-facing error, keeping the service's
/// `[code] message` rendering intact.
fn describe(err: ClientError, target: &str) -> anyhow::Error {
    if let Some(rest) = err.rest() {
        match rest {
            RestError::RecordNotFound(_) => tracing::debug!("{} not found", target),
            RestError::Request(e) => tracing::debug!(code = e.error_code(), "service rejected request"),
        }
        return anyhow::anyhow!("{}: {}", target, rest);
    }
    anyhow::Error::new(err).context(format!("{}: request failed", target))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sobject_rest=warn".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let instance_url = cli
        .instance_url
        .ok_or_else(|| anyhow::anyhow!("--instance-url or SOBJECT_INSTANCE_URL is required"))?;
    let client = Client::with_api_version(&instance_url, &cli.api_version)?;

    match &cli.command {
        Commands::Get { sobject, id } => {
            let target = format!("{} {}", sobject, id);
            let record: serde_json::Value = client
                .find(sobject, id)
                .await
                .map_err(|e| describe(e, &target))?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::First { soql } => {
            let record: serde_json::Value = client
                .find_first(soql)
                .await
                .map_err(|e| describe(e, "query"))?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Delete { sobject, id } => {
            let target = format!("{} {}", sobject, id);
            client
                .destroy(sobject, id)
                .await
                .map_err(|e| describe(e, &target))?;
            println!("Deleted {}", target);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use sobject_rest::{RecordNotFound, RequestError};

    use super::*;

    #[test]
    fn request_error_keeps_canonical_rendering() {
        let err = ClientError::from(RequestError::new("INVALID_FIELD", "Field does not exist"));
        assert_eq!(
            describe(err, "Account 001").to_string(),
            "Account 001: [INVALID_FIELD] Field does not exist"
        );
    }

    #[test]
    fn empty_code_renders_empty_brackets() {
        let err = ClientError::from(RequestError::new("", "timeout"));
        assert_eq!(describe(err, "query").to_string(), "query: [] timeout");
    }

    #[test]
    fn not_found_names_the_target() {
        let err = ClientError::from(RecordNotFound);
        assert_eq!(
            describe(err, "Account 001").to_string(),
            "Account 001: record not found"
        );
    }

    #[test]
    fn transport_fault_keeps_cause_in_chain() {
        let err = ClientError::HttpStatus {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        let described = describe(err, "Account 001");
        assert_eq!(described.to_string(), "Account 001: request failed");
        assert_eq!(
            format!("{:#}", described),
            "Account 001: request failed: Request failed with status 502"
        );
        assert!(matches!(
            described.downcast_ref::<ClientError>(),
            Some(ClientError::HttpStatus { status: 502, .. })
        ));
    }

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::try_parse_from([
            "sobject",
            "--instance-url",
            "https://example.my.salesforce.com",
            "get",
            "Account",
            "001",
        ])
        .unwrap();
        assert_eq!(cli.api_version, sobject_rest::DEFAULT_API_VERSION);
        assert!(matches!(
            cli.command,
            Commands::Get { ref sobject, ref id } if sobject == "Account" && id == "001"
        ));
    }
}
