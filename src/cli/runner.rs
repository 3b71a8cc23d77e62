//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, PageArgs};
use crate::client::RestClient;
use crate::config::{load_config, RestConfig};
use crate::error::{Result, ResultExt};
use crate::pagination::{PageStream, Paginator};
use crate::types::Snowflake;
use chrono::Utc;
use futures::{StreamExt, TryStreamExt};
use serde::Serialize;
use std::io::Write;
use std::time::Instant;
use tracing::{error, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, printing records to stdout
    ///
    /// Stdout is locked per record, never across a request.
    pub async fn run(&self) -> Result<()> {
        self.run_to(&mut std::io::stdout()).await
    }

    /// Run the CLI command, writing one JSON document per line to `out`
    pub async fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let config = self.load_config()?;
        let client = RestClient::from_config(&config)?;

        match &self.cli.command {
            Commands::Me => {
                let user = client.self_user().await?;
                write_line(out, &user)?;
            }
            Commands::Guilds { after, page } => {
                let paginator = Paginator::after(page_size(&config, page))
                    .start(after.unwrap_or(Snowflake::ZERO));
                let guilds = client.guilds_with(paginator)?;
                self.print_stream("guilds", guilds, page, out).await?;
            }
            Commands::Members { guild, after, page } => {
                let paginator = Paginator::after(page_size(&config, page))
                    .start(after.unwrap_or(Snowflake::ZERO));
                let members = client.guild(*guild).members_with(paginator)?;
                self.print_stream("members", members, page, out).await?;
            }
            Commands::Messages {
                channel,
                before,
                page,
            } => {
                let start = before.unwrap_or_else(|| Snowflake::from_timestamp(Utc::now()));
                let paginator = Paginator::before(page_size(&config, page)).start(start);
                let messages = client.channel(*channel).messages_with(paginator)?;
                self.print_stream("messages", messages, page, out).await?;
            }
        }

        Ok(())
    }

    /// Load config from the `--config` file, or defaults, then the environment
    fn load_config(&self) -> Result<RestConfig> {
        let config = match &self.cli.config {
            Some(path) => load_config(path)?,
            None => RestConfig::default(),
        };
        let config = config.with_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Drain a record stream to `out`, honoring `--max-records`
    async fn print_stream<T: Serialize + Send + 'static, W: Write>(
        &self,
        what: &str,
        stream: PageStream<T>,
        page: &PageArgs,
        out: &mut W,
    ) -> Result<()> {
        let start = Instant::now();
        let mut stream = match page.max_records {
            Some(max) => stream.take(max).boxed(),
            None => stream,
        };

        let mut count = 0usize;
        loop {
            let record = match stream.try_next().await {
                Ok(Some(record)) => record,
                Ok(None) => break,
                Err(e) => {
                    error!("Listing {} failed after {} records: {}", what, count, e);
                    return Err(e);
                }
            };
            write_line(out, &record)?;
            count += 1;
        }

        info!(
            "Listed {} {} in {:.2}s",
            count,
            what,
            start.elapsed().as_secs_f64()
        );
        Ok(())
    }
}

fn page_size(config: &RestConfig, page: &PageArgs) -> u32 {
    page.page_size.unwrap_or(config.page_size)
}

/// Write one JSON document and its newline in a single `write_all`
fn write_line<T: Serialize, W: Write>(out: &mut W, value: &T) -> Result<()> {
    let mut line = serde_json::to_vec(value)?;
    line.push(b'\n');
    out.write_all(&line).context("Failed to write output")
}
