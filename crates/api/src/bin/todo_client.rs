//! Smoke-test client: runs every ToDo RPC once against a live server.
//!
//! Create → Read → Update → ReadAll → Delete, logging each response and
//! exiting non-zero on the first failure.

use anyhow::Context;
use chrono::Utc;
use clap::Parser;

use todo_api::convert::timestamp_to_proto;
use todo_api::proto::to_do_service_client::ToDoServiceClient;
use todo_api::proto::{
    CreateRequest, DeleteRequest, ReadAllRequest, ReadRequest, ToDo, UpdateRequest,
};
use todo_api::telemetry::{self, LogFormat};
use todo_core::version::API_VERSION;

/// Exercise the ToDo gRPC service end to end.
#[derive(Parser, Debug)]
#[command(name = "todo-client", version)]
struct Args {
    /// Server endpoint.
    #[arg(long, env = "TODO_SERVER", default_value = "http://127.0.0.1:9090")]
    server: String,

    /// API version sent with every request.
    #[arg(long, default_value = API_VERSION)]
    api: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing(LogFormat::Text);
    let args = Args::parse();

    let mut client = ToDoServiceClient::connect(args.server.clone())
        .await
        .with_context(|| format!("did not connect to {}", args.server))?;

    let now = Utc::now();
    let stamp = now.to_rfc3339();
    let insert_at = timestamp_to_proto(now)?;

    // Create
    let created = client
        .create(CreateRequest {
            api: args.api.clone(),
            to_do: Some(ToDo {
                id: 0,
                title: format!("title ({stamp})"),
                description: format!("description ({stamp})"),
                insert_at: Some(insert_at.clone()),
                update_at: Some(insert_at),
            }),
        })
        .await
        .context("Create failed")?
        .into_inner();
    tracing::info!(?created, "Create result");
    let id = created.id;

    // Read
    let read = client
        .read(ReadRequest {
            api: args.api.clone(),
            id,
        })
        .await
        .context("Read failed")?
        .into_inner();
    tracing::info!(?read, "Read result");
    let current = read.to_do.context("Read returned no to_do")?;

    // Update
    let updated = client
        .update(UpdateRequest {
            api: args.api.clone(),
            to_do: Some(ToDo {
                description: format!("{} + updated", current.description),
                update_at: Some(timestamp_to_proto(Utc::now())?),
                ..current
            }),
        })
        .await
        .context("Update failed")?
        .into_inner();
    tracing::info!(?updated, "Update result");

    // ReadAll
    let all = client
        .read_all(ReadAllRequest {
            api: args.api.clone(),
        })
        .await
        .context("ReadAll failed")?
        .into_inner();
    tracing::info!(count = all.to_dos.len(), "ReadAll result");

    // Delete
    let deleted = client
        .delete(DeleteRequest { api: args.api, id })
        .await
        .context("Delete failed")?
        .into_inner();
    tracing::info!(?deleted, "Delete result");

    Ok(())
}
