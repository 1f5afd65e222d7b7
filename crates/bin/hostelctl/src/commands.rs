//! Command execution. Every command produces a JSON document for stdout.

use std::sync::Arc;

use hostel_app::error::ApiError;
use hostel_app::navigator::{NavigationError, Navigator};
use hostel_app::ports::HttpTransport;
use hostel_app::services::{Resource, ResourceService};
use serde::Serialize;
use serde_json::{Value, json};

use crate::cli::{BookingAction, Command, CrudAction, RoomAction};

/// Command failures.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("invalid record JSON")]
    InvalidRecord(#[source] serde_json::Error),

    #[error("failed to render output")]
    Render(#[source] serde_json::Error),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// Run `command` against the API behind `navigator`.
///
/// # Errors
///
/// Returns [`CommandError`] when the input JSON is malformed or the API call
/// fails.
pub async fn run<T>(command: Command, navigator: &Navigator<T>) -> Result<Value, CommandError>
where
    T: HttpTransport + Send + Sync,
{
    let client = navigator.client();
    match command {
        Command::Rooms { action } => match action {
            RoomAction::Crud(action) => crud(client.rooms(), action).await,
            RoomAction::Available => render(&client.rooms().available().await?),
            RoomAction::Stats => render(&client.rooms().stats().await?),
        },
        Command::Guests { action } => crud(client.guests(), action).await,
        Command::Bookings { action } => match action {
            BookingAction::Crud(action) => crud(client.bookings(), action).await,
            BookingAction::Today => render(&client.bookings().today_stats().await?),
        },
        Command::Open { path } => render(&navigator.open(&path).await?),
        Command::Routes => Ok(routes(navigator)),
    }
}

async fn crud<T, R>(
    service: &ResourceService<Arc<T>, R>,
    action: CrudAction,
) -> Result<Value, CommandError>
where
    T: HttpTransport + Send + Sync,
    R: Resource,
{
    match action {
        CrudAction::List => render(&service.list().await?),
        CrudAction::Get { id } => render(&service.get(&id).await?),
        CrudAction::Create { json } => {
            let record: R::Record = parse_record(&json)?;
            render(&service.create(&record).await?)
        }
        CrudAction::Update { id, json } => {
            let record: R::Record = parse_record(&json)?;
            render(&service.update(&id, &record).await?)
        }
        CrudAction::Delete { id } => {
            service.delete(&id).await?;
            Ok(json!({ "deleted": id }))
        }
    }
}

fn parse_record<D: serde::de::DeserializeOwned>(raw: &str) -> Result<D, CommandError> {
    serde_json::from_str(raw).map_err(CommandError::InvalidRecord)
}

fn render<S: Serialize>(value: &S) -> Result<Value, CommandError> {
    serde_json::to_value(value).map_err(CommandError::Render)
}

fn routes<T: HttpTransport + Send + Sync>(navigator: &Navigator<T>) -> Value {
    navigator
        .routes()
        .entries()
        .iter()
        .map(|entry| {
            json!({
                "path": entry.pattern.as_str(),
                "page": entry.page.name(),
                "view": entry.view.name(),
            })
        })
        .collect()
}
