use anyhow::{Context, Result};
use rudder_sync::{Outcome, SOURCE_ID_KEY, SourceIdStore};
use rudder_sync_api::{RudderClient, StatusReply};
use rudder_sync_store::ArtifactStore;

/// Check the latest sync run for a source and classify the result.
///
/// The raw payload is captured to the artifact store before classification,
/// so failed and incomplete runs stay inspectable. A capture failure is a
/// warning; the classification stands on its own.
pub async fn run(
    client: &RudderClient,
    store: &ArtifactStore,
    source_id: Option<&str>,
) -> Result<Outcome> {
    let source_id = match source_id {
        Some(id) => id.to_owned(),
        None => store
            .get(SOURCE_ID_KEY)
            .context("could not read the saved source id")?
            .context("no --source-id given and no source id saved by a previous trigger")?,
    };

    let reply = match client.source_status(&source_id).await {
        Ok(reply) => reply,
        Err(e) => {
            eprintln!("Source {source_id} status check failed due to: {e}");
            return Ok(Outcome::BadRequest);
        }
    };

    let (raw, payload) = match reply {
        StatusReply::Ok { raw, payload } => (raw, payload),
        StatusReply::HttpError(code) => {
            let outcome = Outcome::from_status_http(code).unwrap_or(Outcome::BadRequest);
            match outcome {
                Outcome::InvalidCredentials => {
                    eprintln!("Status check for source {source_id} rejected: invalid access token");
                }
                Outcome::InvalidSourceId => {
                    eprintln!("Status check failed: source {source_id} is unknown (HTTP {code})");
                }
                _ => {
                    eprintln!("Status check for source {source_id} failed. Error code: {code}");
                }
            }
            return Ok(outcome);
        }
    };

    match store.write_response(&source_id, &raw) {
        Ok(path) => println!("Saved raw status response to {}", path.display()),
        Err(e) => eprintln!("warning: could not save raw status response: {e}"),
    }

    let outcome = payload.outcome();
    match outcome {
        Outcome::Success => {
            println!("Sync for source {source_id} finished successfully");
        }
        Outcome::RunErrored => {
            println!(
                "Sync for source {source_id} failed with error: {}",
                payload.error.as_deref().unwrap_or_default()
            );
        }
        Outcome::StillIncomplete => {
            println!("Sync for source {source_id} is incomplete. Status: {}", payload.status);
        }
        _ => {
            println!(
                "Sync for source {source_id} reported unrecognized status: {}",
                payload.status
            );
        }
    }

    Ok(outcome)
}
