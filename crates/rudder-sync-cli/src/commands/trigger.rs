use rudder_sync::{Outcome, SOURCE_ID_KEY, SourceIdStore};
use rudder_sync_api::RudderClient;
use rudder_sync_store::ArtifactStore;

/// Start a sync run and classify the result.
///
/// On acceptance the source id is saved so a later `status` invocation can
/// omit `--source-id`. A save failure downgrades to a warning; the trigger
/// itself already succeeded.
pub async fn run(client: &RudderClient, store: &ArtifactStore, source_id: &str) -> Outcome {
    let http_status = match client.start_sync(source_id).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Trigger sync for source {source_id} failed due to: {e}");
            return Outcome::UnknownError;
        }
    };

    let outcome = Outcome::from_trigger_http(http_status);
    match outcome {
        Outcome::Success => {
            println!("Trigger sync for source {source_id} successful");
            if let Err(e) = store.set(SOURCE_ID_KEY, source_id) {
                eprintln!("warning: could not save source id for later status checks: {e}");
            }
        }
        Outcome::SyncAlreadyRunning => {
            eprintln!("A sync for source {source_id} is already running; no new run was started");
        }
        Outcome::InvalidCredentials => {
            eprintln!("Trigger sync for source {source_id} rejected: invalid access token");
        }
        Outcome::InvalidSourceId => {
            eprintln!("Trigger sync failed: source {source_id} is unknown (HTTP {http_status})");
        }
        _ => {
            eprintln!("Trigger sync for source {source_id} failed. Error code: {http_status}");
        }
    }

    outcome
}
