//! Shared load-append-store sequence for service records.

use crate::application::CommandGate;
use crate::domain::foundation::{DomainError, ServiceId};
use crate::domain::portal::ClientService;
use crate::ports::ClientServiceRepository;

/// Appends `record` to the service under the command gate.
///
/// Returns the appended record, or `None` if the service does not exist.
pub(super) async fn append_record<R, F>(
    services: &dyn ClientServiceRepository,
    gate: &CommandGate,
    service_id: ServiceId,
    record: R,
    apply: F,
) -> Result<Option<R>, DomainError>
where
    R: Clone,
    F: FnOnce(&mut ClientService, R),
{
    let _guard = gate.enter().await;
    let Some(mut service) = services.find_by_id(service_id).await? else {
        return Ok(None);
    };
    apply(&mut service, record.clone());
    services.update(&service).await?;
    Ok(Some(record))
}
