//! Test configuration action

use tracing::info;

use crate::config::ConfigStatus;
use crate::domains::contact::classifier::{classify, ErrorKind};
use crate::kernel::ServerDeps;

/// Check readiness and run provider init without sending anything.
pub async fn test_configuration(deps: &ServerDeps) -> Result<ConfigStatus, ErrorKind> {
    let status = deps.config.status();
    if !status.configured {
        return Err(ErrorKind::ServiceConfiguration);
    }

    deps.provider_init
        .ensure(deps.provider.clone(), &deps.config.public_key)
        .await
        .map_err(|e| classify(&e))?;

    info!("Email provider configuration verified");
    Ok(status)
}
