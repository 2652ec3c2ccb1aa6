//! Presenter port - hands a finished result to the presentation collaborator.

use anyhow::Result;
use async_trait::async_trait;

use crate::translation::Presentation;

/// Fire-and-forget from the pipeline's perspective: the caller logs a
/// failed presentation but never propagates it. Whether the payload ends up
/// in a transient notification or a persistent window is presentation
/// policy, decided behind this port.
#[async_trait]
pub trait PresenterPort: Send + Sync {
    async fn present(&self, presentation: Presentation) -> Result<()>;
}
