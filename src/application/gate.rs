//! Write serialization for command handlers.

use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Single-writer gate shared by every command handler.
///
/// A command holds the guard for its whole load-modify-store sequence,
/// including any cross-aggregate follow-up, so two commands never
/// interleave. Queries never enter the gate.
#[derive(Debug, Clone, Default)]
pub struct CommandGate {
    lock: Arc<Mutex<()>>,
}

/// Held while a command runs. Dropping it lets the next command in.
pub type CommandGuard = OwnedMutexGuard<()>;

impl CommandGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive write access.
    pub async fn enter(&self) -> CommandGuard {
        Arc::clone(&self.lock).lock_owned().await
    }
}
