//! The rotation dispatcher: owns the live cube state, validates rotation
//! requests, and keeps the durable copy in lockstep with the live one.

use std::sync::Arc;

use cube::{CubeState, Direction, RotationError, Target};
use storage::Storage;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

#[derive(Clone)]
pub struct ApiContext {
    pub storage: Storage,
    cube: Arc<RwLock<CubeState>>,
}

impl ApiContext {
    pub fn new(storage: Storage, cube: CubeState) -> Self {
        Self {
            storage,
            cube: Arc::new(RwLock::new(cube)),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Rotation(#[from] RotationError),
    #[error("state store unavailable: {0}")]
    StoreUnavailable(anyhow::Error),
    #[error("cube state missing from store")]
    StateMissing,
}

/// What a successful rotation applied, for response building.
#[derive(Debug, Clone, Copy)]
pub struct RotationReceipt {
    pub target: Target,
    pub direction: Direction,
}

/// The current cube state as the store has it. Reads go to the store, not
/// the live copy: rotations persist before they commit, so the store is
/// always a fully-formed state, and readers never wait on a rotation lock.
pub async fn current_state(ctx: &ApiContext) -> Result<CubeState, ApiError> {
    let stored = ctx
        .storage
        .load_state()
        .await
        .map_err(ApiError::StoreUnavailable)?;
    Ok(stored.ok_or(ApiError::StateMissing)?.state)
}

/// Validates and applies one rotation request, then persists the result.
///
/// The write guard is held across read-transform-persist, so concurrent
/// rotations are applied one at a time and persistence order matches
/// rotation order. The transform runs on a scratch copy that is committed
/// to the live state only after the save succeeds; a store failure fails
/// the whole rotation and leaves the live copy unchanged.
pub async fn rotate(
    ctx: &ApiContext,
    target: &str,
    direction: &str,
) -> Result<RotationReceipt, ApiError> {
    let target: Target = target.parse()?;
    let direction: Direction = direction.parse()?;

    let mut live = ctx.cube.write().await;
    let mut next = live.clone();
    next.rotate(target, direction);
    ctx.storage
        .save_state(&next)
        .await
        .map_err(ApiError::StoreUnavailable)?;
    *live = next;

    Ok(RotationReceipt { target, direction })
}

/// Startup bridge: restore the persisted state, or seed the store with the
/// solved configuration on first run.
pub async fn load_or_seed_state(storage: &Storage) -> Result<CubeState, ApiError> {
    if let Some(stored) = storage
        .load_state()
        .await
        .map_err(ApiError::StoreUnavailable)?
    {
        info!(saved_at = %stored.saved_at, "restored persisted cube state");
        return Ok(stored.state);
    }

    let solved = CubeState::solved();
    storage
        .save_state(&solved)
        .await
        .map_err(ApiError::StoreUnavailable)?;
    info!("seeded solved cube state");
    Ok(solved)
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
