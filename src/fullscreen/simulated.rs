//! Simulated fullscreen host
//!
//! Supports a configurable subset of vendor entry points and records every
//! call. Clones share state, so a clone kept outside the controller observes
//! what the controller did.

use crate::fullscreen::{FullscreenApi, FullscreenHost};
use crate::utils::error::{ControlsError, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// A single call made against the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenCall {
    Request(FullscreenApi),
    Exit(FullscreenApi),
}

#[derive(Debug, Default)]
struct HostState {
    active: bool,
    calls: Vec<FullscreenCall>,
}

/// In-memory fullscreen host
#[derive(Debug, Clone)]
pub struct SimulatedFullscreenHost {
    supported: Vec<FullscreenApi>,
    state: Arc<Mutex<HostState>>,
}

impl SimulatedFullscreenHost {
    pub fn new(supported: Vec<FullscreenApi>) -> Self {
        Self {
            supported,
            state: Arc::new(Mutex::new(HostState::default())),
        }
    }

    /// Whether presentation is currently fullscreen
    pub fn is_active(&self) -> bool {
        self.state.lock().active
    }

    /// Every request and exit made so far
    pub fn calls(&self) -> Vec<FullscreenCall> {
        self.state.lock().calls.clone()
    }

    /// Leave fullscreen without going through the controls, like pressing Escape
    pub fn dismiss(&self) {
        self.state.lock().active = false;
    }

    fn check(&self, api: FullscreenApi) -> Result<()> {
        if self.supported.contains(&api) {
            Ok(())
        } else {
            Err(ControlsError::Fullscreen(format!("{} is not available", api)))
        }
    }
}

impl FullscreenHost for SimulatedFullscreenHost {
    fn supports_request(&self, api: FullscreenApi) -> bool {
        self.supported.contains(&api)
    }

    fn supports_exit(&self, api: FullscreenApi) -> bool {
        self.supported.contains(&api)
    }

    fn request(&mut self, api: FullscreenApi) -> Result<()> {
        self.check(api)?;
        let mut state = self.state.lock();
        state.calls.push(FullscreenCall::Request(api));
        state.active = true;
        Ok(())
    }

    fn exit(&mut self, api: FullscreenApi) -> Result<()> {
        self.check(api)?;
        let mut state = self.state.lock();
        state.calls.push(FullscreenCall::Exit(api));
        if !state.active {
            return Err(ControlsError::Fullscreen("not in fullscreen".to_string()));
        }
        state.active = false;
        Ok(())
    }
}
