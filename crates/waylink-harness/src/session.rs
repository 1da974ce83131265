//! Scripted session-state provider.

use std::sync::{Mutex, PoisonError};

use waylink_core::{SessionInfo, UserState};

/// Session view returning a scriptable user state.
///
/// Tests can change the state mid-scenario, e.g. to model a waiting-list
/// user getting verified between two dispatches.
#[derive(Debug, Default)]
pub struct ScriptedSession {
    state: Mutex<Option<UserState>>,
}

impl ScriptedSession {
    /// Create a provider reporting the given state.
    pub fn new(state: Option<UserState>) -> Self {
        Self { state: Mutex::new(state) }
    }

    /// Change the reported state.
    pub fn set_state(&self, state: Option<UserState>) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }
}

impl SessionInfo for ScriptedSession {
    fn current_user_state(&self) -> Option<UserState> {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
