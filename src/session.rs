//! Isolated matches for several concurrent sessions.
//!
//! Each session owns its controller (with an RNG stream forked from the
//! registry's seed) and its `MatchState`. Nothing is shared between
//! sessions, and a session can only be touched through `&mut` access to
//! the registry, which serializes operations on it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ai::{AiPolicy, WeightedPolicy};
use crate::core::{MatchConfig, MatchError, MatchRng};
use crate::game::{MatchController, MatchState};

/// Opaque session identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// One session's controller and match.
#[derive(Clone, Debug)]
pub struct Session<P = WeightedPolicy> {
    pub controller: MatchController<P>,
    pub state: MatchState,
}

/// Registry of independent sessions.
pub struct SessionRegistry<P = WeightedPolicy> {
    config: MatchConfig,
    policy: P,
    rng: MatchRng,
    sessions: FxHashMap<SessionId, Session<P>>,
    next_id: u64,
}

impl SessionRegistry<WeightedPolicy> {
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        Self::with_policy(config, WeightedPolicy::default())
    }
}

impl<P: AiPolicy + Clone> SessionRegistry<P> {
    /// Registry whose sessions all use a copy of `policy`.
    pub fn with_policy(config: MatchConfig, policy: P) -> Result<Self, MatchError> {
        config.validate()?;
        let rng = MatchRng::new(config.seed);
        Ok(Self {
            config,
            policy,
            rng,
            sessions: FxHashMap::default(),
            next_id: 0,
        })
    }

    /// Open a new session in side selection.
    pub fn create(&mut self) -> Result<SessionId, MatchError> {
        let id = SessionId::new(self.next_id);
        self.next_id += 1;

        let controller =
            MatchController::with_rng(self.config.clone(), self.policy.clone(), self.rng.fork())?;
        let state = controller.restart();
        self.sessions.insert(id, Session { controller, state });

        debug!(session = %id, "session created");
        Ok(id)
    }

    #[must_use]
    pub fn get(&self, id: SessionId) -> Option<&Session<P>> {
        self.sessions.get(&id)
    }

    /// Run `f` against one session's controller and state.
    pub fn with_session<T>(
        &mut self,
        id: SessionId,
        f: impl FnOnce(&mut MatchController<P>, &mut MatchState) -> Result<T, MatchError>,
    ) -> Result<T, MatchError> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(MatchError::UnknownSession { id: id.raw() })?;
        f(&mut session.controller, &mut session.state)
    }

    /// Close a session, returning its final state.
    pub fn remove(&mut self, id: SessionId) -> Option<MatchState> {
        let removed = self.sessions.remove(&id).map(|session| session.state);
        if removed.is_some() {
            debug!(session = %id, "session removed");
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
