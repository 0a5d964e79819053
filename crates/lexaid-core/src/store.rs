use super::actions::SessionAction;
use super::persistence::SessionSnapshotStore;
use super::reducer::reduce;
use super::state::SessionState;

type Subscriber = Box<dyn Fn(&SessionState)>;

/// The single state container of the running client. Owns the session
/// state outright; everything else reads it through `state()` and mutates
/// it through `dispatch()`. Constructed explicitly at the process root and
/// handed around by reference, never reached through a global.
pub struct SessionStore {
    state: SessionState,
    snapshots: Option<SessionSnapshotStore>,
    subscribers: Vec<Subscriber>,
}

impl SessionStore {
    /// Store without durable persistence. Used by tests and callers that
    /// only need the in-memory state machine.
    pub fn in_memory() -> Self {
        Self {
            state: SessionState::default(),
            snapshots: None,
            subscribers: Vec::new(),
        }
    }

    /// Store mirrored to durable storage. Restores the saved snapshot when
    /// one is present and well-formed, else starts from defaults.
    pub fn open(snapshots: SessionSnapshotStore) -> Self {
        let mut store = Self {
            state: SessionState::default(),
            snapshots: Some(snapshots),
            subscribers: Vec::new(),
        };
        let restored = store
            .snapshots
            .as_ref()
            .and_then(SessionSnapshotStore::load);
        if let Some(snapshot) = restored {
            reduce(&mut store.state, SessionAction::LoadState(snapshot));
        }
        store
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Apply the reducer, mirror the new state to durable storage, then
    /// notify subscribers in registration order. Synchronous: by the time
    /// this returns the transition is complete. Persistence is best-effort;
    /// a failed save never fails the in-memory transition.
    pub fn dispatch(&mut self, action: SessionAction) {
        reduce(&mut self.state, action);
        if let Some(snapshots) = &self.snapshots {
            if let Err(err) = snapshots.save(&self.state) {
                tracing::warn!(error = %err, "could not persist session snapshot");
            }
        }
        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(&SessionState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }
}
