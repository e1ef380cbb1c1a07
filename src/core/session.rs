use crate::domain::model::Livery;
use tokio::sync::mpsc;

/// Where the application currently stands with respect to the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// Simulator process not found; keep polling.
    #[default]
    SimNotRunning,
    /// Process found but no SDK connection established yet.
    SimRunning,
    /// SDK connection is up; liveries can be requested.
    Connected,
}

impl ConnectionState {
    pub fn is_connected(self) -> bool {
        matches!(self, ConnectionState::Connected)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionState::SimNotRunning => "waiting for simulator",
            ConnectionState::SimRunning => "simulator running",
            ConnectionState::Connected => "connected",
        }
    }
}

/// Explicit application state: the working livery collection plus connection
/// status. Replaces the observable-property graph of a GUI shell with plain
/// data; what the user may do next is derived by [`available_actions`].
#[derive(Debug, Default)]
pub struct Session {
    liveries: Vec<Livery>,
    connection: ConnectionState,
    last_error: Option<String>,
}

/// Actions currently available, derived purely from [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actions {
    /// A livery fetch needs a live connection.
    pub can_fetch: bool,
    /// Saving needs at least one livery in the working collection.
    pub can_save: bool,
}

pub fn available_actions(session: &Session) -> Actions {
    Actions {
        can_fetch: session.connection.is_connected(),
        can_save: !session.liveries.is_empty(),
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn liveries(&self) -> &[Livery] {
        &self.liveries
    }

    pub fn connection(&self) -> ConnectionState {
        self.connection
    }

    pub fn set_connection(&mut self, state: ConnectionState) {
        if self.connection != state {
            tracing::debug!("Connection state: {}", state.as_str());
            self.connection = state;
        }
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn record_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("Session error: {}", message);
        self.last_error = Some(message);
    }

    /// Appends a delivered batch. The working collection is only ever
    /// appended to, never replaced; see [`Session::clear`].
    pub fn append_batch(&mut self, batch: Vec<Livery>) {
        self.liveries.extend(batch);
    }

    /// Empties the working collection. Only called on explicit user action;
    /// a fetch starts by clearing the previous results.
    pub fn clear(&mut self) {
        self.liveries.clear();
    }

    /// Drains livery batches from the channel until the sender side closes,
    /// appending each batch in arrival order.
    pub async fn collect(&mut self, batches: &mut mpsc::Receiver<Vec<Livery>>) {
        while let Some(batch) = batches.recv().await {
            tracing::debug!("Received batch of {} liveries", batch.len());
            self.append_batch(batch);
        }
    }

    pub fn into_liveries(self) -> Vec<Livery> {
        self.liveries
    }
}
