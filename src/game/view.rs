//! Read-only presentation data for the surrounding shell.

/// Display information about the session and its participants.
///
/// Everything here is opaque to the game core: the room code and the names
/// are carried for presentation and for attributing guess-log entries,
/// never interpreted.
#[derive(Debug, Clone)]
pub struct SessionView {
    room_code: String,
    roster: Vec<String>,
}

impl SessionView {
    /// Creates a view with the local participant as the first roster entry.
    pub fn new(room_code: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            room_code: room_code.into(),
            roster: vec![local_name.into()],
        }
    }

    pub fn room_code(&self) -> &str {
        &self.room_code
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    /// Display name of the local participant.
    pub fn local_name(&self) -> &str {
        &self.roster[0]
    }
}

impl Default for SessionView {
    fn default() -> Self {
        Self::new("local", "Guest")
    }
}
