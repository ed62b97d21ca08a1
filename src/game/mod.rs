//! Game state: session lifecycle, prompts, roles, and feedback events.

pub mod events;
pub mod prompt;
pub mod rng;
pub mod session;
pub mod view;

// Re-export commonly used types at module level
pub use events::{EventBus, SessionEvent};
pub use prompt::{Prompt, PromptSource};
pub use rng::RngState;
pub use session::{GuessOutcome, GuessRecord, PointerEvent, Role, RoundPhase, Session};
pub use view::SessionView;
