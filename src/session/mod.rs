mod store;
mod transcript;

pub use store::{Session, SessionStore};
pub use transcript::{Role, Turn, render_prompt};
