mod core;

pub use self::core::{Generate, GenerateError, OpenAiChat};
