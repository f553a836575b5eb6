//! Few-shot prompt construction, rendered as JSON or XML for use as a task
//! prompt.

mod builder;

pub use builder::{Example, FewShotPrompt, FewShotPromptBuilder, MIN_ENHANCE_EXAMPLES};
