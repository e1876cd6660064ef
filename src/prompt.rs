use crate::subject::{StyleTemplate, SubjectCategory};

/// Output grammar the backend is asked to follow. The parser tolerates any slide count.
pub const FORMAT_CONTRACT: &str = "Format your response as:
Slide 1: [Title]
[Commentary for this slide]

Slide 2: [Title]
[Commentary for this slide]

Continue until done (typically 5 slides). Generate an image for each slide.";

/// The exact text sent to the generative backend.
///
/// Task text is embedded verbatim. A `Slide <n>:` marker inside the task is not
/// escaped, so a backend that echoes the task back can produce an extra slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub category: SubjectCategory,
    text: String,
}

impl ComposedPrompt {
    pub fn compose(task: &str, template: &StyleTemplate) -> Self {
        let text = format!("Task: {task}\n\n{}\n\n{FORMAT_CONTRACT}", template.render());
        Self { category: template.category, text }
    }

    /// Picks the template from the task text itself.
    pub fn for_task(task: &str) -> Self {
        Self::compose(task, &StyleTemplate::for_subject(task))
    }

    pub fn as_str(&self) -> &str { &self.text }

    pub fn into_string(self) -> String { self.text }
}
