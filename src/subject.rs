//! Subject classification and the per-category narrative templates.

/// Number of steps every template asks the backend for.
pub const STEP_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubjectCategory {
    Technical,
    Business,
    Culinary,
    Creative,
}

/// A keyword rule; the first rule with any keyword contained in the subject wins.
struct Rule {
    keywords: &'static [&'static str],
    category: SubjectCategory,
}

impl Rule {
    fn matches(&self, subject: &str) -> bool {
        self.keywords.iter().any(|k| subject.contains(k))
    }
}

// Order is priority.
const RULES: &[Rule] = &[
    Rule {
        keywords: &["technical", "engineering", "science", "physics", "chemistry"],
        category: SubjectCategory::Technical,
    },
    Rule {
        keywords: &["business", "marketing", "strategy", "finance"],
        category: SubjectCategory::Business,
    },
    Rule {
        keywords: &["cooking", "recipe", "food", "kitchen"],
        category: SubjectCategory::Culinary,
    },
];

/// Case-insensitive substring match against the ordered rule table.
/// Anything unmatched is `Creative`.
pub fn classify(subject: &str) -> SubjectCategory {
    let lowered = subject.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.category)
        .unwrap_or(SubjectCategory::Creative)
}

/// Narrative voice and illustration instructions for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTemplate {
    pub category: SubjectCategory,
    pub narrative: &'static str,
    pub visual: &'static str,
    pub steps: usize,
}

const IMAGE_MANDATE: &str = "Always generate images, never just describe them.";

impl StyleTemplate {
    pub fn for_category(category: SubjectCategory) -> Self {
        let (narrative, visual) = match category {
            SubjectCategory::Technical => (
                "You are giving a slideshow presentation explaining technical concepts. Use clear diagrams and step-by-step breakdowns.\n\
                 Be precise but accessible.",
                "Generate clean, technical illustrations with black ink on white background.\n\
                 Explain in 5 clear steps with short, informative sentences.",
            ),
            SubjectCategory::Business => (
                "You are giving a business presentation. Use professional charts, graphs, and business metaphors.\n\
                 Be persuasive and data-driven.",
                "Generate clean, business-style illustrations with black ink on white background.\n\
                 Present your solution in 5 strategic steps.",
            ),
            SubjectCategory::Culinary => (
                "You are a fun cooking instructor giving a slideshow. Use food metaphors and cooking analogies.\n\
                 Be enthusiastic and easy to follow.",
                "Generate cute, food-related illustrations with black ink on white background.\n\
                 Break it down into 5 simple cooking steps.",
            ),
            SubjectCategory::Creative => (
                "Come up with an unexpected, absurd, fun method to complete the task.\n\
                 Pretend you're giving a slideshow presentation pitching your method. Be a gripping narrator.\n\
                 Be clever, conversational, and very concise.",
                "Give your method a fun name and explain it in 5 clear steps with very short sentences.\n\
                 Illustrate with minimal, black ink on white background, with bits of watercolor.",
            ),
        };
        Self { category, narrative, visual, steps: STEP_COUNT }
    }

    pub fn for_subject(subject: &str) -> Self {
        Self::for_category(classify(subject))
    }

    /// Full instruction text for the template, as sent to the backend.
    pub fn render(&self) -> String {
        format!("{}\n{} {}", self.narrative, self.visual, IMAGE_MANDATE)
    }
}
