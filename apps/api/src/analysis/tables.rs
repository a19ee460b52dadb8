//! Reference tables — the immutable vocabulary the pipeline matches against.
//!
//! Built once at startup, shared as `Arc<ReferenceTables>`, never mutated.
//! Concurrent calls read them without locking.

/// Canonical skill vocabulary. Detection order and output order follow this
/// list, so keep related entries grouped.
const SKILL_BANK: &[&str] = &[
    "python",
    "javascript",
    "typescript",
    "react",
    "next.js",
    "node.js",
    "flask",
    "fastapi",
    "django",
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "aws",
    "gcp",
    "azure",
    "docker",
    "kubernetes",
    "terraform",
    "pandas",
    "numpy",
    "scikit-learn",
    "pytorch",
    "tensorflow",
    "nlp",
    "html",
    "css",
    "tailwind",
    "vite",
    "git",
    "github",
    "ci/cd",
    "linux",
];

/// Degree abbreviations, full degree names, and common major names.
/// Matched case-insensitively against each normalized line.
const DEGREE_WORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "ph.d",
    "msc",
    "m.sc",
    "bsc",
    "b.sc",
    "mba",
    "b.eng",
    "btech",
    "b.tech",
    "m.eng",
    "mtech",
    "m.tech",
    "associate",
    "diploma",
    "computer science",
    "information technology",
    "software engineering",
];

/// Strong action verbs counted for the ATS rubric and the verb-usage rule.
const ACTION_VERBS: &[&str] = &[
    "led",
    "managed",
    "built",
    "created",
    "designed",
    "developed",
    "implemented",
    "launched",
    "shipped",
    "delivered",
    "improved",
    "increased",
    "reduced",
    "optimized",
    "automated",
    "architected",
    "spearheaded",
    "mentored",
    "established",
    "achieved",
];

/// Role vectors: role name → required skills. Iteration order is the
/// documented tie-break for best-match selection, so this stays a slice,
/// not a map.
const ROLE_VECTORS: &[(&str, &[&str])] = &[
    (
        "Backend Developer",
        &["python", "django", "flask", "fastapi", "postgresql", "mysql", "redis", "docker", "aws"],
    ),
    (
        "Frontend Developer",
        &["javascript", "typescript", "react", "next.js", "html", "css", "tailwind", "vite"],
    ),
    (
        "Full Stack Developer",
        &["javascript", "react", "node.js", "python", "postgresql", "mongodb", "docker", "git"],
    ),
    (
        "DevOps Engineer",
        &["aws", "gcp", "azure", "docker", "kubernetes", "terraform", "ci/cd", "linux"],
    ),
    (
        "Data Scientist",
        &["python", "pandas", "numpy", "scikit-learn", "pytorch", "tensorflow", "nlp"],
    ),
];

/// One role's required-skill vector.
#[derive(Debug, Clone)]
pub struct RoleVector {
    pub role: String,
    pub required: Vec<String>,
}

/// Immutable lookup tables shared by every pipeline stage.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub skill_bank: Vec<String>,
    pub degree_words: Vec<String>,
    pub action_verbs: Vec<String>,
    pub role_vectors: Vec<RoleVector>,
}

impl ReferenceTables {
    /// Builds the default curated tables. Called once from startup.
    pub fn curated() -> Self {
        Self {
            skill_bank: SKILL_BANK.iter().map(|s| s.to_string()).collect(),
            degree_words: DEGREE_WORDS.iter().map(|s| s.to_string()).collect(),
            action_verbs: ACTION_VERBS.iter().map(|s| s.to_string()).collect(),
            role_vectors: ROLE_VECTORS
                .iter()
                .map(|(role, required)| RoleVector {
                    role: role.to_string(),
                    required: required.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
        }
    }
}
