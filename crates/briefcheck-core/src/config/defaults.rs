// Single source of truth for all default values.

// --- Analysis ---
pub const DEFAULT_COMPLIANCE_THRESHOLD: f64 = 0.7;
pub const DEFAULT_MAX_CONCURRENCY: usize = 1;
pub const DEFAULT_TIER_COVERAGE: bool = true;
pub const DEFAULT_WEIGHT_ESSENTIAL: f64 = 1.0;
pub const DEFAULT_WEIGHT_MEDIUM: f64 = 2.0;
pub const DEFAULT_WEIGHT_ADVANCED: f64 = 3.0;
pub const DEFAULT_WEIGHT_EXPERT: f64 = 4.0;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "ollama";
pub const DEFAULT_EMBEDDING_MODEL: &str = "nomic-embed-text";
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_EMBEDDING_CACHE_CAPACITY: u64 = 10_000;

// --- Generation ---
pub const DEFAULT_GENERATION_PROVIDER: &str = "api";
pub const DEFAULT_GENERATION_MODEL: &str = "mixtral-8x7b-32768";
pub const DEFAULT_CHAT_COMPLETIONS_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_TEMPERATURE: f32 = 0.0;
pub const DEFAULT_TIER_PARSE_RETRIES: u32 = 0;
pub const DEFAULT_PROJECT_TYPES: &[&str] = &["ml", "nlp", "web", "data", "other"];
pub const DEFAULT_PROJECT_TYPE_SAMPLE_CHARS: usize = 4_000;

// --- Repository ---
pub const DEFAULT_CHUNK_SIZE: usize = 1_000;
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576; // 1 MB
pub const DEFAULT_SOURCE_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".java", ".cpp", ".c", ".h", ".cs", ".php", ".rb", ".go", ".rs", ".swift",
    ".kt", ".ts", ".html", ".css", ".md", ".txt", ".json", ".yaml", ".yml",
];

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
