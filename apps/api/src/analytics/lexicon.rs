//! Static word lists shared by the analyzers.
//!
//! All sets are compiled into the binary as perfect-hash sets and are never
//! mutated, so every analysis reads them without synchronisation.

use phf::{phf_set, Set};

/// Common function words excluded from frequency, uniqueness and spelling checks.
pub static STOPWORDS: Set<&'static str> = phf_set! {
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself",
    "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on",
    "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same",
    "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
};

/// Conversational filler stripped from job descriptions before keyword
/// extraction. Broader than [`STOPWORDS`]: adds pronouns, auxiliaries and
/// the padding words job ads lean on.
pub static KEYWORD_STOPWORDS: Set<&'static str> = phf_set! {
    "a", "about", "above", "after", "again", "against", "all", "also", "always", "am", "an",
    "and", "another", "any", "anyone", "anything", "are", "around", "as", "at", "be", "became",
    "because", "become", "becomes", "becoming", "been", "before", "being", "below", "between",
    "both", "but", "by", "came", "can", "cannot", "come", "comes", "could", "did", "do", "does",
    "doing", "done", "down", "during", "each", "either", "else", "etc", "even", "ever", "every",
    "few", "for", "from", "further", "get", "gets", "getting", "give", "given", "go", "goes",
    "going", "gone", "got", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "however", "i", "if", "in", "include",
    "includes", "including", "into", "is", "it", "its", "itself", "just", "keep", "know",
    "known", "make", "makes", "making", "many", "may", "me", "might", "more", "most", "much",
    "must", "my", "myself", "need", "needs", "next", "no", "none", "nor", "not", "now", "of",
    "off", "often", "on", "once", "one", "ones", "only", "or", "other", "others", "ought",
    "our", "ours", "ourselves", "out", "over", "own", "per", "please", "plus", "rather",
    "really", "said", "same", "see", "seek", "seeking", "shall", "she", "should", "since", "so",
    "some", "something", "still", "such", "take", "than", "thank", "thanks", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "therefore", "these", "they",
    "thing", "things", "this", "those", "though", "through", "thus", "to", "together", "too",
    "two", "under", "until", "unto", "up", "upon", "us", "various", "very", "via", "want",
    "wants", "was", "way", "ways", "we", "well", "were", "what", "whatever", "when", "whenever",
    "where", "whether", "which", "while", "who", "whoever", "whom", "whose", "why", "will",
    "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
};

/// Local spelling dictionary: everyday English plus common resume vocabulary.
///
/// Deliberately small. Proper nouns, most jargon and abbreviations are not
/// in it and will be reported.
pub static DICTIONARY: Set<&'static str> = phf_set! {
    "ability", "able", "abroad", "academic", "accelerate", "accelerated", "access",
    "accomplish", "accomplished", "accomplishment", "accomplishments", "account", "accountable",
    "accounting", "accounts", "accuracy", "accurate", "achieve", "achieved", "achievement",
    "achievements", "achieving", "acquire", "acquired", "acquisition", "across", "act",
    "action", "actions", "active", "activities", "activity", "actual", "adapt", "adaptable",
    "adapted", "add", "added", "adding", "addition", "additional", "address", "addressed",
    "adjust", "administer", "administered", "administration", "administrative", "adopt",
    "adopted", "adoption", "advance", "advanced", "advancing", "advise", "advised", "advisor",
    "advocate", "affairs", "agency", "agile", "agreed", "agreement", "aid", "aligned",
    "alignment", "allocate", "allocated", "allowed", "also", "analysis", "analyst",
    "analytical", "analytics", "analyze", "analyzed", "analyzing", "annual", "annually",
    "answer", "anticipate", "api", "apis", "app", "application", "applications", "applied",
    "apply", "applying", "appointed", "approach", "approaches", "appropriate", "approval",
    "approved", "approximately", "apps", "architect", "architected", "architecture", "area",
    "areas", "arrange", "arranged", "art", "article", "articles", "arts", "asked", "assess",
    "assessed", "assessment", "assessments", "asset", "assets", "assign", "assigned", "assist",
    "assistance", "assistant", "assisted", "associate", "associated", "attend", "attended",
    "attention", "audience", "audit", "audited", "audits", "author", "authored", "automate",
    "automated", "automation", "available", "average", "award", "awarded", "awards", "aws",
    "azure", "ba", "bachelor", "bachelors", "backend", "balance", "balanced", "bank", "banking",
    "base", "based", "basic", "basis", "became", "become", "began", "benefit", "benefits",
    "best", "better", "big", "billing", "biology", "board", "book", "brand", "branding",
    "brief", "broad", "brought", "bsc", "budget", "budgeting", "budgets", "build", "building",
    "built", "business", "businesses", "buyer", "calendar", "call", "called", "calls",
    "campaign", "campaigns", "candidate", "candidates", "capacity", "capital", "care", "career",
    "case", "cases", "cash", "catalog", "cause", "center", "centers", "certain",
    "certification", "certifications", "certified", "chain", "challenge", "challenges",
    "challenging", "champion", "championed", "change", "changes", "channel", "channels",
    "chemistry", "chief", "classroom", "clear", "client", "clients", "close", "closed",
    "closely", "cloud", "coach", "coached", "coaching", "code", "coding", "collaborate",
    "collaborated", "collaboration", "collaborative", "colleague", "colleagues", "collect",
    "collected", "college", "commerce", "commercial", "committee", "communicate",
    "communicated", "communication", "communications", "community", "companies", "company",
    "compensation", "competitive", "complete", "completed", "completing", "completion",
    "complex", "compliance", "component", "components", "comprehensive", "computer",
    "computing", "concept", "concepts", "conduct", "conducted", "conference", "conferences",
    "configuration", "configure", "configured", "consisted", "consistent", "consistently",
    "consult", "consultant", "consulted", "consulting", "consumer", "contact", "content",
    "continued", "continuous", "contract", "contracts", "contribute", "contributed",
    "contributing", "contributor", "control", "controlled", "controls", "convert", "converted",
    "coordinate", "coordinated", "coordinating", "coordination", "coordinator", "core",
    "corporate", "correct", "cost", "costs", "counsel", "course", "courses", "cover", "create",
    "created", "creating", "creation", "creative", "creativity", "credit", "critical", "cross",
    "css", "culture", "current", "currently", "curriculum", "customer", "customers", "cut",
    "cycle", "daily", "data", "database", "databases", "date", "day", "days", "deadline",
    "deadlines", "deal", "decided", "decision", "decisions", "decreased", "dedicated", "deep",
    "defined", "degree", "deliver", "delivered", "delivering", "delivery", "demand",
    "demonstrate", "demonstrated", "department", "departments", "deploy", "deployed",
    "deployment", "deployments", "design", "designed", "designer", "designing", "detail",
    "detailed", "details", "detect", "develop", "developed", "developer", "developers",
    "developing", "development", "device", "devices", "different", "digital", "direct",
    "directed", "direction", "director", "distributed", "distribution", "diverse", "docker",
    "document", "documentation", "documented", "documents", "domain", "double", "drive",
    "driven", "drove", "due", "duties", "early", "earned", "easily", "economics", "edit",
    "edited", "editing", "editor", "education", "educational", "effective", "effectively",
    "efficiency", "efficient", "effort", "efforts", "electrical", "email", "employee",
    "employees", "enable", "enabled", "end", "ended", "engage", "engaged", "engagement",
    "engine", "engineer", "engineered", "engineering", "engineers", "english", "enhance",
    "enhanced", "ensure", "ensured", "ensuring", "enterprise", "entire", "entry", "environment",
    "environmental", "environments", "equipment", "error", "errors", "especially", "establish",
    "established", "estimate", "evaluate", "evaluated", "evaluation", "event", "events",
    "exceeded", "excel", "excellence", "excellent", "execute", "executed", "execution",
    "executive", "expand", "expanded", "expansion", "expected", "experience", "experienced",
    "experiences", "experiment", "experiments", "expert", "expertise", "explain", "extensive",
    "external", "facilitate", "facilitated", "facility", "faculty", "fast", "feature",
    "features", "feedback", "field", "file", "files", "final", "finally", "finance",
    "financial", "findings", "firm", "first", "fiscal", "fix", "fixed", "flexible", "focus",
    "focused", "follow", "forecast", "forecasting", "forecasts", "form", "format", "foster",
    "fostered", "found", "foundation", "framework", "frameworks", "frontend", "full",
    "function", "functional", "functions", "fund", "funding", "future", "gained", "gave",
    "general", "generate", "generated", "generating", "git", "given", "global", "goal", "goals",
    "got", "government", "graduate", "graduated", "grant", "grants", "graphic", "graphics",
    "grew", "group", "groups", "grow", "growing", "growth", "guidance", "guide", "guided",
    "handle", "handled", "hands", "health", "healthcare", "held", "helped", "high", "highly",
    "hire", "hired", "hiring", "history", "honors", "hospital", "hospitality", "hour", "hours",
    "html", "human", "identified", "identify", "identifying", "impact", "implement",
    "implementation", "implemented", "implementing", "important", "improve", "improved",
    "improvement", "improvements", "improving", "incident", "incidents", "include", "included",
    "including", "increase", "increased", "increasing", "independent", "independently",
    "individual", "individuals", "industry", "influence", "information", "infrastructure",
    "initiative", "initiatives", "innovation", "innovative", "input", "insight", "insights",
    "install", "installed", "institute", "institution", "instruction", "instructor",
    "insurance", "integrate", "integrated", "integration", "integrity", "interface", "intern",
    "internal", "international", "internship", "interview", "interviewed", "introduce",
    "introduced", "inventory", "invest", "investment", "investments", "involved", "issue",
    "issues", "item", "items", "java", "javascript", "job", "jobs", "joined", "junior", "kept",
    "key", "knowledge", "kubernetes", "lab", "laboratory", "language", "languages", "large",
    "largest", "later", "launch", "launched", "law", "lead", "leader", "leaders", "leadership",
    "leading", "learn", "learned", "learning", "led", "left", "legal", "let", "level", "levels",
    "leverage", "leveraged", "library", "license", "licensed", "life", "line", "lines", "linux",
    "literature", "live", "local", "logistics", "long", "lower", "ma", "machine", "made",
    "maintain", "maintained", "maintaining", "maintenance", "major", "make", "manage",
    "managed", "management", "manager", "managers", "managing", "manual", "manufacturing",
    "market", "marketing", "markets", "master", "masters", "material", "materials",
    "mathematics", "mba", "measure", "measured", "media", "medical", "meet", "meeting",
    "meetings", "member", "members", "mentor", "mentored", "mentoring", "met", "method",
    "methods", "metrics", "migrate", "migrated", "migration", "million", "mission", "mobile",
    "model", "modeling", "models", "modern", "monitor", "monitored", "monitoring", "month",
    "monthly", "months", "motivated", "moved", "msc", "multiple", "national", "needed",
    "negotiate", "negotiated", "network", "networking", "networks", "new", "news", "next",
    "node", "nonprofit", "number", "numbers", "objective", "objectives", "obtain", "obtained",
    "office", "officer", "offices", "often", "old", "online", "open", "opened", "operate",
    "operated", "operating", "operation", "operational", "operations", "opportunities",
    "opportunity", "optimization", "optimize", "optimized", "oral", "order", "orders",
    "organization", "organizational", "organizations", "organize", "organized", "orientation",
    "outcome", "outcomes", "outreach", "outstanding", "overall", "oversaw", "oversee",
    "overseeing", "owned", "owner", "ownership", "paid", "paper", "papers", "part",
    "participant", "participate", "participated", "particular", "partner", "partnered",
    "partners", "partnership", "partnerships", "past", "patient", "patients", "pay", "payment",
    "payments", "peer", "people", "per", "percent", "perform", "performance", "performed",
    "performing", "period", "person", "personal", "personnel", "phase", "phd", "phone",
    "physics", "pipeline", "pipelines", "place", "plan", "planned", "planning", "plans",
    "platform", "platforms", "played", "policies", "policy", "portfolio", "position",
    "positions", "positive", "possible", "practice", "practices", "prepare", "prepared",
    "preparing", "present", "presentation", "presentations", "presented", "president",
    "prevent", "previous", "previously", "pricing", "primarily", "primary", "principal",
    "principles", "priorities", "prioritize", "priority", "private", "problem", "problems",
    "procedure", "procedures", "process", "processes", "processing", "procurement", "produce",
    "produced", "product", "production", "productivity", "products", "professional",
    "professionals", "professor", "proficiency", "proficient", "profit", "program",
    "programming", "programs", "progress", "project", "projects", "promote", "promoted",
    "promotion", "proper", "proposal", "proposals", "proposed", "protocol", "protocols",
    "prototype", "proud", "provide", "provided", "provider", "providing", "public",
    "publication", "publications", "published", "purchase", "purchasing", "put", "python",
    "quality", "quantitative", "quarter", "quarterly", "query", "questions", "quick", "quickly",
    "raise", "raised", "ran", "range", "rate", "rates", "reach", "react", "real", "received",
    "recent", "recently", "recognized", "record", "records", "recruit", "recruited",
    "recruiting", "recruitment", "redesigned", "reduce", "reduced", "reducing", "reduction",
    "regional", "regular", "regulations", "regulatory", "related", "relations", "relationship",
    "relationships", "release", "released", "reliability", "reliable", "remained", "remote",
    "report", "reported", "reporting", "reports", "represent", "representative", "represented",
    "request", "requests", "required", "requirement", "requirements", "research", "researched",
    "researcher", "resolve", "resolved", "resolving", "resource", "resources", "response",
    "responsibilities", "responsibility", "responsible", "result", "results", "retail",
    "retention", "revenue", "review", "reviewed", "reviewing", "reviews", "right", "risk",
    "risks", "role", "roles", "run", "running", "rust", "safety", "sale", "sales", "save",
    "saved", "saving", "savings", "scalable", "scale", "schedule", "scheduled", "scheduling",
    "scholarship", "school", "science", "sciences", "scientific", "scientist", "scope",
    "screen", "search", "second", "secondary", "section", "sector", "security", "select",
    "selected", "senior", "served", "server", "servers", "service", "services", "session",
    "sessions", "set", "setting", "settings", "several", "share", "shared", "shipped", "short",
    "showed", "shown", "significant", "significantly", "similar", "simple", "since", "single",
    "site", "sites", "skill", "skilled", "skills", "small", "social", "software", "solution",
    "solutions", "solve", "solved", "source", "sourcing", "space", "speaker", "special",
    "specialist", "specialized", "specific", "speech", "spend", "spoke", "sql", "staff",
    "stakeholder", "stakeholders", "standard", "standards", "start", "started", "state",
    "statistical", "statistics", "status", "still", "strategic", "strategies", "strategy",
    "stream", "streamline", "streamlined", "strength", "strengths", "strong", "structure",
    "structured", "student", "students", "studies", "study", "style", "subject", "success",
    "successful", "successfully", "summary", "supervise", "supervised", "supervising",
    "supervisor", "supplier", "suppliers", "supply", "support", "supported", "supporting",
    "survey", "surveys", "system", "systems", "table", "taken", "target", "targeted", "targets",
    "task", "tasks", "taught", "teach", "teacher", "teaching", "team", "teams", "technical",
    "technique", "techniques", "technologies", "technology", "term", "terms", "test", "tested",
    "testing", "tests", "theory", "thousands", "three", "time", "timely", "times", "title",
    "took", "tool", "tools", "top", "total", "towards", "track", "tracked", "tracking", "trade",
    "trained", "trainer", "training", "transaction", "transactions", "transform",
    "transformation", "transition", "travel", "trend", "trends", "troubleshoot",
    "troubleshooting", "trust", "turned", "tutor", "twice", "two", "type", "typescript",
    "understanding", "unit", "units", "university", "update", "updated", "updates", "upgrade",
    "usage", "use", "used", "user", "users", "using", "utilize", "utilized", "value", "values",
    "various", "vendor", "vendors", "version", "video", "vision", "visual", "volume",
    "volunteer", "volunteered", "web", "website", "week", "weekly", "weeks", "well", "whole",
    "wide", "win", "within", "won", "word", "work", "worked", "workflow", "workflows",
    "working", "workshop", "workshops", "world", "worldwide", "write", "writing", "written",
    "year", "yearly", "years",
};

/// Overused resume phrases, lowercase.
pub const CLICHES: &[&str] = &[
    "team player",
    "hard worker",
    "go-getter",
    "think outside the box",
    "detail-oriented",
    "results-driven",
    "fast learner",
    "self-starter",
    "dynamic",
    "synergy",
    "proactive",
    "track record",
    "problem solver",
    "hit the ground running",
    "best of breed",
    "value add",
    "go-to person",
    "people person",
    "works well under pressure",
    "passionate",
];

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

pub fn is_keyword_stopword(word: &str) -> bool {
    KEYWORD_STOPWORDS.contains(word)
}

/// Dictionary lookup. Expects a lowercase token.
pub fn is_known_word(word: &str) -> bool {
    DICTIONARY.contains(word)
}
