use serde::Deserialize;

/// Default total page-attempt budget
pub const DEFAULT_MAX_PAGES: usize = 50_000;

/// Default number of fetches kept in flight at once
pub const DEFAULT_MAX_CONCURRENT: usize = 1;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Default number of accumulated records between periodic saves
pub const DEFAULT_SAVE_INTERVAL: usize = 100;

/// Default location of the results document
pub const DEFAULT_RESULTS_PATH: &str = "output/web_crawl_results.json";

/// Browser-like user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/124.0 Safari/537.36";

/// Seed URLs used when neither the config file nor the command line names any
pub const DEFAULT_SEEDS: &[&str] = &[
    "https://www.wikipedia.org/",
    "https://www.nytimes.com/",
    "https://www.bbc.com/",
    "https://www.cnn.com/",
    "https://www.theguardian.com/",
    "https://www.reuters.com/",
    "https://www.stackoverflow.com/",
    "https://www.github.com/",
    "https://www.medium.com/",
    "https://www.quora.com/",
    "https://www.nationalgeographic.com/",
    "https://www.coursera.org/",
    "https://www.edx.org/",
    "https://www.khanacademy.org/",
    "https://www.imdb.com/",
    "https://www.reddit.com/",
    "https://www.wikipedia.org/wiki/Special:Random",
    "https://www.wikimedia.org/",
    "https://www.mozilla.org/",
    "https://www.python.org/",
];

/// Main configuration structure for Web-Sweep
///
/// Every section is optional in the TOML file; anything left out falls back
/// to the defaults above.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed URLs, crawled in the given order
    pub seeds: Vec<String>,
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seeds: DEFAULT_SEEDS.iter().map(|s| s.to_string()).collect(),
            crawler: CrawlerConfig::default(),
            user_agent: UserAgentConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of pages attempted over the whole crawl
    #[serde(rename = "max-pages")]
    pub max_pages: usize,

    /// Maximum number of fetches in flight at once
    #[serde(rename = "max-concurrent")]
    pub max_concurrent: usize,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Records collected between two periodic saves
    #[serde(rename = "save-interval")]
    pub save_interval: usize,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            save_interval: DEFAULT_SAVE_INTERVAL,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Full User-Agent header value
    pub value: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            value: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the JSON results document
    #[serde(rename = "results-path")]
    pub results_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_path: DEFAULT_RESULTS_PATH.to_string(),
        }
    }
}
