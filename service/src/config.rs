use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use std::time::Duration;

/// The mock only ever listens on the loopback interface.
pub const BIND_HOST: &str = "127.0.0.1";

pub const DEFAULT_PORT: u16 = 8888;
pub const DEFAULT_CHUNK_DELAY_MS: u64 = 50;

pub const DEFAULT_RESPONSE_ID: &str = "mock-123";
pub const DEFAULT_RESPONSE_CONTENT: &str = "This is a mock non-streaming response.";
pub const DEFAULT_STREAM_MESSAGE: &str = "This is a mock streaming response from the test server.";

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The loopback TCP port to listen for incoming connections. Use 0 to let the OS pick one.
    #[arg(short, long, env, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Artificial delay in milliseconds between two streamed completion chunks
    #[arg(long, env, default_value_t = DEFAULT_CHUNK_DELAY_MS)]
    chunk_delay_ms: u64,

    /// Log a diagnostic line for every request served. Off by default so the
    /// mock does not pollute test output.
    #[arg(short, long, env)]
    pub verbose: bool,

    /// Reject request bodies that are not a JSON object with 400 Bad Request
    /// instead of treating them as an empty request.
    #[arg(long, env)]
    pub strict: bool,

    /// The `id` returned in non-streaming completion responses
    #[arg(long, env, default_value = DEFAULT_RESPONSE_ID)]
    response_id: String,

    /// The assistant message returned in non-streaming completion responses
    #[arg(long, env, default_value = DEFAULT_RESPONSE_CONTENT)]
    response_content: String,

    /// The sentence streamed word by word in streaming completion responses
    #[arg(long, env, default_value = DEFAULT_STREAM_MESSAGE)]
    stream_message: String,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap_or(LevelFilter::Info)),
        )]
    pub log_level_filter: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            chunk_delay_ms: DEFAULT_CHUNK_DELAY_MS,
            verbose: false,
            strict: false,
            response_id: DEFAULT_RESPONSE_ID.to_string(),
            response_content: DEFAULT_RESPONSE_CONTENT.to_string(),
            stream_message: DEFAULT_STREAM_MESSAGE.to_string(),
            log_level_filter: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    pub fn interface(&self) -> &str {
        BIND_HOST
    }

    pub fn chunk_delay(&self) -> Duration {
        Duration::from_millis(self.chunk_delay_ms)
    }

    pub fn response_id(&self) -> &str {
        &self.response_id
    }

    pub fn response_content(&self) -> &str {
        &self.response_content
    }

    pub fn stream_message(&self) -> &str {
        &self.stream_message
    }

    pub fn set_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Delays are tracked at millisecond granularity; sub-millisecond parts are dropped.
    pub fn set_chunk_delay(mut self, delay: Duration) -> Self {
        self.chunk_delay_ms = delay.as_millis() as u64;
        self
    }

    pub fn set_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn set_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn set_response_id(mut self, response_id: impl Into<String>) -> Self {
        self.response_id = response_id.into();
        self
    }

    pub fn set_response_content(mut self, response_content: impl Into<String>) -> Self {
        self.response_content = response_content.into();
        self
    }

    pub fn set_stream_message(mut self, stream_message: impl Into<String>) -> Self {
        self.stream_message = stream_message.into();
        self
    }
}
