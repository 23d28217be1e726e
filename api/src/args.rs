use clap::Parser;
use drivethru_core::domain::common::{DriveThruConfig, LlmConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "drivethru-api", about = "Conversational drive-through ordering API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://127.0.0.1:8080"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "OPENAI_API_KEY")]
    pub openai_api_key: String,

    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o-mini")]
    pub openai_model: String,

    /// Organization header, only sent alongside organization keys.
    #[arg(long, env = "OPENAI_ORG")]
    pub openai_org: Option<String>,

    #[arg(long, env = "OPENAI_PROJECT")]
    pub openai_project: Option<String>,

    /// OpenAI-compatible endpoint root.
    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub openai_base_url: String,

    #[arg(long, env = "LLM_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,
}

impl From<Args> for DriveThruConfig {
    fn from(args: Args) -> Self {
        DriveThruConfig {
            llm: LlmConfig {
                api_key: args.llm.openai_api_key,
                model: args.llm.openai_model,
                organization: args.llm.openai_org,
                project: args.llm.openai_project,
                base_url: args.llm.openai_base_url,
                request_timeout_secs: args.llm.request_timeout_secs,
            },
        }
    }
}
