use crate::domain::common::{DriveThruConfig, services::Service};
use crate::infrastructure::llm::openai_client::OpenAILLMClient;

pub type DriveThruService = Service<OpenAILLMClient>;

pub async fn create_service(config: DriveThruConfig) -> Result<DriveThruService, anyhow::Error> {
    let llm_client = OpenAILLMClient::new(config.llm)?;
    Ok(Service::new(llm_client))
}
