/// Aggregate service over the injected outbound adapters. Domain service
/// traits are implemented on this type, generic over the ports they need.
#[derive(Debug, Clone)]
pub struct Service<LLM> {
    pub(crate) llm_client: LLM,
}

impl<LLM> Service<LLM> {
    pub fn new(llm_client: LLM) -> Self {
        Self { llm_client }
    }
}
