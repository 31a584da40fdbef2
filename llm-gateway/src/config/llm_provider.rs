/// Represents the provider (backend) used for large language model (LLM) inference.
///
/// This enum distinguishes between a local Ollama runtime and the OpenAI
/// REST API. Adding more providers in the future (e.g., Anthropic, Mistral)
/// can be done by extending this enum.
///
/// # Examples
///
/// ```
/// use llm_gateway::LlmProvider;
///
/// fn print_provider(provider: LlmProvider) {
///     match provider {
///         LlmProvider::Ollama => println!("Using local Ollama backend"),
///         LlmProvider::OpenAi => println!("Using OpenAI API"),
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    /// Local Ollama runtime for on-device inference.
    Ollama,
    /// OpenAI's REST API.
    OpenAi,
}
