//! Persona invocation adapter
//!
//! Wraps a persona so the controller can invoke it uniformly with a
//! single `(directive, context)` call.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use debate_domain::{Model, Persona};

/// Invokes one persona through the generation gateway
///
/// Stateless: each invocation stands alone, and nothing persists between
/// calls except what is explicitly passed in `context`. Retry, if any, is
/// the caller's policy.
pub struct PersonaInvoker<'a, G: LlmGateway> {
    gateway: &'a G,
    model: &'a Model,
    persona: &'a Persona,
}

impl<'a, G: LlmGateway> PersonaInvoker<'a, G> {
    pub fn new(gateway: &'a G, model: &'a Model, persona: &'a Persona) -> Self {
        Self {
            gateway,
            model,
            persona,
        }
    }

    pub fn persona(&self) -> &Persona {
        self.persona
    }

    /// Produce one utterance for the given directive
    ///
    /// `context` carries prior transcript text for rebuttal and summary
    /// turns; it is empty for openings. A blank generation result is a
    /// failure, not an utterance.
    pub async fn invoke(&self, directive: &str, context: &str) -> Result<String, GatewayError> {
        let prompt = if context.trim().is_empty() {
            directive.to_string()
        } else {
            format!("{directive}\n\n{context}")
        };

        let text = self
            .gateway
            .generate(self.model, &self.persona.system_prompt, &prompt)
            .await?;

        if text.trim().is_empty() {
            return Err(GatewayError::EmptyResponse);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Echoes the prompt back, recording what was sent
    struct EchoGateway {
        prompts: Mutex<Vec<(String, String)>>,
        response: String,
    }

    impl EchoGateway {
        fn new(response: &str) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                response: response.to_string(),
            }
        }
    }

    #[async_trait]
    impl LlmGateway for EchoGateway {
        async fn generate(
            &self,
            _model: &Model,
            system_prompt: &str,
            directive: &str,
        ) -> Result<String, GatewayError> {
            self.prompts
                .lock()
                .unwrap()
                .push((system_prompt.to_string(), directive.to_string()));
            Ok(self.response.clone())
        }
    }

    #[tokio::test]
    async fn test_invoke_without_context_sends_directive_only() {
        let gateway = EchoGateway::new("an argument");
        let model = Model::default();
        let persona = Persona::advocate_for();
        let invoker = PersonaInvoker::new(&gateway, &model, &persona);

        let text = invoker.invoke("state your case", "").await.unwrap();
        assert_eq!(text, "an argument");

        let prompts = gateway.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].1, "state your case");
        assert_eq!(prompts[0].0, persona.system_prompt);
    }

    #[tokio::test]
    async fn test_invoke_appends_context_below_directive() {
        let gateway = EchoGateway::new("a rebuttal");
        let model = Model::default();
        let persona = Persona::advocate_against();
        let invoker = PersonaInvoker::new(&gateway, &model, &persona);

        invoker
            .invoke("rebut this", "their opening statement")
            .await
            .unwrap();

        let prompts = gateway.prompts.lock().unwrap();
        assert_eq!(prompts[0].1, "rebut this\n\ntheir opening statement");
    }

    #[tokio::test]
    async fn test_blank_response_is_a_failure() {
        let gateway = EchoGateway::new("   \n");
        let model = Model::default();
        let persona = Persona::advocate_for();
        let invoker = PersonaInvoker::new(&gateway, &model, &persona);

        let err = invoker.invoke("state your case", "").await.unwrap_err();
        assert_eq!(err, GatewayError::EmptyResponse);
    }
}
