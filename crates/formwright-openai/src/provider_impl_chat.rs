use std::{future::Future, pin::Pin, sync::Arc, time::Instant};

use formwright_core::{
    error::Result,
    generic::GenericChatCompletionResponse,
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};
use tracing::{info, warn};

use crate::{
    OpenAiAdapter,
    api_v1::{ChatCompletionMessage, ChatCompletionRequest},
    error::OpenAiError,
};

impl ChatCompletionProvider for OpenAiAdapter {
    type Message = ChatCompletionMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request_id = params.request_id.unwrap_or_default();

            if !client.has_api_key() {
                warn!(%request_id, "completion API key not configured");
                return Err(OpenAiError::MissingApiKey.into());
            }

            let request = ChatCompletionRequest::from(params);
            info!(%request_id, model = %request.model, "calling completion endpoint");

            let started = Instant::now();
            let outcome = client.chat_completion(&request).await;
            let elapsed_ms = started.elapsed().as_millis() as u64;

            let response = match outcome {
                Ok(response) => response,
                Err(err) => {
                    warn!(%request_id, elapsed_ms, error = %err, "completion call failed");
                    return Err(err.into());
                }
            };

            let usage = response.usage_report();
            info!(
                %request_id,
                elapsed_ms,
                prompt_tokens = usage.map(|u| u.prompt_tokens),
                completion_tokens = usage.map(|u| u.completion_tokens),
                total_tokens = usage.map(|u| u.total_tokens),
                "completion endpoint responded"
            );

            let Some(content) = response.first_content() else {
                return Err(OpenAiError::Format(
                    "missing choices[0].message.content".into(),
                )
                .into());
            };

            Ok(GenericChatCompletionResponse {
                content: content.to_owned(),
                model: response.model.clone().unwrap_or(request.model),
                usage,
            })
        })
    }
}
