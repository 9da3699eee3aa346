use crate::response::{CompletionChunk, CompletionResponse};
use service::config::Config;
use std::sync::Arc;

/// A sentence split into the fragments that get streamed, one per word.
///
/// Every fragment except the last keeps a single trailing space, so joining
/// the fragments in order gives back the sentence with its words separated
/// by single spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkPlan {
    fragments: Vec<String>,
}

impl ChunkPlan {
    pub fn from_message(message: &str) -> Self {
        let words: Vec<&str> = message.split_whitespace().collect();
        let last = words.len().saturating_sub(1);

        let fragments = words
            .iter()
            .enumerate()
            .map(|(index, word)| {
                if index < last {
                    format!("{word} ")
                } else {
                    word.to_string()
                }
            })
            .collect();

        Self { fragments }
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.fragments.len()
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn chunk(&self, index: usize) -> Option<CompletionChunk> {
        self.fragments.get(index).map(CompletionChunk::new)
    }

    pub fn chunks(&self) -> impl Iterator<Item = CompletionChunk> + '_ {
        self.fragments.iter().map(CompletionChunk::new)
    }

    pub fn reassemble(&self) -> String {
        self.fragments.concat()
    }
}

/// Everything the mock answers with, built once when the server is constructed.
#[derive(Debug, Clone)]
pub struct CannedCompletions {
    response_id: String,
    response_content: String,
    stream_plan: Arc<ChunkPlan>,
}

impl CannedCompletions {
    pub fn new(
        response_id: impl Into<String>,
        response_content: impl Into<String>,
        stream_message: &str,
    ) -> Self {
        Self {
            response_id: response_id.into(),
            response_content: response_content.into(),
            stream_plan: Arc::new(ChunkPlan::from_message(stream_message)),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.response_id(),
            config.response_content(),
            config.stream_message(),
        )
    }

    pub fn response(&self) -> CompletionResponse {
        CompletionResponse::assistant(&self.response_id, &self.response_content)
    }

    pub fn stream_plan(&self) -> Arc<ChunkPlan> {
        Arc::clone(&self.stream_plan)
    }
}

impl Default for CannedCompletions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STREAM_MESSAGE: &str = "This is a mock streaming response from the test server.";

    #[test]
    fn test_plan_splits_default_sentence_into_ten_words() {
        let plan = ChunkPlan::from_message(STREAM_MESSAGE);

        assert_eq!(plan.len(), 10);
        assert_eq!(plan.fragments()[0], "This ");
        assert_eq!(plan.fragments()[9], "server.");
        assert!(plan.is_last(9));
        assert!(!plan.is_last(8));
    }

    #[test]
    fn test_plan_reassembles_sentence_exactly() {
        let plan = ChunkPlan::from_message(STREAM_MESSAGE);

        assert_eq!(plan.reassemble(), STREAM_MESSAGE);
        let from_chunks: String = plan.chunks().map(|c| c.content().to_string()).collect();
        assert_eq!(from_chunks, STREAM_MESSAGE);
    }

    #[test]
    fn test_only_last_fragment_lacks_trailing_space() {
        let plan = ChunkPlan::from_message(STREAM_MESSAGE);

        for (index, fragment) in plan.fragments().iter().enumerate() {
            assert_eq!(fragment.ends_with(' '), !plan.is_last(index), "{fragment:?}");
        }
    }

    #[test]
    fn test_plan_collapses_irregular_whitespace() {
        let plan = ChunkPlan::from_message("  one\ttwo \n three  ");

        assert_eq!(plan.fragments(), ["one ", "two ", "three"]);
        assert_eq!(plan.reassemble(), "one two three");
    }

    #[test]
    fn test_empty_and_blank_messages_produce_empty_plan() {
        for message in ["", "   \n\t"] {
            let plan = ChunkPlan::from_message(message);
            assert!(plan.is_empty());
            assert_eq!(plan.chunks().count(), 0);
            assert_eq!(plan.reassemble(), "");
        }
    }

    #[test]
    fn test_single_word_has_no_trailing_space() {
        let plan = ChunkPlan::from_message("Hello");

        assert_eq!(plan.chunk(0).unwrap().content(), "Hello");
        assert!(plan.chunk(1).is_none());
    }

    #[test]
    fn test_canned_completions_from_default_config() {
        let canned = CannedCompletions::default();
        let response = canned.response();

        assert_eq!(response.id, "mock-123");
        assert_eq!(
            response.content(),
            Some("This is a mock non-streaming response.")
        );
        assert_eq!(canned.stream_plan().reassemble(), STREAM_MESSAGE);
    }

    #[test]
    fn test_canned_completions_follow_config_overrides() {
        let config = Config::default()
            .set_response_id("resp-7")
            .set_response_content("short answer")
            .set_stream_message("a b");
        let canned = CannedCompletions::from_config(&config);

        assert_eq!(canned.response().id, "resp-7");
        assert_eq!(canned.response().content(), Some("short answer"));
        assert_eq!(canned.stream_plan().fragments(), ["a ", "b"]);
    }
}
