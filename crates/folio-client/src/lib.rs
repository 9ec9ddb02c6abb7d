pub mod fetcher;
pub mod llm;
pub mod writer;

pub use fetcher::ReqwestFetcher;
pub use llm::{OpenAiTransformer, build_prompt};
pub use writer::FileWriter;
