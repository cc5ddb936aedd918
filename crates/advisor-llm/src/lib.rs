//! LLM provider abstraction for advisor-rs
//!
//! This crate provides a provider-agnostic seam for the optional LLM-backed
//! summarizer and sentiment classifier. It is deliberately small: plain
//! text-in/text-out chat completions, no tool calling, no multi-modal
//! content — no pipeline stage needs more.

pub mod chat;
pub mod error;
pub mod provider;
pub mod providers;

pub use chat::{ChatMessage, ChatRequest, ChatResponse, Role, TokenUsage};
pub use error::{LlmError, Result};
pub use provider::LlmProvider;
pub use providers::{OpenAiConfig, OpenAiProvider};
