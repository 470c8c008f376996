//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Bounds for the requested word count
pub const MIN_WORD_COUNT: u32 = 300;
pub const MAX_WORD_COUNT: u32 = 2000;
pub const DEFAULT_WORD_COUNT: u32 = 800;

/// Default target audience when the caller does not supply one
pub const DEFAULT_AUDIENCE: &str = "General readers";

/// Unique identifier for a single generation attempt
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for downstream LLM providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderId {
    OpenAI,
    Groq,
    Anthropic,
    /// Self-hosted OpenAI-compatible endpoint
    LocalApi,
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ProviderId {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Some(ProviderId::OpenAI),
            "groq" => Some(ProviderId::Groq),
            "anthropic" => Some(ProviderId::Anthropic),
            "local" | "localapi" | "local-api" => Some(ProviderId::LocalApi),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenAI => "openai",
            ProviderId::Groq => "groq",
            ProviderId::Anthropic => "anthropic",
            ProviderId::LocalApi => "local",
        }
    }

    /// Environment variable that holds this provider's API key
    pub fn env_key(&self) -> &'static str {
        match self {
            ProviderId::OpenAI => "OPENAI_API_KEY",
            ProviderId::Groq => "GROQ_API_KEY",
            ProviderId::Anthropic => "ANTHROPIC_API_KEY",
            ProviderId::LocalApi => "LOCAL_API_KEY",
        }
    }
}

/// Tone of the generated post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Professional,
    Casual,
    Technical,
    Enthusiastic,
    Educational,
}

impl Tone {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "professional" => Some(Tone::Professional),
            "casual" => Some(Tone::Casual),
            "technical" => Some(Tone::Technical),
            "enthusiastic" => Some(Tone::Enthusiastic),
            "educational" => Some(Tone::Educational),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Technical => "Technical",
            Tone::Enthusiastic => "Enthusiastic",
            Tone::Educational => "Educational",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Professional
    }
}

/// Sections the caller can ask for, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    Introduction,
    MainContent,
    Conclusion,
    Faq,
    CallToAction,
}

impl Section {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").as_str() {
            "introduction" | "intro" => Some(Section::Introduction),
            "main content" | "maincontent" | "main" => Some(Section::MainContent),
            "conclusion" => Some(Section::Conclusion),
            "faq" => Some(Section::Faq),
            "call to action" | "calltoaction" | "cta" => Some(Section::CallToAction),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Introduction => "Introduction",
            Section::MainContent => "Main Content",
            Section::Conclusion => "Conclusion",
            Section::Faq => "FAQ",
            Section::CallToAction => "Call to Action",
        }
    }

    /// The standard three-section layout used when the caller picks none
    pub fn default_set() -> Vec<Section> {
        vec![Section::Introduction, Section::MainContent, Section::Conclusion]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Optional writing-style refinement for the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WritingStyle {
    Informative,
    Narrative,
    Persuasive,
    Conversational,
}

impl WritingStyle {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "informative" => Some(WritingStyle::Informative),
            "narrative" => Some(WritingStyle::Narrative),
            "persuasive" => Some(WritingStyle::Persuasive),
            "conversational" => Some(WritingStyle::Conversational),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WritingStyle::Informative => "Informative",
            WritingStyle::Narrative => "Narrative",
            WritingStyle::Persuasive => "Persuasive",
            WritingStyle::Conversational => "Conversational",
        }
    }
}

impl fmt::Display for WritingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parameters for one blog generation request
///
/// Owned by the calling action; lives only for the duration of the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogRequest {
    pub topic: String,
    /// Literal title; `None` asks the model to generate one
    pub title: Option<String>,
    pub tone: Tone,
    pub word_count: u32,
    pub sections: Vec<Section>,
    pub audience: String,
    /// Comma-separated keyword list
    pub keywords: Option<String>,
    pub style: Option<WritingStyle>,
    pub temperature: f32,
    /// Model override; `None` uses the provider's default
    pub model: Option<String>,
    pub provider: ProviderId,
}

impl Default for BlogRequest {
    fn default() -> Self {
        Self {
            topic: String::new(),
            title: None,
            tone: Tone::default(),
            word_count: DEFAULT_WORD_COUNT,
            sections: Section::default_set(),
            audience: DEFAULT_AUDIENCE.to_string(),
            keywords: None,
            style: None,
            temperature: 0.7,
            model: None,
            provider: ProviderId::OpenAI,
        }
    }
}
