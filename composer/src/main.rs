//! Composer binary entry point

use std::path::PathBuf;

use clap::Parser;

use composer::core::export;
use composer::{Composer, ComposerError, ComposerResult, ProviderClient, RealApiKeySource};
use shared::{
    logging, BlogRequest, ProviderId, Section, Tone, WritingStyle, DEFAULT_AUDIENCE,
    DEFAULT_WORD_COUNT, MAX_WORD_COUNT, MIN_WORD_COUNT,
};

#[derive(Parser)]
#[command(name = "composer")]
#[command(about = "Generate blog posts with an LLM provider")]
struct Args {
    /// Blog topic or description
    #[arg(long)]
    topic: String,

    /// Literal post title; omit to have the model generate one
    #[arg(long)]
    title: Option<String>,

    /// Blog tone: professional, casual, technical, enthusiastic, educational
    #[arg(long, default_value = "professional", value_parser = parse_tone)]
    tone: Tone,

    /// Approximate word count
    #[arg(long, default_value_t = DEFAULT_WORD_COUNT, value_parser = parse_word_count)]
    words: u32,

    /// Section to include (repeatable); defaults to introduction, main-content, conclusion
    #[arg(long = "section", value_parser = parse_section)]
    sections: Vec<Section>,

    /// Target audience
    #[arg(long, default_value = DEFAULT_AUDIENCE)]
    audience: String,

    /// Comma-separated keywords to weave in
    #[arg(long)]
    keywords: Option<String>,

    /// Writing style: informative, narrative, persuasive, conversational
    #[arg(long, value_parser = parse_style)]
    style: Option<WritingStyle>,

    /// Sampling temperature (0.0 - 1.0)
    #[arg(long, default_value_t = 0.7, value_parser = parse_temperature)]
    temperature: f32,

    /// Provider: openai, groq, anthropic, local
    #[arg(long, default_value = "openai", value_parser = parse_provider)]
    provider: ProviderId,

    /// Model name; defaults to the provider's standard model
    #[arg(long)]
    model: Option<String>,

    /// Base URL of a local OpenAI-compatible server (local provider only)
    #[arg(long)]
    base_url: Option<String>,

    /// Output directory for exports
    #[arg(long, default_value = "out")]
    output: PathBuf,

    /// Also write an HTML export
    #[arg(long)]
    html: bool,

    /// Print the generation result as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Log level override (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn parse_tone(s: &str) -> Result<Tone, String> {
    Tone::from_str(s).ok_or_else(|| format!("unknown tone: {s}"))
}

fn parse_section(s: &str) -> Result<Section, String> {
    Section::from_str(s).ok_or_else(|| format!("unknown section: {s}"))
}

fn parse_style(s: &str) -> Result<WritingStyle, String> {
    WritingStyle::from_str(s).ok_or_else(|| format!("unknown writing style: {s}"))
}

fn parse_provider(s: &str) -> Result<ProviderId, String> {
    ProviderId::from_str(s).ok_or_else(|| format!("unknown provider: {s}"))
}

fn parse_word_count(s: &str) -> Result<u32, String> {
    let count: u32 = s.parse().map_err(|_| format!("invalid word count: {s}"))?;
    if (MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&count) {
        Ok(count)
    } else {
        Err(format!(
            "word count must be between {MIN_WORD_COUNT} and {MAX_WORD_COUNT}"
        ))
    }
}

fn parse_temperature(s: &str) -> Result<f32, String> {
    let temperature: f32 = s.parse().map_err(|_| format!("invalid temperature: {s}"))?;
    if (0.0..=1.0).contains(&temperature) {
        Ok(temperature)
    } else {
        Err("temperature must be between 0.0 and 1.0".to_string())
    }
}

#[tokio::main]
async fn main() -> ComposerResult<()> {
    let args = Args::parse();
    logging::init_tracing(args.log_level.as_deref());

    let request = BlogRequest {
        topic: args.topic,
        title: args.title,
        tone: args.tone,
        word_count: args.words,
        sections: if args.sections.is_empty() {
            Section::default_set()
        } else {
            args.sections
        },
        audience: args.audience,
        keywords: args.keywords,
        style: args.style,
        temperature: args.temperature,
        model: args.model,
        provider: args.provider,
    };

    logging::log_startup(&format!(
        "blog generation for '{}' via {}",
        request.topic, request.provider
    ));

    let composer = Composer::new(RealApiKeySource, ProviderClient::new());
    let blog = match composer.compose(&request, args.base_url.as_deref()).await {
        Ok(blog) => blog,
        Err(error) => {
            logging::log_error("blog generation", &error);
            return Err(error);
        }
    };

    let written = export::write_exports(&args.output, &request, &blog, args.html).await?;

    if args.json {
        let report = serde_json::to_string_pretty(&blog).map_err(|e| {
            ComposerError::SerializationError {
                message: e.to_string(),
            }
        })?;
        println!("{report}");
    } else {
        println!(
            "Generated {} words (model: {}, {} tokens, {} ms)",
            blog.content.split_whitespace().count(),
            blog.model_used,
            blog.tokens_used,
            blog.response_time.as_millis()
        );
        for path in &written {
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}
