use serde_json::{json, Value};

use crate::config::OpenAiConfig;
use crate::error::AppError;

/// Thin pass-through to the OpenAI chat completions API. No retry or
/// backoff: a provider failure surfaces immediately to the caller.
pub struct ContentGenerator {
    client: reqwest::Client,
    config: OpenAiConfig,
}

#[derive(Debug, Clone)]
pub struct CaseStudyBrief {
    pub title: String,
    pub category: String,
    pub objective: String,
    pub approach: Option<String>,
}

impl ContentGenerator {
    pub fn new(config: OpenAiConfig) -> Self {
        ContentGenerator {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Long-form journal post draft from a free-text prompt.
    pub async fn journal_post(&self, prompt: &str) -> Result<String, AppError> {
        self.chat(
            "You are a creative director and design writer. Generate artistic, \
             thoughtful blog posts about design, art, and creative processes. \
             Write in a sophisticated, inspiring tone that resonates with \
             creative professionals.",
            prompt,
            0.8,
            2000,
        )
        .await
    }

    pub async fn case_study(&self, brief: &CaseStudyBrief) -> Result<String, AppError> {
        let mut prompt = format!(
            "Create a detailed case study for a creative project:\n\n\
             Title: {}\nCategory: {}\nObjective: {}\n",
            brief.title, brief.category, brief.objective
        );
        if let Some(ref approach) = brief.approach {
            prompt.push_str(&format!("Approach: {approach}\n"));
        }
        prompt.push_str(
            "\nInclude sections for:\n\
             1. Project Overview\n2. Challenge\n3. Creative Process\n\
             4. Solution\n5. Results/Impact\n\n\
             Write in an artistic, professional tone suitable for a portfolio.",
        );

        self.journal_post(&prompt).await
    }

    /// Brainstorming starter: a pitch for a new portfolio piece in the
    /// given category, optionally constrained to a style.
    pub async fn project_idea(
        &self,
        category: &str,
        style: Option<&str>,
    ) -> Result<String, AppError> {
        let mut prompt = format!(
            "Generate a unique, inspiring creative project idea for:\n\n\
             Category: {category}\n"
        );
        if let Some(style) = style {
            prompt.push_str(&format!("Style: {style}\n"));
        }
        prompt.push_str(
            "\nInclude:\n\
             - Project title\n- Concept overview\n- Key visual elements\n\
             - Potential challenges\n- Expected outcomes\n\n\
             Make it innovative and portfolio-worthy.",
        );

        self.journal_post(&prompt).await
    }

    /// Short evocative caption for a piece of visual work.
    pub async fn image_description(&self, context: &str) -> Result<String, AppError> {
        self.chat(
            "You are an art critic and curator. Generate poetic, insightful \
             descriptions of visual work that capture mood, composition, and \
             artistic intent.",
            &format!("Write a short, evocative description for: {context}"),
            0.9,
            200,
        )
        .await
    }

    async fn chat(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, AppError> {
        let url = format!("{}/chat/completions", self.config.api_base);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&json!({
                "model": self.config.model,
                "messages": [
                    { "role": "system", "content": system },
                    { "role": "user", "content": user },
                ],
                "temperature": temperature,
                "max_tokens": max_tokens,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "completion request failed with {status}: {body}"
            )));
        }

        let body: Value = response.json().await?;
        body["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| AppError::Upstream("completion response had no content".to_string()))
    }
}
