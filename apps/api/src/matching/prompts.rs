// Prompt templates for skill extraction.
// The system prompt comes from llm_client::prompts::JSON_ONLY_SYSTEM.

/// Skill extraction prompt. Replace `{project_text}` before sending.
pub const SKILL_EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extract the main technical skills from this project description and return them as a JSON array of strings.

Project description:
{project_text}

Rules:
- Return ONLY a JSON array, e.g. ["Python", "AWS", "Docker"].
- Use short canonical skill names (languages, frameworks, platforms, tools).
- Do NOT include soft skills, seniority, or team size.
- Return [] if no technical skills are mentioned."#;
