// Prompt constants for content generation.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// `{topic}` and `{platform}` are interpolated by the generator.
pub const CONTENT_GENERATION_PROMPT_TEMPLATE: &str = "\
    Write a Korean social media post about \"{topic}\" for the platform \"{platform}\".\n\
    Return a single JSON object with these fields:\n\
    - \"title\": string\n\
    - \"content\": string, the full body text, sentences ending with a period\n\
    - \"sections\": array of {\"title\": string, \"content\": string} (may be empty)\n\
    - \"script\": array of {\"time\": string, \"type\": string, \"text\": string, \"visual\": string} \
      (for short-form video platforms; otherwise empty)\n\
    - \"hashtags\": string of space-separated tags, each starting with #\n\
    Keep the tone friendly and concrete.";
