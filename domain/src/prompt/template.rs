//! Prompt templates for the arena flow

/// Acceptance criteria validators apply to a proposed score.
pub const SCORING_CRITERIA: &str = r#"The score JSON is valid if:
1. All fields (logic, creativity, persuasiveness, total, one_line_feedback) are present
2. logic is between 0-40, creativity 0-30, persuasiveness 0-30
3. total equals logic + creativity + persuasiveness
4. The scores are reasonable for the quality of the argument, not all 0s or all max unless justified
5. one_line_feedback is a brief, constructive sentence"#;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for topic selection
    pub fn topic_system() -> &'static str {
        r#"You are the game host for a weekly debate game called Verdict Arena.
You pick debate topics from live news content. You answer with pure JSON only."#
    }

    /// User prompt asking for one debatable topic from a page excerpt
    pub fn topic_prompt(page_excerpt: &str) -> String {
        format!(
            r#"From the following front page content, identify ONE interesting,
debate-worthy story or topic that has TWO reasonable opposing sides.

Front page content:
{}

Respond ONLY with this JSON format and nothing else:
{{
    "topic": str,      // The debate topic in 1-2 sentences
    "side_a": str,     // One position (max 10 words)
    "side_b": str      // The opposing position (max 10 words)
}}
No markdown, no extra text. Pure JSON only."#,
            page_excerpt
        )
    }

    /// System prompt for argument scoring
    pub fn scoring_system() -> &'static str {
        r#"You are an impartial debate judge for the game Verdict Arena.
You score arguments strictly on their merits and answer with pure JSON only."#
    }

    /// User prompt asking for a score card for one argument
    pub fn scoring_prompt(topic: &str, position: &str, argument: &str) -> String {
        format!(
            r#"DEBATE TOPIC: {}
PLAYER IS ARGUING FOR: "{}"

PLAYER'S ARGUMENT:
"{}"

Score this argument on a scale of 0 to 100 total points across three dimensions:
- Logic (0-40): Is the reasoning coherent, well-structured, and factually grounded?
- Creativity (0-30): Is the argument original, interesting, or uses unexpected angles?
- Persuasiveness (0-30): Would this argument genuinely persuade a neutral reader?

Respond ONLY with this JSON:
{{
    "logic": int,
    "creativity": int,
    "persuasiveness": int,
    "total": int,
    "one_line_feedback": str
}}
No markdown. Pure JSON only. total must equal logic + creativity + persuasiveness."#,
            topic, position, argument
        )
    }

    /// Task description handed to tolerant validators for a scoring decision
    pub fn scoring_task(topic: &str) -> String {
        format!(
            "Score a debate argument about '{}' on logic, creativity, and persuasiveness (0-100 total)",
            topic
        )
    }

    /// System prompt for validators verifying a proposal
    pub fn validator_system() -> &'static str {
        r#"You are an independent validator. You do not redo the task yourself.
You only decide whether a proposed result is an acceptable outcome of the task
under the stated criteria. Begin your answer with ACCEPT or REJECT."#
    }

    /// User prompt for validators verifying a proposal
    pub fn validator_prompt(task: &str, criteria: &str, proposal: &str) -> String {
        format!(
            r#"TASK:
{}

ACCEPTANCE CRITERIA:
{}

PROPOSED RESULT:
{}

Does the proposed result satisfy the acceptance criteria for this task?
Answer ACCEPT or REJECT on the first line, then give one sentence of reasoning."#,
            task, criteria, proposal
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_prompt_embeds_inputs() {
        let prompt = PromptTemplate::scoring_prompt(
            "Remote work",
            "Remote is the future",
            "Commutes waste hours every single day.",
        );
        assert!(prompt.contains("DEBATE TOPIC: Remote work"));
        assert!(prompt.contains("PLAYER IS ARGUING FOR: \"Remote is the future\""));
        assert!(prompt.contains("Commutes waste hours"));
        assert!(prompt.contains("\"one_line_feedback\": str"));
    }

    #[test]
    fn test_topic_prompt_embeds_excerpt() {
        let prompt = PromptTemplate::topic_prompt("1. Show HN: A new database");
        assert!(prompt.contains("Show HN: A new database"));
        assert!(prompt.contains("\"side_a\": str"));
    }

    #[test]
    fn test_validator_prompt_sections() {
        let prompt = PromptTemplate::validator_prompt("task", SCORING_CRITERIA, "{}");
        assert!(prompt.contains("TASK:\ntask"));
        assert!(prompt.contains("total equals logic + creativity + persuasiveness"));
        assert!(prompt.contains("PROPOSED RESULT:\n{}"));
    }

    #[test]
    fn test_scoring_task_mentions_topic() {
        assert!(PromptTemplate::scoring_task("Rust vs Go").contains("'Rust vs Go'"));
    }
}
