//! Prompt templates for the debate flow

use crate::core::topic::Topic;

/// Templates for generating the directive sent at each turn
pub struct DebatePrompt;

impl DebatePrompt {
    /// System prompt for the advocate arguing in favor of the motion
    pub fn pro_system() -> &'static str {
        r#"You are a skilled debater arguing IN FAVOR of the motion.
Your role is to present compelling arguments that support the given position.

Guidelines:
- Provide clear, logical, and evidence-based arguments
- Use specific examples and data when possible
- When asked to rebut, directly address your opponent's points
- Maintain a professional and respectful tone
- Keep responses concise and focused on core arguments
- Structure your arguments with clear reasoning"#
    }

    /// System prompt for the advocate arguing against the motion
    pub fn con_system() -> &'static str {
        r#"You are a skilled debater arguing AGAINST the motion.
Your role is to present compelling arguments that oppose the given position.

Guidelines:
- Provide clear, logical, and evidence-based arguments
- Use specific examples and data when possible
- When asked to rebut, directly address your opponent's points
- Maintain a professional and respectful tone
- Keep responses concise and focused on core arguments
- Structure your arguments with clear reasoning"#
    }

    /// Directive for an opening statement, built from the topic only
    pub fn opening_directive(topic: &Topic) -> String {
        format!(
            "The debate motion is: {}. \
             Please provide your opening statement with 3 distinct, numbered points.",
            topic
        )
    }

    /// Directive for a rebuttal
    ///
    /// The opponent's opening statement travels separately as invocation
    /// context, not inside the directive.
    pub fn rebuttal_directive(topic: &Topic) -> String {
        format!(
            "The debate motion is: {}. \
             Your opponent's opening statement follows below. \
             Please rebut each of their points directly.",
            topic
        )
    }

    /// Directive for a final position summary
    ///
    /// The full prior transcript travels separately as invocation context.
    pub fn summary_directive(topic: &Topic) -> String {
        format!(
            "The debate motion is: {}. \
             The full debate so far follows below. \
             Please provide your final position, summarizing your strongest arguments \
             in light of the whole exchange.",
            topic
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_directive_carries_motion() {
        let topic = Topic::new("AI should be regulated");
        let directive = DebatePrompt::opening_directive(&topic);
        assert!(directive.contains("AI should be regulated"));
        assert!(directive.contains("3 distinct, numbered points"));
    }

    #[test]
    fn test_rebuttal_directive_does_not_embed_context() {
        let topic = Topic::new("AI should be regulated");
        let directive = DebatePrompt::rebuttal_directive(&topic);
        assert!(directive.contains("rebut"));
        // Context is concatenated by the invocation adapter, not here
        assert!(directive.contains("follows below"));
    }

    #[test]
    fn test_summary_directive_mentions_final_position() {
        let topic = Topic::new("AI should be regulated");
        let directive = DebatePrompt::summary_directive(&topic);
        assert!(directive.contains("final position"));
    }
}
