use crate::models::{ConversationTurn, Role};

// Flatten the conversation into the text the model continues.
// Every turn becomes "## <role>: <content>\n" and the prompt ends on the
// assistant cue so the model answers as the assistant.
pub fn render_prompt(turns: &[ConversationTurn]) -> String {
    let mut prompt = String::new();
    for turn in turns {
        push_line(&mut prompt, turn.role, &turn.content);
    }
    prompt.push_str(&cue(Role::Assistant));
    prompt
}

fn cue(role: Role) -> String {
    format!("## {}: ", role.as_str())
}

fn push_line(prompt: &mut String, role: Role, content: &str) {
    prompt.push_str(&cue(role));
    prompt.push_str(content);
    prompt.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_message_ends_with_assistant_cue() {
        let prompt = render_prompt(&[ConversationTurn::user("hello")]);
        assert_eq!(prompt, "## user: hello\n## assistant: ");
    }

    #[test]
    fn assistant_turns_are_kept() {
        let turns = vec![
            ConversationTurn::user("hi"),
            ConversationTurn::assistant("hello, how can I help?"),
            ConversationTurn::user("tell me a joke"),
        ];
        assert_eq!(
            render_prompt(&turns),
            "## user: hi\n## assistant: hello, how can I help?\n## user: tell me a joke\n## assistant: "
        );
    }

    #[test]
    fn empty_conversation_is_just_the_cue() {
        assert_eq!(render_prompt(&[]), "## assistant: ");
    }

    #[test]
    fn multiline_content_is_not_escaped() {
        let prompt = render_prompt(&[ConversationTurn::user("line one\nline two")]);
        assert!(prompt.starts_with("## user: line one\nline two\n"));
    }
}
