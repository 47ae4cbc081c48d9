use crate::llm::prompts;

/// Trailer the model is asked to end every message with.
pub fn signature(model: &str) -> String {
    format!("(commit message written by OpenAI {model})")
}

/// Build the completion prompt for the staged changes.
///
/// `status` and `diff` are embedded verbatim inside fenced blocks. Fence
/// sequences inside them are not escaped, so a diff containing ``` can end
/// its block early.
pub fn commit_message_prompt(model: &str, status: &str, diff: &str) -> String {
    let signature = signature(model);
    let marker = prompts::MARKER;

    format!(
        "\n{role}\n\n\
         Here is an example of a good commit message:\n\
         ```\n{example_fix}\n\n{signature}\n```\n\n\
         Here is an example of a good commit message:\n\
         ```text\n{example_deps}\n\n{signature}\n```\n\n\
         {tips}\n\n\
         At the end of the commit message, add a signature:\n\
         ```text\n{signature}\n```\n\n\
         {task}\n\n\
         Now please, write a commit message for the following patch, starting with \"{marker}\".:\n\n\
         Files changed:\n\
         ```\n// {status_cmd}\n{status}\n```\n\n\
         Files diff:\n\
         ```diff\n// {diff_cmd}\n{diff}\n```\n\
         {first_line}\n\n\
         Now, please write a suggested commit message below that is clear, concise, and colorful, \
         following the rules described above, beginning with \"{marker}\" and ending with the \
         signature \"{signature}\":\n\n\
         Respond with the suggested commit message below starting with \"{marker}\" (unquoted).\n",
        role = prompts::ROLE_INSTRUCTIONS,
        example_fix = prompts::EXAMPLE_FIX,
        example_deps = prompts::EXAMPLE_DEPENDENCIES,
        tips = prompts::STYLE_TIPS,
        task = prompts::TASK,
        status_cmd = prompts::STATUS_COMMAND,
        diff_cmd = prompts::DIFF_COMMAND,
        first_line = prompts::FIRST_LINE_RULES,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS: &str = "M  file.py";
    const DIFF: &str = "@@ -1 +1 @@\n-old\n+new";

    #[test]
    fn embeds_status_and_diff_verbatim() {
        let prompt = commit_message_prompt("text-davinci-003", STATUS, DIFF);

        assert!(prompt.contains(&format!("git status -s\n{STATUS}\n```")));
        assert!(prompt.contains(&format!("--no-prefix\n{DIFF}\n```")));
    }

    #[test]
    fn repeats_the_output_format_rules() {
        let prompt = commit_message_prompt("text-davinci-003", STATUS, DIFF);

        assert!(prompt.contains("starting with \"🤖 \""));
        assert!(prompt.contains("avoid starting the message with \"🤖 Update\""));
        assert!(prompt.contains("no more than 50 characters"));
        assert!(prompt.contains("(commit message written by OpenAI text-davinci-003)"));
    }

    #[test]
    fn both_examples_are_signed_with_the_model() {
        let prompt = commit_message_prompt("my-model", "", "");

        assert!(prompt.contains("🤖 Fix password bug in login form"));
        assert!(prompt.contains("🤖 Add prettier and eslint dependencies"));
        // two examples plus the standalone signature block and the closing request
        assert_eq!(prompt.matches("(commit message written by OpenAI my-model)").count(), 4);
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(
            commit_message_prompt("m", STATUS, DIFF),
            commit_message_prompt("m", STATUS, DIFF)
        );
    }

    #[test]
    fn fences_inside_the_diff_are_left_alone() {
        let diff = "+```rust\n+fn main() {}\n+```";
        let prompt = commit_message_prompt("m", STATUS, diff);

        assert!(prompt.contains(diff));
    }
}
