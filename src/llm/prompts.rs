/// Leading token every accepted suggestion must carry.
pub const MARKER: &str = "🤖 ";

/// First word the model is steered away from.
pub const BANNED_FIRST_WORD: &str = "Update";

pub const ROLE_INSTRUCTIONS: &str = r#"I want you to act as a technical writer for software engineers, your primary responsibility
is to write clear and concise commit messages for code changes. Your job is to communicate
the purpose and impact of code changes to other members of the development team. It is
important to provide context and details about the changes made, but avoid including
personal opinions or subjective evaluations in your messages.

A good commit message has the following characteristics:
- It is concise and accurately describes the changes made in the commit.
- It is written in the imperative mood and begins with a verb
- It explains why the change was made, rather than how it was made.
- It includes a signature at the end of the message."#;

pub const EXAMPLE_FIX: &str = r#"🤖 Fix password bug in login form

The login form was submitting even if the password field was empty.
This commit fixes the bug by checking that the password field is not
empty before allowing the form to be submitted.
"#;

pub const EXAMPLE_DEPENDENCIES: &str = r#"🤖 Add prettier and eslint dependencies

This commit updates the package.json file to include the latest
dependencies for prettier and eslint.

prettier is a code formatter that automatically formats code to
conform to a consistent style. It is configured to use the
recommended settings for the JavaScript Standard Style.

eslint is a linter that checks for common errors and code smells.
It is configured to use the recommended settings for the
JavaScript Standard Style."#;

pub const STYLE_TIPS: &str = r#"Some other tips for writing good commit messages:
- Separate subject from body with a blank line
- Keep the subject line (the first line) to 50 characters or less
- Use the body of the message to explain the details of the commit, if necessary
- Wrap the body at 72 characters
- The first two characters should be "🤖 " to indicate that the commit message was written by an AI model
- Do not start with the word "Update" or anything implied by a commit"#;

pub const TASK: &str = "Your first task is to review staged changes and suggest a clear and concise commit message for the latest code update to ensure they meet the required standards described above for clarity and conciseness.";

pub const FIRST_LINE_RULES: &str = r#"Lastly, avoid starting the message with "🤖 Update". Instead, choose a unique and stylish first line in the imperative tense that concisely describes the changes made in the commit. This line should be no more than 50 characters."#;

pub const STATUS_COMMAND: &str = "git status -s";
pub const DIFF_COMMAND: &str = "git diff --cached --no-color --no-ext-diff --unified=0 --no-prefix";
