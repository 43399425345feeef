//! Reading content from a file or stdin.

use super::ContentArgs;
use repurpose_content::Draft;
use std::io::Read;
use tracing::debug;

/// Reads the draft described by `args`.
///
/// With `--response` the text is parsed as a model response; if it carries no
/// usable JSON the whole text is taken as content.
pub fn read_draft(args: &ContentArgs) -> std::io::Result<Draft> {
    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    debug!(chars = text.chars().count(), response = args.response, "Read input");

    if args.response {
        let fallback = Draft::new(text.trim().to_string(), Vec::new());
        Ok(Draft::from_response_or(&text, fallback))
    } else {
        Ok(Draft::new(text.trim_end().to_string(), Vec::new()))
    }
}
