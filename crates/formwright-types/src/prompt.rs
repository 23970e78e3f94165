//! The Prompt Builder: form description ➜ instruction messages.
use formwright_core::{error::Result, generic::GenericMessage};
use formwright_prompt::chain::PromptChain;

use crate::fragments::{FormContractFragment, FormDescriptionFragment};

/// Build the two-message instruction for `query`.
///
/// The output is deterministic and embeds `query` unmodified. Blank input
/// fails with [`formwright_core::error::FormError::EmptyQuery`].
///
/// ```rust
/// use formwright_types::prompt::build_form_prompt;
///
/// let messages = build_form_prompt("A newsletter signup with email").unwrap();
/// assert_eq!(messages.len(), 2);
/// assert!(messages[1].content.contains("A newsletter signup with email"));
/// ```
pub fn build_form_prompt(query: &str) -> Result<Vec<GenericMessage>> {
    let description = FormDescriptionFragment::new(query)?;

    Ok(PromptChain::new()
        .with(FormContractFragment::new())
        .with(description)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwright_core::{error::FormError, generic::GenericRole};

    #[test]
    fn embeds_the_query_verbatim() {
        let query = "  Job application: name, email, CV link & \"years\" of {experience}\n";
        let messages = build_form_prompt(query).unwrap();

        assert_eq!(messages[0].role, GenericRole::System);
        assert_eq!(messages[1].role, GenericRole::User);
        assert!(messages[1].content.contains(query));
        assert!(!messages[0].content.contains(query));
    }

    #[test]
    fn is_deterministic() {
        let first = build_form_prompt("contact form").unwrap();
        let second = build_form_prompt("contact form").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn blank_queries_are_rejected() {
        for query in ["", "   ", "\n\t"] {
            assert!(matches!(build_form_prompt(query), Err(FormError::EmptyQuery)));
        }
    }
}
