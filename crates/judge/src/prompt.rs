//! Prompt assembly.
//!
//! Renders the system instructions, the packed few-shot examples, and the
//! final query into a role-tagged message sequence. Three sentinel tokens
//! are reserved for structural use; they are chosen to be vanishingly
//! unlikely to appear in natural text.

use crate::pack::PackedExamples;
use veridic_core::example::Example;
use veridic_core::message::Message;

/// Sentinel emitted for a positive verdict.
pub const TRUE_MARKER: &str = "%%TRUE%%";
/// Sentinel emitted for a negative verdict.
pub const FALSE_MARKER: &str = "%%FALSE%%";
/// Sentinel that terminates the response; also the stop sequence.
pub const END_MARKER: &str = "%%END%%";

/// Input delimiters for user messages.
pub const INPUT_BEGIN: &str = "---BEGIN INPUT---";
pub const INPUT_END: &str = "---END INPUT---";

/// The built-in fallback examples, used only when neither the store nor
/// the caller provided any. One static table, injected into the packer so
/// tests can substitute their own defaults. Never persisted.
pub fn builtin_examples() -> Vec<Example> {
    vec![
        Example::new("Paris", true, "Paris is the capital of France, which is in Europe.")
            .with_condition("Is the input a European capital city?"),
        Example::new("17", false, "17 divided by 2 leaves a remainder of 1, so it is odd.")
            .with_condition("Is the input an even number?"),
        Example::new(
            "The quick brown fox jumps over the lazy dog",
            true,
            "Checking letter by letter, all 26 letters of the alphabet appear.",
        )
        .with_condition("Does the input contain every letter of the alphabet?"),
        Example::new(
            "banana",
            false,
            "Banana is a fruit; no programming language by that name is in common use.",
        )
        .with_condition("Is the input a programming language?"),
    ]
}

/// Render the full message sequence for one invocation.
pub fn assemble(condition: &str, input: &str, packed: &PackedExamples) -> Vec<Message> {
    let mut messages = Vec::with_capacity(packed.examples.len() * 2 + 2);
    messages.push(Message::system(system_instructions(!packed.used_default)));

    for (i, example) in packed.examples.iter().enumerate() {
        let example_condition = example.condition.as_deref().unwrap_or(condition);
        messages.push(example_query(i + 1, example_condition, &example.input_text()));
        messages.push(example_answer(example));
    }

    messages.push(final_query(condition, input));
    messages
}

/// The system instructions block, rendered once per invocation.
fn system_instructions(weigh_examples: bool) -> String {
    let mut text = format!(
        "You decide whether a condition holds for an input.\n\
         Reason about the decision first, then finish with your verdict: \
         emit exactly one of {TRUE_MARKER} or {FALSE_MARKER}, followed by {END_MARKER}.\n\
         Never emit more than one verdict marker."
    );
    if weigh_examples {
        text.push_str(
            "\nThe numbered examples below were chosen for this task. \
             When they conflict with your own prior knowledge, weigh the examples more heavily.",
        );
    }
    text
}

/// A numbered example query in the shared delimiter format.
fn example_query(number: usize, condition: &str, input: &str) -> Message {
    Message::user(format!(
        "Example {number}:\nCondition: {condition}\n{INPUT_BEGIN}\n{input}\n{INPUT_END}"
    ))
}

/// The matching example answer: justification, sentinel verdict, terminator.
fn example_answer(example: &Example) -> Message {
    let marker = if example.outcome { TRUE_MARKER } else { FALSE_MARKER };
    let explanation = example.explanation.as_deref().unwrap_or("");
    Message::assistant(format!(
        "Analysis: {explanation}\nFinal Answer: {marker} {END_MARKER}"
    ))
}

/// The final query carrying the real input and condition.
fn final_query(condition: &str, input: &str) -> Message {
    Message::user(format!(
        "Now evaluate the real case. Justify your verdict first, citing example numbers \
         when they apply, then finish with the verdict markers as instructed.\n\
         Condition: {condition}\n{INPUT_BEGIN}\n{input}\n{INPUT_END}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::PackedExamples;
    use veridic_core::message::Role;

    fn packed(examples: Vec<Example>, used_default: bool) -> PackedExamples {
        PackedExamples {
            examples,
            used_default,
            tokens: 0,
        }
    }

    #[test]
    fn empty_packing_yields_system_and_final_query_only() {
        let messages = assemble("Is it food?", "apple", &packed(vec![], true));
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
        assert!(messages[1].content.contains("apple"));
        assert!(messages[1].content.contains("Is it food?"));
    }

    #[test]
    fn examples_render_as_user_assistant_pairs() {
        let examples = vec![
            Example::new("Paris", true, "capital of France"),
            Example::new("rock", false, "not edible"),
        ];
        let messages = assemble("Is it food?", "apple", &packed(examples, false));

        assert_eq!(messages.len(), 6);
        assert_eq!(messages[1].role, Role::User);
        assert!(messages[1].content.starts_with("Example 1:"));
        assert_eq!(messages[2].role, Role::Assistant);
        assert!(messages[2].content.contains(TRUE_MARKER));
        assert!(messages[3].content.starts_with("Example 2:"));
        assert!(messages[4].content.contains(FALSE_MARKER));
        assert!(messages[4].content.ends_with(END_MARKER));
    }

    #[test]
    fn inputs_are_wrapped_in_delimiters() {
        let examples = vec![Example::new("Paris", true, "capital")];
        let messages = assemble("cond", "real input", &packed(examples, false));
        for msg in messages.iter().filter(|m| m.role == Role::User) {
            assert!(msg.content.contains(INPUT_BEGIN));
            assert!(msg.content.contains(INPUT_END));
        }
    }

    #[test]
    fn example_condition_overrides_call_condition() {
        let examples = vec![Example::new("17", false, "odd").with_condition("Is it even?")];
        let messages = assemble("Is it food?", "apple", &packed(examples, false));
        assert!(messages[1].content.contains("Condition: Is it even?"));
        // The final query still carries the call's condition.
        assert!(messages.last().unwrap().content.contains("Condition: Is it food?"));
    }

    #[test]
    fn example_guidance_only_for_non_default_pools() {
        let examples = vec![Example::new("Paris", true, "capital")];

        let custom = assemble("cond", "input", &packed(examples.clone(), false));
        assert!(custom[0].content.contains("weigh the examples"));

        let default = assemble("cond", "input", &packed(examples, true));
        assert!(!default[0].content.contains("weigh the examples"));
    }

    #[test]
    fn system_instructions_name_all_three_sentinels() {
        let messages = assemble("cond", "input", &packed(vec![], true));
        let system = &messages[0].content;
        assert!(system.contains(TRUE_MARKER));
        assert!(system.contains(FALSE_MARKER));
        assert!(system.contains(END_MARKER));
    }

    #[test]
    fn builtin_pool_is_condition_complete() {
        let defaults = builtin_examples();
        assert!(!defaults.is_empty());
        for example in &defaults {
            assert!(example.condition.is_some());
            assert!(example.explanation.is_some());
        }
        // Both verdicts are represented.
        assert!(defaults.iter().any(|e| e.outcome));
        assert!(defaults.iter().any(|e| !e.outcome));
    }
}
