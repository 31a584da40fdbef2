//! Prompt templates for the assistant's model calls.
//!
//! Each template is a pure function `(context fields) -> prompt text` over
//! versioned few-shot example constants, so the rendered prompts can be
//! unit-tested without a live model. The few-shot examples steer output
//! format only; they are data, not logic.

/// Few-shot examples for intent classification.
const INTENT_EXAMPLES: &str = "\
Input: “How is this serum for sensitive skin?”
Output: Non-Recommendation

Input: “serums”
Output: Recommendation

Input: “something gentle for summer”
Output: Recommendation

Input: “I want to buy face-wash”
Output: Recommendation

Input: “What happened to my user ticket”
Output: Non-Recommendation";

/// Few-shot examples demonstrating 2–3 short, contextual follow-ups.
const FOLLOWUP_EXAMPLES: &str = "\
### Example 1: Specific Keyword
User Query: “serums”
Assistant (ask follow-ups):
1. Great choice! What skin concern are you targeting—hydration, blemishes, or something else?
2. And could you tell me about your skin type—oily, acne-prone, or dry and flaky?

### Example 2: Vague Request
User Query: “something gentle for summer”
Assistant (ask follow-ups):
1. What product category are you interested in—toners, serums, SPFs, or cleansers?
2. Do you have any specific skin concerns or ingredients you’d like to avoid?
3. Finally, is there a particular texture or finish you prefer—lightweight gel, creamy, or spray?

### Example 3: Another Specific Keyword
User Query: “moisturizers”
Assistant (ask follow-ups):
1. Perfect—what’s your main goal: extra hydration, oil control, or anti-aging?
2. How would you describe your skin type—combination, sensitive, or normal?
3. Any ingredients you love or dislike (like hyaluronic acid, ceramides, or fragrances)?";

/// Few-shot examples demonstrating the structured refined-query format.
const REFINE_EXAMPLES: &str = "\
### Example 1
User Query: “serums”
Follow-up Answers:
- Skin concern: hydration
- Skin type: dry and flaky
- Preference: fragrance-free

Output:
Category: Serum
Description: Looking for a hydrating serum suitable for dry and flaky skin, preferably fragrance-free.
Top Ingredients: Hyaluronic acid, glycerin
Tags: dry skin, hydration, fragrance-free

---

### Example 2
User Query: “something gentle for summer”
Follow-up Answers:
- Product category: SPF and moisturizers
- Skin concerns: acne-prone, sensitive to fragrance
- Ingredient to avoid: alcohol

Output:
Category: SPF, Moisturizer
Description: Needs a gentle, summer-friendly SPF and moisturizer for acne-prone, sensitive skin. Prefers fragrance-free and alcohol-free options.
Top Ingredients: Zinc oxide, niacinamide
Tags: summer, sensitive skin, acne-prone, fragrance-free, alcohol-free";

/// Renders the intent-classification prompt for a raw user query.
pub fn intent_prompt(query: &str) -> String {
    format!(
        "Classify the following user query as either “Recommendation” or “Non-Recommendation.”\n\n\
         Examples:\n{INTENT_EXAMPLES}\n\n\
         Now classify:\n\
         Input: “{query}”\n\
         Output:"
    )
}

/// Renders the follow-up-question prompt for a recommendation-style query.
pub fn followup_prompt(query: &str) -> String {
    format!(
        "You are a helpful and friendly assistant that, when presented with a recommendation-style query, \
         first asks 2–3 short, contextual follow-up questions to understand the user’s needs before \
         showing any results. Follow the patterns below.\n\n\
         Examples:\n\n{FOLLOWUP_EXAMPLES}\n\n\
         ---\n\n\
         Now apply this pattern:\n\n\
         User Query: “{query}”\n\
         Assistant (ask follow-ups):"
    )
}

/// Renders the query-refinement prompt from the original query and the
/// user's free-text answers to the follow-up questions.
pub fn refine_prompt(query: &str, answers: &str) -> String {
    format!(
        "You are an expert assistant that takes a user's initial query and their answers to follow-up \
         questions, then creates a structured, enriched query for semantic search in a beauty product \
         database.\n\n\
         Format the final output as:\n\
         Category: <product category>\n\
         Description: <brief 1–2 line summary of what the user is looking for>\n\
         Top Ingredients: <list of ingredients mentioned or inferred as desirable or avoidable>\n\
         Tags: <skin concerns, preferences, skin type, seasonal needs, etc.>\n\n\
         Examples:\n\n{REFINE_EXAMPLES}\n\n\
         ---\n\n\
         Now generate the structured query for this case:\n\n\
         User Query: {query}\n\
         {answers}\n\n\
         Output:"
    )
}

/// Renders the grounding prompt that constrains the model to the supplied
/// context block.
pub fn grounded_answer_prompt(context: &str, question: &str) -> String {
    format!(
        "You are an expert skincare consultant. Use ONLY the information provided under “Context” to \
         answer the question below. The answer to the question would exist in the Context and if not, \
         maybe rethink the question and give the answer.\n\n\
         Context:\n{context}\n\n\
         Question:\n{question}\n\n\
         Answer:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_prompt_embeds_query_and_labels() {
        let p = intent_prompt("serums");
        assert!(p.contains("“serums”"));
        assert!(p.contains("Recommendation"));
        assert!(p.contains("Non-Recommendation"));
        assert!(p.trim_end().ends_with("Output:"));
    }

    #[test]
    fn refine_prompt_demonstrates_structured_format() {
        let p = refine_prompt("serums", "dry skin, fragrance-free");
        assert!(p.contains("Category:"));
        assert!(p.contains("Top Ingredients:"));
        assert!(p.contains("Tags:"));
        assert!(p.contains("dry skin, fragrance-free"));
    }

    #[test]
    fn grounded_prompt_contains_context_block() {
        let p = grounded_answer_prompt("passage one\n\npassage two", "What is the philosophy?");
        assert!(p.contains("Context:\npassage one\n\npassage two"));
        assert!(p.contains("Question:\nWhat is the philosophy?"));
    }

    #[test]
    fn templates_are_deterministic() {
        assert_eq!(followup_prompt("toners"), followup_prompt("toners"));
        assert_eq!(
            refine_prompt("serums", "oily skin"),
            refine_prompt("serums", "oily skin")
        );
    }
}
