use std::sync::Arc;
use tokcount_core::{EXAMPLE_TEXT, PricingTable};
use tokcount_engine::{Pipeline, Session};
use tokcount_tokens::{TiktokenTokenizer, Tokenizer};

fn pipeline() -> Arc<Pipeline> {
    Arc::new(Pipeline::with_pricing(PricingTable::default()).unwrap())
}

#[test]
fn test_token_count_matches_encoder() {
    let pipeline = pipeline();
    let tokenizer = TiktokenTokenizer::cl100k().unwrap();

    for text in [
        "",
        "Hello, world!",
        EXAMPLE_TEXT,
        "Characters often seen together, like \"1234567890\", may become one token.",
    ] {
        let breakdown = pipeline.compute(text, "gpt-4");
        assert_eq!(breakdown.token_count, tokenizer.encode(text).len());
        assert_eq!(breakdown.tokens.len(), breakdown.token_count);
    }
}

#[test]
fn test_breakdown_reconstructs_ascii_text() {
    let pipeline = pipeline();
    let text = "Tokens are groups of characters often seen together.\n\nThey can be predicted.";

    let breakdown = pipeline.compute(text, "gpt-3.5-turbo");
    assert_eq!(breakdown.reconstructed_text(), text);
    assert_eq!(breakdown.encoding, "cl100k_base");
}

#[test]
fn test_vocabulary_is_independent_of_model() {
    let pipeline = pipeline();

    let a = pipeline.compute(EXAMPLE_TEXT, "gpt-4");
    let b = pipeline.compute(EXAMPLE_TEXT, "ada");

    assert_eq!(a.tokens, b.tokens);
    assert_ne!(a.cost, b.cost);
}

#[test]
fn test_session_flow() {
    let mut session = Session::new(pipeline());

    let initial = session.breakdown().clone();
    assert!(initial.token_count > 0);
    assert_eq!(initial.char_count, 187);

    session.clear();
    assert_eq!(session.breakdown().token_count, 0);
    assert_eq!(session.breakdown().cost, 0.0);

    session.edit("Hello, world!");
    let hello = session.breakdown().token_count;
    assert!(hello > 0 && hello < 10);

    session.load_example();
    assert_eq!(session.breakdown(), &initial);
}
