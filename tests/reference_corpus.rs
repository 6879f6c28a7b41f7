//! The worked example from the WWBP lexica page, scored step by step and
//! through the pipeline.

use lexscore::aggregate::{lexicon_value, weighted_relative_frequencies};
use lexscore::precision::{correct_float, sum_values};
use lexscore::prelude::*;

const DOC1: &str = "a a b b b b b b b b b b c c c e e e e e e f f f f";
const DOC2: &str = "a a a a a b b b c c c c c c c c d d d d f f f f f f f f f f";
const INTERCEPT: f64 = 23.2189;

fn weights() -> CategoryWeights {
    [("a", 3.0), ("b", 87.0), ("c", -15.0)]
        .into_iter()
        .map(|(token, weight)| (token.to_string(), weight))
        .collect()
}

fn tokens(doc: &str) -> Vec<&str> {
    doc.split(' ').collect()
}

#[test]
fn test_documents_have_expected_shape() {
    let doc1 = count_frequencies(tokens(DOC1));
    let doc2 = count_frequencies(tokens(DOC2));

    assert_eq!(doc1.word_count(), 25);
    assert_eq!(doc2.word_count(), 30);
    assert_eq!(doc1.len(), 5);
    assert_eq!(doc2.len(), 5);
}

#[test]
fn test_manual_steps() {
    let weights = weights();

    let doc1 = weighted_relative_frequencies(&weights, &count_frequencies(tokens(DOC1)));
    let doc1_sum: f64 = doc1.iter().map(|item| item.value).sum();
    assert_eq!(doc1_sum, 33.24);
    assert_eq!(lexicon_value(&doc1, INTERCEPT, Precision::SUM_DEFAULT), 56.4589);

    let doc2 = weighted_relative_frequencies(&weights, &count_frequencies(tokens(DOC2)));
    let doc2_sum: f64 = doc2.iter().map(|item| item.value).sum();
    assert_eq!(correct_float(doc2_sum, Precision::SUM_DEFAULT), 5.2);
    assert_eq!(
        sum_values(doc2.iter().map(|item| item.value), Precision::SUM_DEFAULT),
        5.2
    );
    assert_eq!(lexicon_value(&doc2, INTERCEPT, Precision::SUM_DEFAULT), 28.4189);
}

#[test]
fn test_matcher_and_aggregator() -> Result<()> {
    let lexicon = Lexicon::single("lex", weights());

    for (doc, expected) in [(DOC1, 56.4589), (DOC2, 28.4189)] {
        let freqs = count_frequencies(tokens(doc));
        let matches = match_lexicon(&freqs, &lexicon, None, None)?;
        let value = calc_lex(
            &matches["lex"],
            INTERCEPT,
            freqs.word_count(),
            Encoding::Frequency,
            Precision::default(),
        )?;
        assert_eq!(value, expected);
    }

    Ok(())
}

#[test]
fn test_pipeline() -> Result<()> {
    let scorer = make_scorer(weights(), INTERCEPT, None);
    assert_eq!(scorer.score(&tokens(DOC1))?, 56.4589);
    assert_eq!(scorer.score(&tokens(DOC2))?, 28.4189);
    Ok(())
}

#[test]
fn test_match_report() -> Result<()> {
    let lexicon = Lexicon::single("lex", weights());
    let freqs = count_frequencies(tokens(DOC1));
    let matches = match_lexicon(&freqs, &lexicon, None, None)?;

    let report = prepare_matches(
        &matches["lex"],
        Encoding::Frequency,
        freqs.word_count(),
        SortKey::Lex,
        Precision::default(),
    )?;

    assert_eq!(report.summary.total_matches, 15);
    assert_eq!(report.summary.total_unique_matches, 3);
    assert_eq!(report.summary.total_tokens, 25);
    assert_eq!(report.summary.percent_matches, 60.0);

    let contributions: f64 = report.records.iter().map(|r| r.contribution).sum();
    assert_eq!(correct_float(contributions, Precision::default()), 33.24);
    Ok(())
}

#[test]
fn test_batch_scoring_across_encodings() -> Result<()> {
    let mut lexicon = Lexicon::single("lex", weights());
    lexicon.insert_category("unused", CategoryWeights::new());

    let mut intercepts = Intercepts::new();
    intercepts.insert("lex", INTERCEPT);

    let doc = tokens(DOC1);

    let values = score_lexicon(&doc, &lexicon, &intercepts, &ScoringOptions::new(Encoding::Raw))?;
    assert_eq!(values["lex"], 98.2189);
    assert_eq!(values["unused"], 0.0);

    let values =
        score_lexicon(&doc, &lexicon, &intercepts, &ScoringOptions::new(Encoding::Percent))?;
    assert_eq!(values["lex"], 0.6);

    let options = ScoringOptions::new(Encoding::Frequency).with_threshold(Some(0.0), None)?;
    let values = score_lexicon(&doc, &lexicon, &intercepts, &options)?;
    // c (-15) is filtered out: 0.24 + 34.8 + 23.2189
    assert_eq!(values["lex"], 58.2589);

    Ok(())
}
