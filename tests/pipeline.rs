//! End-to-end pipeline tests: corpus in, summary and keywords out.

use textrank_solve::{
    analyze_batch, top_k_by_position, top_k_by_rank, DenseGraph, DirectSolver, Document, Error,
    RankConfig, TextRank,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn article() -> Document {
    Document {
        sentences: strings(&[
            "The city council approved the new transit plan on Monday.",
            "The plan adds three light rail lines across the city.",
            "Construction of the rail lines begins next spring.",
            "Local bakeries reported record croissant sales last week.",
            "Funding for the transit plan comes from a regional tax.",
            "Council members debated the tax for nearly six hours.",
        ]),
        nouns: strings(&[
            "city council transit plan",
            "plan rail line city",
            "construction rail line spring",
            "bakery croissant sale week",
            "funding transit plan tax",
            "council member tax hour",
        ]),
    }
}

#[test]
fn summary_is_a_subset_of_original_sentences_in_order() {
    let doc = article();
    let engine = TextRank::new(RankConfig::default().with_summary_len(3)).unwrap();
    let summary = engine.summarize(&doc.sentences, &doc.nouns).unwrap();

    assert_eq!(summary.len(), 3);
    let positions: Vec<usize> = summary
        .iter()
        .map(|s| doc.sentences.iter().position(|o| o == s).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn oversized_summary_request_returns_whole_document() {
    // K=10 from a 4-sentence document returns all 4, in original order.
    let sentences = strings(&["First.", "Second.", "Third.", "Fourth."]);
    let nouns = strings(&["alpha beta", "beta gamma", "gamma delta", "delta alpha"]);

    let engine = TextRank::new(RankConfig::default().with_summary_len(10)).unwrap();
    let summary = engine.summarize(&sentences, &nouns).unwrap();
    assert_eq!(summary, sentences);
}

#[test]
fn keywords_come_back_rank_descending() {
    let doc = article();
    let engine = TextRank::new(RankConfig::default()).unwrap();
    let analysis = engine.analyze(&doc.sentences, &doc.nouns).unwrap();

    // Re-derive the expected ordering from the word ranks and check the
    // keyword list follows it.
    let expected = top_k_by_rank(&analysis.word_ranks, 10).unwrap();
    assert_eq!(analysis.keywords.len(), expected.len());

    let scores: Vec<f64> = expected
        .iter()
        .map(|&i| analysis.word_ranks.score(i))
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn off_topic_sentence_ranks_below_connected_ones() {
    let doc = article();
    let engine = TextRank::new(RankConfig::default()).unwrap();
    let analysis = engine.analyze(&doc.sentences, &doc.nouns).unwrap();

    // Sentence 3 (bakeries) shares no nouns with the rest.
    let bakery = analysis.sentence_ranks.score(3);
    for idx in [0, 1, 4] {
        assert!(
            analysis.sentence_ranks.score(idx) > bakery,
            "sentence {idx} should outrank the off-topic one"
        );
    }
}

#[test]
fn isolated_sentence_receives_exactly_the_base_mass() {
    let doc = article();
    let engine = TextRank::new(RankConfig::default()).unwrap();
    let analysis = engine.analyze(&doc.sentences, &doc.nouns).unwrap();

    // The bakery sentence is isolated: zero similarity to every other
    // sentence, so its rank is exactly 1 - d.
    assert!((analysis.sentence_ranks.score(3) - 0.15).abs() < 1e-12);
}

#[test]
fn linked_pair_outranks_isolated_node() {
    // Unit 0 similar to unit 1 with weight 1.0, unit 2 isolated apart from
    // self-similarity. With d = 0.85: rank(2) = 0.15 exactly, units 0 and 1
    // equal and above it.
    let graph = DenseGraph::from_raw(
        3,
        vec![
            1.0, 1.0, 0.0, //
            1.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        ],
    );
    let ranks = DirectSolver::new().rank(graph).unwrap();

    assert_eq!(ranks.score(2), 1.0 - 0.85);
    assert!((ranks.score(0) - ranks.score(1)).abs() < 1e-12);
    assert!(ranks.score(0) > 0.15);
}

#[test]
fn negative_graph_entry_fails_before_any_solve() {
    let graph = DenseGraph::from_raw(2, vec![1.0, -0.25, -0.25, 1.0]);
    let err = DirectSolver::new().rank(graph).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidGraph {
            row: 0,
            col: 1,
            value: -0.25
        }
    );
}

#[test]
fn selector_policies_agree_on_the_selected_set() {
    let doc = article();
    let engine = TextRank::new(RankConfig::default()).unwrap();
    let analysis = engine.analyze(&doc.sentences, &doc.nouns).unwrap();

    let mut by_rank = top_k_by_rank(&analysis.sentence_ranks, 3).unwrap();
    let by_pos = top_k_by_position(&analysis.sentence_ranks, 3).unwrap();
    by_rank.sort_unstable();
    assert_eq!(by_rank, by_pos);
}

#[test]
fn batch_processes_documents_independently() {
    let docs = vec![
        article(),
        Document {
            sentences: strings(&["Bad doc."]),
            nouns: strings(&["   "]),
        },
        article(),
    ];

    let results = analyze_batch(&RankConfig::default(), &docs).unwrap();
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert!(results[2].is_ok());

    // Independent invocations over the same document agree exactly.
    assert_eq!(
        results[0].as_ref().unwrap(),
        results[2].as_ref().unwrap()
    );
}

#[test]
fn analysis_serializes_to_json() {
    let doc = article();
    let engine = TextRank::new(RankConfig::default().with_summary_len(2)).unwrap();
    let analysis = engine.analyze(&doc.sentences, &doc.nouns).unwrap();

    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["summary"].as_array().unwrap().len(), 2);
    assert!(json["keywords"].as_array().is_some());
}
