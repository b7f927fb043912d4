use proptest::collection::{btree_map, vec};
use proptest::prelude::*;
use proptest::sample::Index;
use retrieval_core::{
    build_forward_index, build_inverted_index, cosine_similarity, document_frequency, normalize, retrieve_and,
    retrieve_or, term_frequency, vector_length, Corpus,
};
use std::collections::BTreeSet;

fn corpus_strategy() -> impl Strategy<Value = Corpus> {
    btree_map("d[0-9]{1,2}", "[abc ]{0,16}", 1..8).prop_map(|docs| docs.into_iter().collect())
}

fn component() -> impl Strategy<Value = f64> {
    prop_oneof![-100.0f64..100.0, -1e300f64..1e300, -1e-300f64..1e-300]
}

fn vector_pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..8).prop_flat_map(|n| (vec(component(), n), vec(component(), n)))
}

proptest! {
    #[test]
    fn normalize_is_idempotent(s in ".*") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn forward_and_inverted_are_bijective(corpus in corpus_strategy()) {
        let forward = build_forward_index(&corpus);
        let inverted = build_inverted_index(&forward);
        prop_assert_eq!(forward.len(), corpus.len());

        for (doc, counts) in forward.iter() {
            for (term, &count) in counts {
                prop_assert!(count > 0);
                prop_assert_eq!(inverted.count(term, doc), count);
            }
        }
        for (term, postings) in inverted.iter() {
            prop_assert!(!postings.is_empty());
            for (doc, &count) in postings {
                prop_assert_eq!(forward.count(doc, term), count);
            }
        }
    }

    #[test]
    fn df_matches_documents_with_positive_tf(corpus in corpus_strategy(), term in "[abc]{1,3}") {
        let inverted = build_inverted_index(&build_forward_index(&corpus));
        let with_term = corpus.keys().filter(|doc| term_frequency(&inverted, &term, doc) > 0).count();
        prop_assert_eq!(document_frequency(&inverted, &term) as usize, with_term);
    }

    #[test]
    fn and_or_obey_set_laws(corpus in corpus_strategy(), pick_a in any::<Index>(), pick_b in any::<Index>()) {
        let inverted = build_inverted_index(&build_forward_index(&corpus));
        let terms: Vec<&str> = inverted.terms().collect();
        let a = terms[pick_a.index(terms.len())];
        let b = terms[pick_b.index(terms.len())];

        let docs_a: BTreeSet<&str> = inverted.postings(a).unwrap().keys().map(String::as_str).collect();
        let docs_b: BTreeSet<&str> = inverted.postings(b).unwrap().keys().map(String::as_str).collect();
        let and = retrieve_and(&inverted, a, b).unwrap();
        let or = retrieve_or(&inverted, a, b).unwrap();

        let and_set: BTreeSet<&str> = and.iter().copied().collect();
        let or_set: BTreeSet<&str> = or.iter().copied().collect();
        let both: BTreeSet<&str> = docs_a.intersection(&docs_b).copied().collect();
        prop_assert_eq!(&and_set, &both);
        prop_assert_eq!(or_set.len(), or.len());
        prop_assert!(or_set.is_superset(&and_set));
        prop_assert!(or_set.is_superset(&docs_a));
        prop_assert!(or_set.is_superset(&docs_b));
    }

    #[test]
    fn cosine_is_symmetric((v1, v2) in vector_pair()) {
        match (cosine_similarity(&v1, &v2), cosine_similarity(&v2, &v1)) {
            (Ok(x), Ok(y)) => prop_assert_eq!(x, y),
            (Err(x), Err(y)) => prop_assert_eq!(x, y),
            (x, y) => prop_assert!(false, "asymmetric results {:?} / {:?}", x, y),
        }
    }

    #[test]
    fn cosine_with_self_is_one(v in vec(component(), 1..8)) {
        prop_assume!(vector_length(&v) > 0.0);
        let sim = cosine_similarity(&v, &v).unwrap();
        prop_assert!((sim - 1.0).abs() < 1e-9);
    }
}
