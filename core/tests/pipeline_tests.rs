use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use tfidf_core::{DisplayMode, Pipeline, PipelineConfig, TermFrequency, TfidfError};

fn write_corpus(dir: &Path, docs: &[(&str, &str)]) -> PathBuf {
    let mut list = String::new();
    for (name, text) in docs {
        let p = dir.join(name);
        fs::write(&p, text).unwrap();
        list.push_str(p.to_str().unwrap());
        list.push('\n');
    }
    let list_path = dir.join("input_files.txt");
    fs::write(&list_path, list).unwrap();
    list_path
}

fn read_artifact(dir: &Path, name: &str) -> Vec<(String, f64)> {
    fs::read_to_string(dir.join(format!("tfidf_{name}")))
        .unwrap()
        .lines()
        .map(|l| {
            let (term, score) = l.split_once('\t').unwrap();
            (term.to_string(), score.parse().unwrap())
        })
        .collect()
}

/// Dictionary mode with an empty lexicon: tokens pass through untouched.
fn passthrough_config(dir: &Path) -> PipelineConfig {
    let lexicon = dir.join("lexicon.txt");
    fs::write(&lexicon, "").unwrap();
    PipelineConfig { language_resource: Some(lexicon), ..PipelineConfig::default() }
}

#[test]
fn scores_the_worked_example() {
    let dir = tempdir().unwrap();
    let list = write_corpus(dir.path(), &[("one.txt", "aa aa aa bb"), ("two.txt", "aa cc")]);

    let summary = Pipeline::from_config(passthrough_config(dir.path())).unwrap().run(&list).unwrap();
    assert_eq!(summary.documents, 2);
    assert_eq!(summary.artifacts.len(), 2);

    let one = read_artifact(dir.path(), "one.txt");
    assert_eq!(one[0].0, "bb");
    assert!((one[0].1 - 0.405).abs() < 1e-3);
    assert_eq!(one[1], ("aa".to_string(), 0.0));

    let mut cfg = passthrough_config(dir.path());
    cfg.term_frequency_mode = TermFrequency::MaxNormalized;
    Pipeline::from_config(cfg).unwrap().run(&list).unwrap();
    let one = read_artifact(dir.path(), "one.txt");
    assert!((one[0].1 - 0.135).abs() < 1e-3);
}

#[test]
fn ties_are_written_in_descending_term_order() {
    let dir = tempdir().unwrap();
    let list = write_corpus(dir.path(), &[("a.txt", "mm zz kk shared"), ("b.txt", "shared")]);
    Pipeline::from_config(passthrough_config(dir.path())).unwrap().run(&list).unwrap();
    let terms: Vec<String> = read_artifact(dir.path(), "a.txt").into_iter().map(|(t, _)| t).collect();
    assert_eq!(terms, vec!["zz", "mm", "kk", "shared"]);
}

#[test]
fn top_k_and_term_only_display() {
    let dir = tempdir().unwrap();
    let list = write_corpus(dir.path(), &[("a.txt", "alpha alpha beta gamma delta"), ("b.txt", "other")]);
    let mut cfg = passthrough_config(dir.path());
    cfg.top_k = Some(2);
    cfg.display_mode = DisplayMode::Term;
    Pipeline::from_config(cfg).unwrap().run(&list).unwrap();
    let text = fs::read_to_string(dir.path().join("tfidf_a.txt")).unwrap();
    assert_eq!(text, "alpha\ngamma\n");
}

#[test]
fn stopword_only_document_gets_empty_artifact() {
    let dir = tempdir().unwrap();
    let list = write_corpus(dir.path(), &[("empty.txt", "The, and... of!"), ("full.txt", "rust compilers")]);
    let mut cfg = passthrough_config(dir.path());
    cfg.english_stopwords = true;
    let summary = Pipeline::from_config(cfg).unwrap().run(&list).unwrap();
    assert_eq!(summary.documents, 2);
    assert_eq!(fs::read_to_string(dir.path().join("tfidf_empty.txt")).unwrap(), "");
    assert_eq!(read_artifact(dir.path(), "full.txt").len(), 2);
}

#[test]
fn empty_list_reports_zero_documents() {
    let dir = tempdir().unwrap();
    let list = dir.path().join("input_files.txt");
    fs::write(&list, "").unwrap();
    let summary = Pipeline::from_config(PipelineConfig::default()).unwrap().run(&list).unwrap();
    assert_eq!(summary.documents, 0);
}

#[test]
fn runs_are_idempotent_and_parallel_matches_sequential() {
    let dir = tempdir().unwrap();
    let docs: Vec<(String, String)> = (0..12)
        .map(|i| (format!("d{i}.txt"), format!("common word{i} shared{} shared{} tail tail", i % 3, i % 4)))
        .collect();
    let refs: Vec<(&str, &str)> = docs.iter().map(|(n, t)| (n.as_str(), t.as_str())).collect();
    let list = write_corpus(dir.path(), &refs);

    let out_par = dir.path().join("par");
    let out_seq = dir.path().join("seq");
    let par = PipelineConfig { output_dir: Some(out_par.clone()), ..PipelineConfig::default() };
    let seq = PipelineConfig { output_dir: Some(out_seq.clone()), parallel: false, ..PipelineConfig::default() };

    Pipeline::from_config(par.clone()).unwrap().run(&list).unwrap();
    let first: Vec<String> = refs.iter().map(|(n, _)| fs::read_to_string(out_par.join(format!("tfidf_{n}"))).unwrap()).collect();
    Pipeline::from_config(par).unwrap().run(&list).unwrap();
    Pipeline::from_config(seq).unwrap().run(&list).unwrap();
    for (i, (n, _)) in refs.iter().enumerate() {
        let again = fs::read_to_string(out_par.join(format!("tfidf_{n}"))).unwrap();
        let sequential = fs::read_to_string(out_seq.join(format!("tfidf_{n}"))).unwrap();
        assert_eq!(first[i], again);
        assert_eq!(first[i], sequential);
    }
}

#[test]
fn missing_document_is_fatal() {
    let dir = tempdir().unwrap();
    let list = dir.path().join("input_files.txt");
    fs::write(&list, format!("{}\n", dir.path().join("nope.txt").display())).unwrap();
    let err = Pipeline::from_config(PipelineConfig::default()).unwrap().run(&list).unwrap_err();
    assert!(matches!(err, TfidfError::ResourceUnavailable { .. }));
}

#[test]
fn missing_list_is_fatal() {
    let dir = tempdir().unwrap();
    let err = Pipeline::from_config(PipelineConfig::default()).unwrap().run(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, TfidfError::ResourceUnavailable { .. }));
}

#[test]
fn duplicate_listing_is_fatal_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let doc = dir.path().join("a.txt");
    fs::write(&doc, "words here").unwrap();
    let list = dir.path().join("input_files.txt");
    fs::write(&list, format!("{0}\n{0}\n", doc.display())).unwrap();
    let err = Pipeline::from_config(PipelineConfig::default()).unwrap().run(&list).unwrap_err();
    assert!(matches!(err, TfidfError::DuplicateDocument { .. }));
    assert!(!dir.path().join("tfidf_a.txt").exists());
}

#[test]
fn same_file_name_under_one_output_dir_is_rejected() {
    let dir = tempdir().unwrap();
    for sub in ["dir1", "dir2"] {
        fs::create_dir_all(dir.path().join(sub)).unwrap();
    }
    let list = write_corpus(dir.path(), &[("dir1/a.txt", "first text"), ("dir2/a.txt", "second text")]);
    let out = dir.path().join("out");
    let cfg = PipelineConfig { output_dir: Some(out.clone()), ..PipelineConfig::default() };
    let err = Pipeline::from_config(cfg).unwrap().run(&list).unwrap_err();
    match err {
        TfidfError::ArtifactCollision { path } => assert_eq!(path, out.join("tfidf_a.txt")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!out.join("tfidf_a.txt").exists());

    // Beside their documents the two artifacts do not clash.
    let summary = Pipeline::from_config(PipelineConfig::default()).unwrap().run(&list).unwrap();
    assert_eq!(summary.documents, 2);
    assert!(dir.path().join("dir1/tfidf_a.txt").exists());
    assert!(dir.path().join("dir2/tfidf_a.txt").exists());
}

#[test]
fn malformed_language_resource_is_fatal() {
    let dir = tempdir().unwrap();
    let lexicon = dir.path().join("lexicon.txt");
    fs::write(&lexicon, "casas casa\nperros\n").unwrap();
    let cfg = PipelineConfig { language_resource: Some(lexicon), ..PipelineConfig::default() };
    let err = Pipeline::from_config(cfg).err().unwrap();
    assert!(matches!(err, TfidfError::MalformedLexiconLine { line: 2, .. }));
}

#[test]
fn dictionary_mode_merges_surface_forms() {
    let dir = tempdir().unwrap();
    let lexicon = dir.path().join("lexicon.txt");
    fs::write(&lexicon, "casas casa\ncasa casa\nde -\n").unwrap();
    let list = write_corpus(dir.path(), &[("es.txt", "casa casas de"), ("otro.txt", "nada")]);
    let cfg = PipelineConfig { language_resource: Some(lexicon), ..PipelineConfig::default() };
    Pipeline::from_config(cfg).unwrap().run(&list).unwrap();
    let entries = read_artifact(dir.path(), "es.txt");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].0, "casa");
    assert!((entries[0].1 - 2.0 * (1.5f64).ln()).abs() < 1e-12);
    assert_eq!(entries[1].0, "de");
}
