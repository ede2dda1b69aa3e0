use reso_sorter::{rank_fragments, Link, Options, TextFragment};

fn fragment(text: &str, link: Option<&str>) -> TextFragment {
    TextFragment::new(text, link)
}

/// Linked first occurrence survives a later unlinked duplicate; noise is dropped
#[test]
fn end_to_end_scenario() {
    let fragments = vec![
        fragment("Download 1920x1080 here", Some("http://a")),
        fragment("also 1,920x1,080 available", None),
        fragment("junk 3x3", Some("http://b")),
    ];

    let ranker = rank_fragments(&fragments, &Options::default());
    let records = ranker.records();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].original(), "1920x1080");
    assert_eq!(records[0].width(), 1920);
    assert_eq!(records[0].height(), 1080);
    assert_eq!(records[0].area(), 2_073_600);
    assert_eq!(records[0].link(), &Link::Href("http://a".to_string()));
}

#[test]
fn case_variants_from_different_fragments_collapse() {
    let fragments = vec![
        fragment("1920X1080", None),
        fragment("1920x1080", Some("http://later")),
    ];

    let ranker = rank_fragments(&fragments, &Options::default());

    assert_eq!(ranker.len(), 1);
    // The linked occurrence replaced the unlinked one, token included
    assert_eq!(ranker.records()[0].original(), "1920x1080");
    assert_eq!(ranker.records()[0].link().as_str(), "http://later");
}

#[test]
fn grouped_separators_parse_to_same_dimensions() {
    for text in ["4,096x2,160", "4.096x2.160", "4,096×2,160"] {
        let ranker = rank_fragments(&[fragment(text, None)], &Options::default());
        let record = &ranker.records()[0];
        assert_eq!((record.width(), record.height()), (4096, 2160), "{text}");
        assert_eq!(record.original(), text);
    }
}

#[test]
fn shorthand_tokens_assume_sixteen_by_nine() {
    let fragments = vec![fragment("Available in 1080p and 2160p", None)];
    let ranker = rank_fragments(&fragments, &Options::default());

    let dims: Vec<_> = ranker
        .records()
        .iter()
        .map(|r| (r.original(), r.width(), r.height()))
        .collect();
    assert_eq!(dims, vec![("2160p", 3840, 2160), ("1080p", 1920, 1080)]);
}

#[test]
fn implausible_tokens_yield_no_records() {
    let fragments = vec![
        fragment("5x5", Some("http://a")),
        fragment("100x5", Some("http://a")),
        fragment("1p", Some("http://a")),
        fragment("30x30", Some("http://a")),
    ];

    let ranker = rank_fragments(&fragments, &Options::default());
    assert!(ranker.is_empty());
}

#[test]
fn no_link_sentinel_from_host_is_normalized() {
    let fragments = vec![
        fragment("640x480", Some("No link")),
        fragment("640x480", Some("http://real")),
    ];

    let ranker = rank_fragments(&fragments, &Options::default());
    assert_eq!(ranker.records()[0].link().as_str(), "http://real");
}

#[test]
fn empty_input_is_a_valid_empty_result() {
    let ranker = rank_fragments(&Vec::<TextFragment>::new(), &Options::default());
    assert!(ranker.is_empty());
    assert_eq!(ranker.len(), 0);
}
