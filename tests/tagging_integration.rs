//! End-to-end tagging scenarios through the API facade, against the
//! in-memory store.

use std::path::PathBuf;

use xatag::api::XatagApi;
use xatag::commands::{CopyOptions, DeleteOptions};
use xatag::model::Tag;
use xatag::store::memory::InMemoryStore;

fn api() -> XatagApi<InMemoryStore> {
    XatagApi::new(InMemoryStore::new())
}

#[test]
fn add_delete_value_then_delete_key() {
    let mut api = api();
    let file = vec![PathBuf::from("song.mp3")];

    api.add_tags(
        &file,
        &[Tag::new("genre", "jazz"), Tag::new("genre", "blues")],
        false,
    )
    .unwrap();
    let listed = api.list_tags(&file, &[], false).unwrap();
    assert_eq!(
        listed.file_tags[0].tags.get("genre").unwrap(),
        &["blues", "jazz"]
    );

    api.delete_tags(&file, &[Tag::new("genre", "jazz")], DeleteOptions::default())
        .unwrap();
    let listed = api.list_tags(&file, &[], false).unwrap();
    assert_eq!(listed.file_tags[0].tags.get("genre").unwrap(), &["blues"]);

    api.delete_tags(&file, &[Tag::new("genre", "")], DeleteOptions::default())
        .unwrap();
    let listed = api.list_tags(&file, &[], false).unwrap();
    assert!(listed.file_tags[0].tags.is_empty());
}

#[test]
fn set_all_replaces_the_whole_tag_state() {
    let mut api = api();
    let file = vec![PathBuf::from("song.mp3")];

    api.add_tags(
        &file,
        &[Tag::new("genre", "jazz"), Tag::new("mood", "loud")],
        false,
    )
    .unwrap();
    api.set_all_tags(&file, &[Tag::new("mood", "calm")]).unwrap();

    let listed = api.list_tags(&file, &[], false).unwrap();
    let tags = &listed.file_tags[0].tags;
    assert_eq!(tags.len(), 1);
    assert_eq!(tags.get("mood").unwrap(), &["calm"]);
}

#[test]
fn complement_delete_keeps_only_the_named_tags() {
    let mut api = api();
    let file = vec![PathBuf::from("song.mp3")];

    api.add_tags(
        &file,
        &[
            Tag::new("genre", "jazz"),
            Tag::new("genre", "blues"),
            Tag::new("mood", "calm"),
            Tag::new("", "favorite"),
        ],
        false,
    )
    .unwrap();

    api.delete_tags(
        &file,
        &[Tag::new("genre", "jazz")],
        DeleteOptions {
            complement: true,
            quiet: false,
        },
    )
    .unwrap();

    let listed = api.list_tags(&file, &[], false).unwrap();
    let tags = &listed.file_tags[0].tags;
    assert_eq!(tags.len(), 1);
    assert_eq!(tags.get("genre").unwrap(), &["jazz"]);
}

#[test]
fn filtered_copy_then_destructive_copy() {
    let mut api = api();
    let source = PathBuf::from("a.mp3");
    let dest = vec![PathBuf::from("b.mp3")];

    api.add_tags(
        std::slice::from_ref(&source),
        &[Tag::new("genre", "jazz"), Tag::new("mood", "calm")],
        false,
    )
    .unwrap();
    api.add_tags(&dest, &[Tag::new("year", "1959")], false)
        .unwrap();

    // selective copy merges with what the destination already has
    let opts = CopyOptions {
        filter: Some(xatag::tag_dict::TagDict::from_tags(&[Tag::new(
            "genre", "",
        )])),
        complement: false,
        over: false,
    };
    api.copy_tags(&source, &dest, &opts).unwrap();
    let tags = api.list_tags(&dest, &[], false).unwrap().file_tags[0]
        .tags
        .clone();
    assert!(tags.contains_key("genre"));
    assert!(tags.contains_key("year"));
    assert!(!tags.contains_key("mood"));

    // copy --over discards the destination's previous tags
    let opts = CopyOptions {
        filter: None,
        complement: false,
        over: true,
    };
    api.copy_tags(&source, &dest, &opts).unwrap();
    let tags = api.list_tags(&dest, &[], false).unwrap().file_tags[0]
        .tags
        .clone();
    assert!(tags.contains_key("genre"));
    assert!(tags.contains_key("mood"));
    assert!(!tags.contains_key("year"));
}

#[test]
fn no_mutation_ever_leaves_an_empty_value_string() {
    let mut api = api();
    let file = vec![PathBuf::from("song.mp3")];

    api.add_tags(&file, &[Tag::new("genre", "jazz")], false)
        .unwrap();
    api.delete_tags(
        &file,
        &[Tag::new("genre", "jazz")],
        DeleteOptions {
            complement: false,
            quiet: true,
        },
    )
    .unwrap();

    let attrs = api.store().attrs(&file[0]);
    assert!(attrs.is_empty(), "stored attrs: {:?}", attrs);
}
