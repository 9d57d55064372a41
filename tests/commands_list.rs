use std::fs;

use qutebrowser_profile::commands::list::render;
use qutebrowser_profile::output::Output;
use qutebrowser_profile::profiles::ProfileStore;

fn names(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|name| name.to_string()).collect()
}

#[test]
fn text_lists_one_name_per_line() {
    let rendered = render(&Output::new(false), &names(&["home", "work"])).unwrap();
    assert_eq!(rendered.as_deref(), Some("home\nwork"));
}

#[test]
fn empty_text_listing_prints_nothing() {
    assert_eq!(render(&Output::new(false), &[]).unwrap(), None);
}

#[test]
fn json_lists_names_as_array() {
    let rendered = render(&Output::new(true), &names(&["home", "work"]))
        .unwrap()
        .expect("json output");
    let parsed: Vec<String> = serde_json::from_str(&rendered).expect("valid json");
    assert_eq!(parsed, ["home", "work"]);
}

#[test]
fn empty_json_listing_is_empty_array() {
    let rendered = render(&Output::new(true), &[]).unwrap();
    assert_eq!(rendered.as_deref(), Some("[]"));
}

#[test]
fn renders_profiles_found_on_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    for name in ["work", "home"] {
        fs::create_dir(dir.path().join(name)).expect("mkdir");
    }

    let profiles = ProfileStore::new(dir.path()).list().expect("list");
    let rendered = render(&Output::new(false), &profiles).unwrap();
    assert_eq!(rendered.as_deref(), Some("home\nwork"));
}
