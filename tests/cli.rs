use clap::Parser;
use qutebrowser_profile::cli::{Cli, Command};

#[test]
fn parses_choose_with_defaults() {
    let cli = Cli::try_parse_from(["qutebrowser-profile", "choose"]).expect("cli parse should work");
    assert_eq!(cli.qutebrowser, "qutebrowser");
    assert!(cli.dmenu.is_none());
    assert!(matches!(cli.command, Command::Choose(_)));
}

#[test]
fn parses_dmenu_with_inline_arguments() {
    let cli = Cli::try_parse_from([
        "qutebrowser-profile",
        "--dmenu",
        "rofi -dmenu -i",
        "choose",
    ])
    .expect("cli parse should work");
    assert_eq!(cli.dmenu.as_deref(), Some("rofi -dmenu -i"));
}

#[test]
fn parses_load_with_browser_args() {
    let cli = Cli::try_parse_from([
        "qutebrowser-profile",
        "load",
        "work",
        "--",
        "--target",
        "window",
        "https://example.com",
    ])
    .expect("cli parse should work");
    match cli.command {
        Command::Load(load) => {
            assert_eq!(load.name, "work");
            assert_eq!(
                load.browser_args,
                ["--target", "window", "https://example.com"]
            );
        }
        _ => panic!("expected load command"),
    }
}

#[test]
fn parses_new_without_name() {
    let cli = Cli::try_parse_from(["qutebrowser-profile", "new", "-v", "-v"])
        .expect("cli parse should work");
    assert_eq!(cli.verbose, 2);
    match cli.command {
        Command::New(new) => {
            assert!(new.name.is_none());
            assert!(new.browser_args.is_empty());
        }
        _ => panic!("expected new command"),
    }
}

#[test]
fn parses_list_with_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "qutebrowser-profile",
        "list",
        "--json",
        "--profiles-root",
        "/tmp/profiles",
    ])
    .expect("cli parse should work");
    assert!(cli.json);
    assert_eq!(
        cli.profiles_root.as_deref(),
        Some(std::path::Path::new("/tmp/profiles"))
    );
    assert!(matches!(cli.command, Command::List));
}

#[test]
fn load_requires_a_name() {
    assert!(Cli::try_parse_from(["qutebrowser-profile", "load"]).is_err());
}
