use super::*;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_seasons() {
    match parse(&["seasonswap", "seasons"]) {
        CliCommand::Seasons => {}
        _ => panic!("expected Seasons"),
    }
}

#[test]
fn cli_parse_status() {
    match parse(&["seasonswap", "status"]) {
        CliCommand::Status => {}
        _ => panic!("expected Status"),
    }
}

#[test]
fn cli_parse_set() {
    match parse(&["seasonswap", "set", "2809059426"]) {
        CliCommand::Set { season_hash } => assert_eq!(season_hash, 2809059426),
        _ => panic!("expected Set"),
    }
}

#[test]
fn cli_parse_set_rejects_non_numeric_hash() {
    assert!(Cli::try_parse_from(["seasonswap", "set", "next"]).is_err());
}

#[test]
fn cli_parse_clear() {
    match parse(&["seasonswap", "clear"]) {
        CliCommand::Clear => {}
        _ => panic!("expected Clear"),
    }
}

#[test]
fn cli_parse_decide() {
    match parse(&["seasonswap", "decide", "https://www.bungie.net/Platform/Settings/"]) {
        CliCommand::Decide { url } => {
            assert_eq!(url, "https://www.bungie.net/Platform/Settings/");
        }
        _ => panic!("expected Decide"),
    }
}

#[test]
fn cli_parse_observe_with_headers() {
    match parse(&[
        "seasonswap",
        "observe",
        "https://www.bungie.net/Platform/Destiny2/Manifest/",
        "--header",
        "x-api-key=abc",
        "--header",
        "accept=application/json",
    ]) {
        CliCommand::Observe { url, headers } => {
            assert_eq!(url, "https://www.bungie.net/Platform/Destiny2/Manifest/");
            assert_eq!(headers, vec!["x-api-key=abc", "accept=application/json"]);
        }
        _ => panic!("expected Observe"),
    }
}

#[test]
fn cli_parse_observe_without_headers() {
    match parse(&["seasonswap", "observe", "https://www.bungie.net/Platform/x"]) {
        CliCommand::Observe { headers, .. } => assert!(headers.is_empty()),
        _ => panic!("expected Observe"),
    }
}
