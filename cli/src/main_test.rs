use super::*;
use clap::CommandFactory;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn defaults_point_at_local_backend() {
    let cli = Cli::try_parse_from(["content-cli", "status"]).expect("parse");
    assert_eq!(cli.base_url, "http://localhost:9090/api");
    assert_eq!(cli.token_file, PathBuf::from(".content-platform-token"));
}

#[test]
fn blog_generate_parses_tone_case_insensitively() {
    let cli = Cli::try_parse_from(["content-cli", "blog", "generate", "--keywords", "ai", "--tone", "casual"])
        .expect("parse");
    let Command::Blog(BlogCommand { command: BlogSubcommand::Generate { tone, word_count, save, .. } }) = cli.command
    else {
        panic!("expected blog generate");
    };
    assert_eq!(tone, Tone::Casual);
    assert_eq!(word_count, 800);
    assert!(!save);
}

#[test]
fn unknown_tone_is_rejected() {
    let parsed = Cli::try_parse_from(["content-cli", "blog", "generate", "--keywords", "ai", "--tone", "angry"]);
    assert!(parsed.is_err());
}

#[test]
fn email_templates_defaults_to_list() {
    let cli = Cli::try_parse_from(["content-cli", "email", "templates"]).expect("parse");
    assert!(matches!(
        cli.command,
        Command::Email(EmailCommand { command: EmailSubcommand::Templates { command: None } })
    ));
}

#[test]
fn generation_request_drops_blank_optionals() {
    let request = generation_request("ai".to_owned(), Tone::Friendly, 500, Some("  ".to_owned()), Some("ml".to_owned()));
    assert_eq!(request.target_audience, None);
    assert_eq!(request.focus_keyword.as_deref(), Some("ml"));
    assert_eq!(request.tone, Tone::Friendly);
}

#[test]
fn parse_payload_rejects_invalid_json() {
    assert!(matches!(parse_payload("{oops"), Err(CliError::InvalidJson(_))));
    assert_eq!(parse_payload(r#"{"name":"x"}"#).expect("json")["name"], "x");
}
