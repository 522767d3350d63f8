//! Binary-level tests for the `pokedex` command.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A `pokedex` command isolated from the user's home and environment.
fn pokedex(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pokedex").expect("binary built");
    cmd.env("POKEDEX_HOME", home.path())
        .env_remove("POKEDEX_CONFIG")
        .env_remove("POKEDEX_API_URL")
        .env_remove("POKEDEX_DEBOUNCE_MS")
        .env_remove("POKEDEX_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

fn json_response(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json")
}

async fn mount_pichu_family(server: &MockServer) {
    let pokemon = |id: u32, name: &str| {
        json!({
            "id": id,
            "name": name,
            "sprites": { "front_default": format!("https://sprites.test/{name}.png") },
            "types": [{ "slot": 1, "type": { "name": "electric", "url": "" } }],
            "abilities": [{ "ability": { "name": "lightning-rod", "url": "" }, "is_hidden": true }],
            "stats": [{ "base_stat": 35, "stat": { "name": "hp", "url": "" } }],
            "moves": [{ "move": { "name": "thunder-shock", "url": "" } }]
        })
    };

    for (id, name) in [(172, "pichu"), (25, "pikachu"), (26, "raichu")] {
        Mock::given(method("GET"))
            .and(path(format!("/api/v2/pokemon/{name}")))
            .respond_with(json_response(pokemon(id, name)))
            .mount(server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon-species/25/"))
        .respond_with(json_response(json!({
            "id": 25,
            "name": "pikachu",
            "evolution_chain": { "url": format!("{}/api/v2/evolution-chain/10/", server.uri()) }
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/evolution-chain/10/"))
        .respond_with(json_response(json!({
            "id": 10,
            "chain": {
                "species": { "name": "pichu", "url": "" },
                "evolves_to": [{
                    "species": { "name": "pikachu", "url": "" },
                    "evolves_to": [{ "species": { "name": "raichu", "url": "" }, "evolves_to": [] }]
                }]
            }
        })))
        .mount(server)
        .await;
}

#[test]
fn test_help_lists_commands() {
    let home = TempDir::new().expect("temp dir");
    pokedex(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lookup"))
        .stdout(predicate::str::contains("evolution"))
        .stdout(predicate::str::contains("watch"))
        .stdout(predicate::str::contains("POKEDEX_API_URL"));
}

#[test]
fn test_empty_query_is_rejected() {
    let home = TempDir::new().expect("temp dir");
    pokedex(&home)
        .args(["lookup", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a Pokémon name or ID"));
}

#[test]
fn test_invalid_config_file_is_reported() {
    let home = TempDir::new().expect("temp dir");
    let config = home.path().join("broken.toml");
    std::fs::write(&config, "debounce_ms = \"soon\"").expect("write config");

    pokedex(&home)
        .args(["--config", config.to_str().expect("utf8 path")])
        .args(["evolution", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.toml"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lookup_prints_details_and_chain() {
    let server = MockServer::start().await;
    mount_pichu_family(&server).await;
    let api_url = format!("{}/api/v2", server.uri());
    let home = TempDir::new().expect("temp dir");

    let assert = tokio::task::spawn_blocking(move || {
        pokedex(&home)
            .args(["lookup", "Pikachu", "--api-url", &api_url])
            .assert()
    })
    .await
    .expect("command task");

    assert
        .success()
        .stdout(predicate::str::contains("pikachu #025"))
        .stdout(predicate::str::contains("Types: electric"))
        .stdout(predicate::str::contains("Abilities: lightning rod"))
        .stdout(predicate::str::contains("Moves: thunder shock"))
        .stdout(predicate::str::contains(
            "1. pichu  https://sprites.test/pichu.png\n2. pikachu  https://sprites.test/pikachu.png\n3. raichu",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lookup_unknown_pokemon() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/missingno"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let api_url = format!("{}/api/v2", server.uri());
    let home = TempDir::new().expect("temp dir");

    let assert = tokio::task::spawn_blocking(move || {
        pokedex(&home)
            .args(["lookup", "missingno", "--api-url", &api_url])
            .assert()
    })
    .await
    .expect("command task");

    assert.failure().stderr(predicate::str::contains(
        "Pokémon not found! Please check the spelling and try again.",
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_watch_reads_selections_from_stdin() {
    let server = MockServer::start().await;
    mount_pichu_family(&server).await;
    let api_url = format!("{}/api/v2", server.uri());
    let home = TempDir::new().expect("temp dir");

    let assert = tokio::task::spawn_blocking(move || {
        pokedex(&home)
            .env("POKEDEX_DEBOUNCE_MS", "10")
            .args(["watch", "--api-url", &api_url])
            .write_stdin("pikachu\n")
            .assert()
    })
    .await
    .expect("command task");

    assert
        .success()
        .stdout(predicate::str::contains("pikachu #025"))
        .stdout(predicate::str::contains("Loading..."))
        .stdout(predicate::str::contains("3. raichu"));
}
