//! `frontdoor config show|init`

use frontdoor_testing::TestWorld;
use anyhow::Result;

#[test]
fn test_show_without_file_prints_defaults() -> Result<()> {
    let world = TestWorld::new().json();

    let result = world.run(&["config", "show"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assert_eq!(json["content"]["exists"], false);
    assert_eq!(json["content"]["page_size"], 10);
    assert_eq!(json["content"]["default_catalog"], "finance");
    assert_eq!(json["suggestions"][0]["command"], "frontdoor config init");
    Ok(())
}

#[test]
fn test_init_then_refuse_then_force() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["config", "init"])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(world.config_path().exists());
    assert!(result.stdout().contains("Created"));

    let result = world.run(&["config", "init"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("--force"));

    let result = world.run(&["config", "init", "--force"])?;
    assert!(result.success());
    assert!(result.stdout().contains("Overwrote"));
    Ok(())
}

#[test]
fn test_show_reads_written_file() -> Result<()> {
    let world = TestWorld::new()
        .json()
        .with_config("page_size = 25\nsearch_domain = true\n");

    let json = world.run(&["config", "show"])?.json()?;

    assert_eq!(json["content"]["exists"], true);
    assert_eq!(json["content"]["page_size"], 25);
    assert_eq!(json["content"]["search_domain"], true);
    assert!(json.get("badge").is_none());
    Ok(())
}

#[test]
fn test_invalid_config_is_reported() -> Result<()> {
    let world = TestWorld::new().with_config("page_size = 0\n");

    let result = world.run(&["list"])?;

    assert!(!result.success());
    assert!(result.stderr().starts_with("Error:"));
    Ok(())
}

#[test]
fn test_config_env_var_is_overridden_by_flag() -> Result<()> {
    // TestWorld always passes --config, so a bogus env path must be ignored
    let world = TestWorld::new()
        .json()
        .with_env("FRONTDOOR_CONFIG", "/nonexistent/elsewhere.toml")
        .with_config("page_size = 3\n");

    let json = world.run(&["list"])?.json()?;

    assert_eq!(json["content"]["page"]["page_size"], 3);
    Ok(())
}
