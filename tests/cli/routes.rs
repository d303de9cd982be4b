use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const PROJECT: &[&str] = &[
    "pages/index.tsx",
    "pages/about.tsx",
    "pages/blog/index.tsx",
    "pages/blog/[id].tsx",
    "pages/api/users.ts",
    "pages/api/[...all].ts",
    "pages/styles.css",
    "app/page.tsx",
    "app/layout.tsx",
    "app/(marketing)/about/page.tsx",
    "app/dashboard/[[...slug]]/page.mdx",
    "app/_private/settings/page.tsx",
    "app/shop/[category]/page.js",
];

#[test]
fn test_table_output() -> Result<()> {
    let test = CliTest::with_files(PROJECT)?;

    let (code, stdout, stderr) = run(test.command())?;

    assert_eq!(code, 0);
    assert_eq!(stderr, "");
    assert_eq!(
        stdout,
        [
            "/\t[pages]\tpages/index.tsx",
            "/about\t[pages]\tpages/about.tsx",
            "/api/[...all]\t[api]\tpages/api/[...all].ts",
            "/api/users\t[api]\tpages/api/users.ts",
            "/blog\t[pages]\tpages/blog/index.tsx",
            "/blog/:id\t[pages]\tpages/blog/[id].tsx",
            "/dashboard/*slug\t[app]\tapp/dashboard/[[...slug]]/page.mdx",
            "/settings\t[app]\tapp/_private/settings/page.tsx",
            "/shop/:category\t[app]\tapp/shop/[category]/page.js",
            "",
        ]
        .join("\n")
    );

    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let test = CliTest::with_files(&[
        "pages/index.tsx",
        "pages/api/users.ts",
        "app/(marketing)/about/page.tsx",
    ])?;

    let (code, stdout, _) = run(test.json_command())?;

    assert_eq!(code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @r#"
    [
      {
        "route": "/",
        "file": "pages/index.tsx",
        "type": "pages"
      },
      {
        "route": "/about",
        "file": "app/(marketing)/about/page.tsx",
        "type": "app"
      },
      {
        "route": "/api/users",
        "file": "pages/api/users.ts",
        "type": "api"
      }
    ]
    "#);

    Ok(())
}

#[test]
fn test_short_json_flag() -> Result<()> {
    let test = CliTest::with_files(&["app/page.tsx"])?;

    let mut cmd = test.command();
    cmd.arg("-j");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    let routes: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(
        routes,
        serde_json::json!([{ "route": "/", "file": "app/page.tsx", "type": "app" }])
    );

    Ok(())
}

#[test]
fn test_empty_project() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command())?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "");

    let (code, stdout, _) = run(test.json_command())?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "[]\n");

    Ok(())
}

#[test]
fn test_root_flag() -> Result<()> {
    let test = CliTest::with_files(&["site/pages/contact.tsx", "pages/ignored.tsx"])?;

    let mut cmd = test.command();
    cmd.args(["--root", "site"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "/contact\t[pages]\tpages/contact.tsx\n");

    Ok(())
}

#[test]
fn test_root_flag_absolute() -> Result<()> {
    let test = CliTest::with_files(&["pages/index.tsx"])?;

    let mut cmd = test.command();
    cmd.arg("--root").arg(test.root());
    cmd.current_dir(std::env::temp_dir());
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "/\t[pages]\tpages/index.tsx\n");

    Ok(())
}

#[test]
fn test_pages_win_duplicates() -> Result<()> {
    let test = CliTest::with_files(&["pages/about.tsx", "app/about/page.tsx"])?;

    let (code, stdout, _) = run(test.command())?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "/about\t[pages]\tpages/about.tsx\n");

    Ok(())
}

#[test]
fn test_verbose_reports_to_stderr() -> Result<()> {
    let test = CliTest::with_files(&[
        "pages/about.tsx",
        "pages/notes.txt",
        "app/about/page.tsx",
    ])?;

    let mut cmd = test.command();
    cmd.arg("--verbose");
    let (code, stdout, stderr) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "/about\t[pages]\tpages/about.tsx\n");
    assert!(stderr.contains("notes.txt: not a page extension"));
    assert!(stderr.contains(
        "Duplicate route /about from app/about/page.tsx (already defined by pages/about.tsx)"
    ));
    assert!(stderr.contains(
        "Found 1 route (2 pages files, 1 app file scanned), 1 duplicate(s) dropped"
    ));

    Ok(())
}

#[test]
fn test_output_is_stable_across_runs() -> Result<()> {
    let test = CliTest::with_files(PROJECT)?;

    let (_, first, _) = run(test.json_command())?;
    let (_, second, _) = run(test.json_command())?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_localized_slugs_sort_with_base_letter() -> Result<()> {
    let test = CliTest::with_files(&[
        "pages/zoo.tsx",
        "pages/fruit.tsx",
        "pages/école.tsx",
        "app/café/page.tsx",
    ])?;

    let (code, stdout, _) = run(test.command())?;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        [
            "/café\t[app]\tapp/café/page.tsx",
            "/école\t[pages]\tpages/école.tsx",
            "/fruit\t[pages]\tpages/fruit.tsx",
            "/zoo\t[pages]\tpages/zoo.tsx",
            "",
        ]
        .join("\n")
    );

    Ok(())
}
