//! End-to-end flow: configuration file -> page assets -> generated asset,
//! plus the interplay between the site-wide asset and per-page snippets.

use doctables::{
    compile, page_assets, write_activation_script, ActivationConfig, DatatablesConfig,
    DirectiveFormat, SelectorOptions, SiteBuild, TableDirective, TableOptions, JQUERY,
};
use serde_json::json;

fn structured(pairs: &[(&str, serde_json::Value)]) -> TableOptions {
    let mut map = serde_json::Map::new();
    for (key, value) in pairs {
        map.insert(key.to_string(), value.clone());
    }
    TableOptions::Structured(map)
}

#[test]
fn test_build_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("doctables.json");
    std::fs::write(
        &config_path,
        r#"{"version": "2.3.5", "options": {"paging": true, "searching": false}}"#,
    )
    .unwrap();

    let config = DatatablesConfig::load(&config_path).unwrap();
    let site = SiteBuild::new(dir.path().join("build")).with_extension(JQUERY);

    let assets = page_assets(&config, &site).unwrap();
    assert_eq!(assets.scripts.last().unwrap(), "activate_datatables.js");

    let written = write_activation_script(&config, &site.outdir).unwrap();
    let script = std::fs::read_to_string(written).unwrap();
    let expected = "\
// Copyright (c) doctables contributors
//
// SPDX-License-Identifier: MIT

$(document).ready( function () {
    $('table.sphinx-datatable').DataTable(
        {
            \"paging\": true,
            \"searching\": false
        },
    );
} );
";
    assert_eq!(script, expected);
}

#[test]
fn test_global_asset_ignores_selector_overrides() {
    // Selector overrides are page-local; the shared asset must stay a pure
    // function of the global configuration so parallel writers agree.
    let config = DatatablesConfig {
        options: structured(&[("paging", json!(true))]),
        ..DatatablesConfig::default()
    };
    let script = doctables::activation_script(&config).unwrap();
    assert!(!script.contains(":not(.dataTable)"));
    assert!(!script.contains("$.extend"));
}

#[test]
fn test_defaults_and_overrides_compose() {
    let mut selector_options = SelectorOptions::new();
    selector_options.insert(
        r#".custom-selector[data-attr="value"]"#,
        TableOptions::Raw("{searching: false},".to_string()),
    );
    selector_options.insert(".another-custom-selector", structured(&[("searching", json!(true))]));

    let activation = ActivationConfig {
        version: "2.3.5".to_string(),
        table_class: "sphinx-datatable".to_string(),
        options: structured(&[(
            "language",
            json!({"url": "https://cdn.datatables.net/plug-ins/${datatables_version}/i18n/fr-FR.json"}),
        )]),
        selector_options,
        ..ActivationConfig::default()
    };

    let script = compile(&activation).unwrap();
    let expected = "\
// Copyright (c) doctables contributors
//
// SPDX-License-Identifier: MIT

$(document).ready( function () {
    $.extend( $.fn.dataTable.defaults,
        {
            \"language\": {
                \"url\": \"https://cdn.datatables.net/plug-ins/2.3.5/i18n/fr-FR.json\"
            }
        },
    );

    $(`table.sphinx-datatable`).DataTable();

    $(`.custom-selector[data-attr=\"value\"]:not(.dataTable)`).DataTable(
        {searching: false},
    );

    $(`.another-custom-selector:not(.dataTable)`).DataTable(
        {
            \"searching\": true
        },
    );
} );
";
    assert_eq!(script, expected);
}

#[test]
fn test_snippet_never_duplicates_site_defaults() {
    let config = DatatablesConfig {
        options: structured(&[("paging", json!(true))]),
        ..DatatablesConfig::default()
    };

    let directive = TableDirective::new(
        DirectiveFormat::Json,
        ".api-table",
        r#"{"searching": false}"#,
    );
    let snippet = directive.render(&config).unwrap();

    // only the directive's own selector is activated
    assert!(snippet.contains("$(`.api-table:not(.dataTable)`).DataTable("));
    assert!(!snippet.contains("sphinx-datatable"));
    assert!(!snippet.contains("$.extend"));
    assert!(!snippet.contains("\"paging\""));
}
