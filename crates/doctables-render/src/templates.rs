//! Framework-supplied activation-script template.
//!
//! The template carries the fixed frame of every generated script: the
//! optional inline `<script>` wrapper, the static copyright header, and the
//! document-ready guard. The activation calls themselves are prepared by the
//! compiler and joined with one blank line between calls.

/// MiniJinja template for the activation script.
///
/// Context: `script_tag: bool`, `calls: [String]`.
pub(crate) const ACTIVATE_TEMPLATE: &str = r#"{% if script_tag -%}
<script type="text/javascript">
{% endif -%}
// Copyright (c) doctables contributors
//
// SPDX-License-Identifier: MIT

$(document).ready( function () {
{{ calls | join("\n\n") }}
} );
{%- if script_tag %}
</script>
{%- endif %}"#;
