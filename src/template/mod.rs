//! Template profile validation
//!
//! Cross-cutting checks over the full three-language snapshot, dispatched
//! by template id. Unrecognized ids fall back to the generic profile.

pub mod profiles;

use log::debug;

use crate::core::{Diagnostic, Snapshot};

/// Template id for the flexbox layout profile.
pub const LAYOUT_TEMPLATE: &str = "flexbox-layout";
/// Template id for the interactive form profile.
pub const FORM_TEMPLATE: &str = "interactive-form";
/// Template id for the blank starter profile.
pub const BLANK_TEMPLATE: &str = "blank";

/// Run the profile rule set selected by `template_id` over the snapshot.
pub fn validate_template(template_id: &str, snapshot: &Snapshot) -> Vec<Diagnostic> {
    let diagnostics = match template_id {
        LAYOUT_TEMPLATE => profiles::validate_layout(snapshot),
        FORM_TEMPLATE => profiles::validate_form(snapshot),
        BLANK_TEMPLATE => profiles::validate_blank(snapshot),
        _ => profiles::validate_generic(snapshot),
    };

    debug!(
        "template validation ({template_id}) produced {} diagnostics",
        diagnostics.len()
    );
    diagnostics
}
