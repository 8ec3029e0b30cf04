//! Turn command-line component and stack arguments into
//! [`ConfigAndStacksInfo`].

use strata_core::domain::{DomainError, DomainValidator};
use strata_core::prelude::{ConfigAndStacksInfo, StrataResult};

const SEPARATORS: [char; 2] = ['/', '\\'];

/// Resolve `component` (optionally `folder/.../name`) in `stack`.
///
/// `base_component` overrides the directory the component lives in while
/// the artifact names keep using the component's own name.
pub fn resolve(
    component: &str,
    stack: &str,
    base_component: Option<&str>,
) -> StrataResult<ConfigAndStacksInfo> {
    let component = component.trim_matches(SEPARATORS);
    if component.is_empty() {
        return Err(DomainError::MissingRequiredField { field: "component" }.into());
    }
    let stack = stack.trim_matches(SEPARATORS);
    if stack.is_empty() {
        return Err(DomainError::MissingRequiredField { field: "stack" }.into());
    }

    let (folder_prefix, name) = match component.rfind(SEPARATORS) {
        Some(idx) => (&component[..idx], &component[idx + 1..]),
        None => ("", component),
    };

    let info = ConfigAndStacksInfo {
        component_folder_prefix: folder_prefix.to_string(),
        component_folder_prefix_replaced: folder_prefix.replace(SEPARATORS, "-"),
        final_component: base_component
            .map(|base| base.trim_matches(SEPARATORS))
            .filter(|base| !base.is_empty())
            .unwrap_or(name)
            .to_string(),
        component: name.to_string(),
        context_prefix: stack.replace(SEPARATORS, "-"),
        stack: stack.to_string(),
    };

    DomainValidator::validate_stack_info(&info)?;
    tracing::debug!(?info, "Resolved stack info");
    Ok(info)
}
