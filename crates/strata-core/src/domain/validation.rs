use crate::domain::{error::DomainError, model::ConfigAndStacksInfo};

/// Input checks for callers that build [`ConfigAndStacksInfo`].
///
/// The naming and layout rules accept anything; run these first if a
/// degenerate name like `-vpc.planfile` should be an error instead.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_stack_info(info: &ConfigAndStacksInfo) -> Result<(), DomainError> {
        if info.component.is_empty() {
            return Err(DomainError::MissingRequiredField { field: "component" });
        }
        if info.final_component.is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "final_component",
            });
        }
        if info.context_prefix.is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "context_prefix",
            });
        }
        if info
            .component_folder_prefix_replaced
            .contains(['/', '\\'])
        {
            return Err(DomainError::UnreplacedFolderPrefix {
                prefix: info.component_folder_prefix_replaced.clone(),
            });
        }
        Ok(())
    }
}
