//! Artifact file names.
//!
//! Every name is `{ContextPrefix}-[{ComponentFolderPrefixReplaced}-]{Component}{suffix}`.
//! The context prefix leads so a directory listing groups artifacts by stack.
//! These functions never fail and never validate their input: an empty
//! context prefix simply yields `-vpc.planfile`.

use crate::domain::model::ConfigAndStacksInfo;

pub const TERRAFORM_VARFILE_SUFFIX: &str = ".terraform.tfvars.json";
pub const TERRAFORM_PLANFILE_SUFFIX: &str = ".planfile";
pub const HELMFILE_VARFILE_SUFFIX: &str = ".helmfile.vars.yaml";

/// Varfile name for a terraform component in a stack.
pub fn terraform_varfile_name(info: &ConfigAndStacksInfo) -> String {
    artifact_name(info, TERRAFORM_VARFILE_SUFFIX)
}

/// Planfile name for a terraform component in a stack.
pub fn terraform_planfile_name(info: &ConfigAndStacksInfo) -> String {
    artifact_name(info, TERRAFORM_PLANFILE_SUFFIX)
}

/// Varfile name for a helmfile component in a stack.
pub fn helmfile_varfile_name(info: &ConfigAndStacksInfo) -> String {
    artifact_name(info, HELMFILE_VARFILE_SUFFIX)
}

fn artifact_name(info: &ConfigAndStacksInfo, suffix: &str) -> String {
    if info.component_folder_prefix_replaced.is_empty() {
        format!("{}-{}{}", info.context_prefix, info.component, suffix)
    } else {
        format!(
            "{}-{}-{}{}",
            info.context_prefix, info.component_folder_prefix_replaced, info.component, suffix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(prefix_replaced: &str) -> ConfigAndStacksInfo {
        ConfigAndStacksInfo {
            component_folder_prefix: prefix_replaced.replace('-', "/"),
            component_folder_prefix_replaced: prefix_replaced.into(),
            final_component: "vpc".into(),
            component: "vpc".into(),
            context_prefix: "tenant1-ue1-prod".into(),
            stack: "tenant1-ue1-prod".into(),
        }
    }

    #[test]
    fn terraform_varfile_without_prefix() {
        assert_eq!(
            terraform_varfile_name(&info("")),
            "tenant1-ue1-prod-vpc.terraform.tfvars.json"
        );
    }

    #[test]
    fn terraform_varfile_with_prefix() {
        assert_eq!(
            terraform_varfile_name(&info("networking-aws")),
            "tenant1-ue1-prod-networking-aws-vpc.terraform.tfvars.json"
        );
    }

    #[test]
    fn terraform_planfile_both_branches() {
        assert_eq!(
            terraform_planfile_name(&info("")),
            "tenant1-ue1-prod-vpc.planfile"
        );
        assert_eq!(
            terraform_planfile_name(&info("networking-aws")),
            "tenant1-ue1-prod-networking-aws-vpc.planfile"
        );
    }

    #[test]
    fn helmfile_varfile_both_branches() {
        let mut nginx = info("");
        nginx.component = "nginx".into();
        assert_eq!(
            helmfile_varfile_name(&nginx),
            "tenant1-ue1-prod-nginx.helmfile.vars.yaml"
        );

        nginx.component_folder_prefix_replaced = "ingress".into();
        assert_eq!(
            helmfile_varfile_name(&nginx),
            "tenant1-ue1-prod-ingress-nginx.helmfile.vars.yaml"
        );
    }

    #[test]
    fn degenerate_inputs_still_produce_a_name() {
        let empty = ConfigAndStacksInfo {
            component: "foo".into(),
            ..Default::default()
        };
        assert_eq!(terraform_planfile_name(&empty), "-foo.planfile");
    }

    // Names use `component`, not `final_component`.
    #[test]
    fn names_ignore_final_component() {
        let mut aliased = info("");
        aliased.component = "vpc-blue".into();
        aliased.final_component = "vpc".into();
        assert_eq!(
            terraform_planfile_name(&aliased),
            "tenant1-ue1-prod-vpc-blue.planfile"
        );
    }

    #[test]
    fn prefix_appears_only_when_non_empty() {
        let namers: [fn(&ConfigAndStacksInfo) -> String; 3] = [
            terraform_varfile_name,
            terraform_planfile_name,
            helmfile_varfile_name,
        ];
        for name in namers {
            assert!(name(&info("grp")).contains("-grp-"));
            assert!(!name(&info("")).contains("--"));
            assert_eq!(name(&info("grp")), name(&info("grp")));
        }
    }

    #[test]
    fn names_are_single_segments() {
        let info = info("networking-aws");
        for name in [
            terraform_varfile_name(&info),
            terraform_planfile_name(&info),
            helmfile_varfile_name(&info),
        ] {
            assert!(!name.contains(std::path::MAIN_SEPARATOR));
            assert!(!name.contains('/'));
        }
    }
}
