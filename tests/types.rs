// ABOUTME: Integration tests for the validated domain types.
// ABOUTME: Tests state parsing, repository slugs, and typed identifiers.

use proptest::prelude::*;
use shipstat::types::*;

mod deployment_state_tests {
    use super::*;

    #[test]
    fn all_seven_states_parse_to_their_wire_name() {
        for state in DeploymentState::ALL {
            assert_eq!(DeploymentState::parse(state.as_str()).unwrap(), state);
        }
    }

    #[test]
    fn default_is_success() {
        assert_eq!(DeploymentState::default(), DeploymentState::Success);
    }

    #[test]
    fn validate_defaults_absent_input_to_success() {
        assert_eq!(DeploymentState::validate(None).unwrap(), DeploymentState::Success);
        assert_eq!(DeploymentState::validate(Some("")).unwrap(), DeploymentState::Success);
        assert_eq!(
            DeploymentState::validate(Some("queued")).unwrap(),
            DeploymentState::Queued
        );
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!(DeploymentState::parse("Success").is_err());
        assert!(DeploymentState::parse("SUCCESS").is_err());
    }

    #[test]
    fn error_lists_every_legal_value() {
        let err = DeploymentState::parse("bogus").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Invalid status \"bogus\". Must be one of: "));
        for state in DeploymentState::ALL {
            assert!(message.contains(state.as_str()), "missing {state}");
        }
        assert_eq!(err.legal().len(), 7);
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&DeploymentState::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    proptest! {
        #[test]
        fn parse_accepts_exactly_the_legal_values(value in "[a-z_]{0,12}") {
            let legal = DeploymentState::ALL.iter().any(|s| s.as_str() == value);
            prop_assert_eq!(DeploymentState::parse(&value).is_ok(), legal);
        }

        #[test]
        fn display_round_trips(index in 0usize..7) {
            let state = DeploymentState::ALL[index];
            prop_assert_eq!(state.to_string().parse::<DeploymentState>().unwrap(), state);
        }
    }
}

mod repo_slug_tests {
    use super::*;

    #[test]
    fn parse_owner_and_name() {
        let slug = RepoSlug::parse("acme/web-app.v2").unwrap();
        assert_eq!(slug.owner(), "acme");
        assert_eq!(slug.name(), "web-app.v2");
        assert_eq!(slug.to_string(), "acme/web-app.v2");
    }

    #[test]
    fn rejects_malformed_slugs() {
        assert_eq!(RepoSlug::parse(""), Err(RepoSlugError::Empty));
        assert!(matches!(
            RepoSlug::parse("acme"),
            Err(RepoSlugError::MissingSeparator(_))
        ));
        assert!(matches!(
            RepoSlug::parse("/web"),
            Err(RepoSlugError::EmptyOwner(_))
        ));
        assert!(matches!(
            RepoSlug::parse("acme/"),
            Err(RepoSlugError::EmptyName(_))
        ));
        assert!(matches!(
            RepoSlug::parse("acme/web/extra"),
            Err(RepoSlugError::InvalidChar { ch: '/', .. })
        ));
    }
}

mod id_tests {
    use super::*;

    #[test]
    fn deployment_id_is_the_platform_number() {
        let id = DeploymentId::new(1234567);
        assert_eq!(id.get(), 1234567);
        assert_eq!(id.to_string(), "1234567");
    }

    #[test]
    fn blob_sha_displays_verbatim() {
        let sha = BlobSha::new("3d21ec53a331a6f037a91c368710b99387d012c1");
        assert_eq!(sha.as_str(), "3d21ec53a331a6f037a91c368710b99387d012c1");
        assert_eq!(sha.to_string(), sha.as_str());
        assert_ne!(sha, BlobSha::new("95b966ae"));
    }
}
