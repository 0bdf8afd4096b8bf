use aws_config::{
    meta::region::RegionProviderChain,
    profile::{ProfileFileCredentialsProvider, ProfileFileRegionProvider},
};
use aws_types::{Credentials, SdkConfig};

/// Region used to reach the region catalog when none is configured locally.
pub const FALLBACK_REGION: &str = "us-east-1";

/// Where the AWS credentials for a run come from.
#[derive(Clone, Debug, PartialEq)]
pub enum CredentialSource {
    /// Static access key pair given on the command line.
    Static {
        /// AWS access key id
        access_key_id: String,
        /// AWS secret access key
        secret_access_key: String,
    },
    /// Named profile from the local AWS configuration files.
    Profile(String),
    /// Default provider chain (environment, profile, instance metadata).
    Default,
}

impl CredentialSource {
    /// Pick the credential source from the optional command line values.
    /// Static keys win over a profile when both are present.
    pub fn select(
        access_key_id: Option<String>,
        secret_access_key: Option<String>,
        profile: Option<String>,
    ) -> CredentialSource {
        match (access_key_id, secret_access_key, profile) {
            (Some(access_key_id), Some(secret_access_key), _) => CredentialSource::Static {
                access_key_id,
                secret_access_key,
            },
            (_, _, Some(profile)) => CredentialSource::Profile(profile),
            _ => CredentialSource::Default,
        }
    }

    /// Profile the home region is read from, when one was named.
    pub fn region_profile(&self) -> Option<&str> {
        match self {
            CredentialSource::Profile(name) => Some(name),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            CredentialSource::Static { .. } => "static",
            CredentialSource::Profile(_) => "profile",
            CredentialSource::Default => "default",
        }
    }
}

/// Load the shared SDK configuration every regional client is derived from.
///
/// The secret access key never reaches the service logs, only the kind of source does.
#[tracing::instrument(skip(source), fields(source = source.kind()))]
pub async fn load_config(source: &CredentialSource) -> SdkConfig {
    tracing::info!("loading aws configuration");

    let region = match source.region_profile() {
        Some(name) => RegionProviderChain::first_try(
            ProfileFileRegionProvider::builder()
                .profile_name(name)
                .build(),
        )
        .or_default_provider(),
        None => RegionProviderChain::default_provider(),
    }
    .or_else(FALLBACK_REGION);
    let loader = aws_config::from_env().region(region);

    let loader = match source {
        CredentialSource::Static {
            access_key_id,
            secret_access_key,
        } => loader.credentials_provider(Credentials::from_keys(
            access_key_id,
            secret_access_key,
            None,
        )),
        CredentialSource::Profile(name) => loader.credentials_provider(
            ProfileFileCredentialsProvider::builder()
                .profile_name(name)
                .build(),
        ),
        CredentialSource::Default => loader,
    };

    loader.load().await
}
