mod http_identity_provider;
mod static_identity_provider;

pub use http_identity_provider::HttpIdentityProvider;
pub use static_identity_provider::StaticIdentityProvider;
