use anyhow::Result;
use aws_config::{meta::region::RegionProviderChain, Region, SdkConfig};
use std::{env, sync::LazyLock};

pub static VERBOSE: LazyLock<bool> = LazyLock::new(|| {
    env::var("VERBOSE")
        .ok()
        .and_then(|val| val.parse::<bool>().ok())
        .unwrap_or(false)
});

pub fn get_verbose() -> bool {
    *VERBOSE
}

pub static MOVIE_AWARDS_TABLE_NAME: LazyLock<String> = LazyLock::new(|| {
    env::var("MOVIE_AWARDS_TABLE_NAME").unwrap_or_else(|_| "MovieAwards".to_string())
});

pub fn check_env_vars() -> Result<()> {
    let _ = *MOVIE_AWARDS_TABLE_NAME;
    let _ = *VERBOSE;
    Ok(())
}

pub async fn load_aws_config() -> SdkConfig {
    let region_provider = RegionProviderChain::first_try(env::var("REGION").ok().map(Region::new))
        .or_default_provider()
        .or_else(Region::new("us-east-1"));
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await
}
