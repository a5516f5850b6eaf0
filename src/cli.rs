//! Clap adapter for envfig.
//!
//! Compiled only with the `clap` Cargo feature (on by default). [`LoadArgs`] can
//! be flattened into any clap derive struct; [`LoadArgs::into_builder()`] is the
//! only bridge to the core, so everything downstream is framework-agnostic.

use std::path::PathBuf;

use clap::Args;

use crate::builder::{Envfig, EnvfigBuilder};
use crate::types::ExistenceCheck;

/// Clap-derived args selecting what to load and how to overlay it.
///
/// ```ignore
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     load: LoadArgs,
/// }
/// ```
#[derive(Debug, Args)]
pub struct LoadArgs {
    /// Config file or directory of config files (json, yml, yaml).
    pub path: PathBuf,

    /// Overlay `SECTION___KEY`-style environment variables onto existing keys.
    #[arg(short, long)]
    pub env: bool,

    /// Let env vars overwrite keys holding empty or falsy values (0, "", false, null).
    #[arg(long, requires = "env")]
    pub present_keys: bool,
}

impl LoadArgs {
    /// Convert clap-parsed args into a builder. The process environment is read
    /// at load time.
    pub fn into_builder(self) -> EnvfigBuilder {
        let check = if self.present_keys {
            ExistenceCheck::Present
        } else {
            ExistenceCheck::Truthy
        };
        Envfig::builder()
            .path(self.path)
            .env_overlay(self.env)
            .existence_check(check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::JSON_CONFIG;
    use clap::Parser;
    use tempfile::TempDir;

    /// Wrapper so we can use `try_parse_from` on the flattened args.
    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        load: LoadArgs,
    }

    fn parse(args: &[&str]) -> LoadArgs {
        TestCli::try_parse_from(args).unwrap().load
    }

    #[test]
    fn parse_path_only() {
        let args = parse(&["test", "configs"]);
        assert_eq!(args.path, PathBuf::from("configs"));
        assert!(!args.env);
        assert!(!args.present_keys);
    }

    #[test]
    fn parse_env_flags() {
        let args = parse(&["test", "configs", "--env", "--present-keys"]);
        assert!(args.env);
        assert!(args.present_keys);

        let args = parse(&["test", "-e", "configs"]);
        assert!(args.env);
    }

    #[test]
    fn present_keys_requires_env() {
        let result = TestCli::try_parse_from(["test", "configs", "--present-keys"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_path_errors() {
        assert!(TestCli::try_parse_from(["test"]).is_err());
    }

    #[test]
    fn into_builder_loads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, JSON_CONFIG).unwrap();

        let args = parse(&["test", path.to_str().unwrap(), "--env", "--present-keys"]);
        let loader = args.into_builder().build().unwrap();
        assert!(loader.is_file());
        assert!(loader.env_overlay());
        assert_eq!(loader.existence_check(), ExistenceCheck::Present);
    }
}
