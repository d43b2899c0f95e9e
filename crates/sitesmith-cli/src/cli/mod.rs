//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use sitesmith_core::domain::{Marketplace, Provider, TargetKind};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sitesmith",
    bin_name = "sitesmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Describe a website, ship a website",
    long_about = "Sitesmith turns a plain-language description into a \
                  generated site model, emits platform-specific code, and \
                  deploys or publishes the result.",
    after_help = "EXAMPLES:\n\
        \x20 sitesmith classify \"an online store for handmade jewelry\"\n\
        \x20 sitesmith generate \"a portfolio for a photographer\" --out model.json\n\
        \x20 sitesmith emit web --model model.json --out-dir dist\n\
        \x20 sitesmith deploy netlify --model model.json --project my-shop\n\
        \x20 sitesmith publish play-store --model model.json --app-name \"My Shop\"",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify a description without generating anything.
    #[command(
        visible_alias = "c",
        about = "Classify a website description",
        after_help = "EXAMPLES:\n\
            \x20 sitesmith classify \"a neighborhood restaurant with a seasonal menu\"\n\
            \x20 sitesmith classify \"my art portfolio\" --output-format json"
    )]
    Classify(ClassifyArgs),

    /// Generate a full site model from a description.
    #[command(
        visible_alias = "g",
        about = "Generate a site model",
        after_help = "EXAMPLES:\n\
            \x20 sitesmith generate \"an online store for plants\"\n\
            \x20 sitesmith generate \"a law firm website\" --out firm.json"
    )]
    Generate(GenerateArgs),

    /// Emit platform-specific code for a site model.
    #[command(
        about = "Emit code for a target platform",
        after_help = "EXAMPLES:\n\
            \x20 sitesmith emit web --model model.json --out-dir dist\n\
            \x20 sitesmith emit react-native --model model.json\n\
            \x20 sitesmith emit pwa --model model.json --list"
    )]
    Emit(EmitArgs),

    /// Deploy an emitted artifact to a hosting provider.
    #[command(
        about = "Deploy to a hosting provider",
        after_help = "EXAMPLES:\n\
            \x20 sitesmith deploy netlify --model model.json --project my-shop\n\
            \x20 sitesmith deploy github  --model model.json --project my-shop --dry-run"
    )]
    Deploy(DeployArgs),

    /// Submit a mobile artifact to a marketplace.
    #[command(
        about = "Publish to an app marketplace",
        after_help = "EXAMPLES:\n\
            \x20 sitesmith publish play-store --model model.json --app-name \"My Shop\"\n\
            \x20 sitesmith publish app-store  --model model.json --app-name \"My Shop\" \\\n\
            \x20     --target flutter --dry-run"
    )]
    Publish(PublishArgs),
}

// ── classify ──────────────────────────────────────────────────────────────────

/// Arguments for `sitesmith classify`.
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Plain-language description of the website.
    #[arg(value_name = "DESCRIPTION", help = "Website description")]
    pub description: String,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `sitesmith generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Plain-language description of the website.
    #[arg(value_name = "DESCRIPTION", help = "Website description")]
    pub description: String,

    /// Where to write the generated model (JSON).
    #[arg(
        short = 'o',
        long = "out",
        value_name = "FILE",
        default_value = "site-model.json",
        help = "Output file for the site model"
    )]
    pub out: PathBuf,
}

// ── emit ──────────────────────────────────────────────────────────────────────

/// Arguments for `sitesmith emit`.
#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Target platform.
    #[arg(value_enum, value_name = "TARGET", help = "Target platform")]
    pub target: TargetArg,

    /// Site model file produced by `generate`.
    #[arg(
        short = 'm',
        long = "model",
        value_name = "FILE",
        default_value = "site-model.json",
        help = "Site model file"
    )]
    pub model: PathBuf,

    /// Directory to write the emitted files into.
    #[arg(
        short = 'd',
        long = "out-dir",
        value_name = "DIR",
        default_value = "dist",
        help = "Output directory"
    )]
    pub out_dir: PathBuf,

    /// List the files that would be written without writing them.
    #[arg(long = "list", help = "List files without writing them")]
    pub list: bool,
}

// ── deploy ────────────────────────────────────────────────────────────────────

/// Arguments for `sitesmith deploy`.
#[derive(Debug, Args)]
pub struct DeployArgs {
    /// Hosting provider.
    #[arg(value_enum, value_name = "PROVIDER", help = "Hosting provider")]
    pub provider: ProviderArg,

    /// Site model file produced by `generate`.
    #[arg(
        short = 'm',
        long = "model",
        value_name = "FILE",
        default_value = "site-model.json",
        help = "Site model file"
    )]
    pub model: PathBuf,

    /// Target platform to emit before deploying.
    #[arg(
        short = 't',
        long = "target",
        value_enum,
        default_value = "web",
        help = "Target platform"
    )]
    pub target: TargetArg,

    /// Remote project name.
    #[arg(
        short = 'p',
        long = "project",
        value_name = "NAME",
        help = "Project name on the provider"
    )]
    pub project: String,

    /// Custom domain to associate with the deployment.
    #[arg(long = "domain", value_name = "DOMAIN", help = "Custom domain")]
    pub domain: Option<String>,

    /// Run the full pipeline against a local stand-in provider.
    #[arg(long = "dry-run", help = "Deploy to a local stand-in, no network")]
    pub dry_run: bool,
}

// ── publish ───────────────────────────────────────────────────────────────────

/// Arguments for `sitesmith publish`.
#[derive(Debug, Args)]
pub struct PublishArgs {
    /// Distribution marketplace.
    #[arg(value_enum, value_name = "STORE", help = "Marketplace")]
    pub store: StoreArg,

    /// Site model file produced by `generate`.
    #[arg(
        short = 'm',
        long = "model",
        value_name = "FILE",
        default_value = "site-model.json",
        help = "Site model file"
    )]
    pub model: PathBuf,

    /// Mobile target platform to emit before publishing.
    #[arg(
        short = 't',
        long = "target",
        value_enum,
        default_value = "react-native",
        help = "Mobile target platform"
    )]
    pub target: TargetArg,

    /// Listing name in the marketplace.
    #[arg(
        short = 'a',
        long = "app-name",
        value_name = "NAME",
        help = "App name for the listing"
    )]
    pub app_name: String,

    /// Listing category.
    #[arg(long = "category", value_name = "CATEGORY", help = "Listing category")]
    pub category: Option<String>,

    /// Run the full pipeline against a local stand-in marketplace.
    #[arg(long = "dry-run", help = "Submit to a local stand-in, no network")]
    pub dry_run: bool,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Emit targets as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum TargetArg {
    Web,
    /// Also accepted as `rn`.
    #[value(alias = "rn")]
    ReactNative,
    Flutter,
    Pwa,
}

impl From<TargetArg> for TargetKind {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Web => Self::Web,
            TargetArg::ReactNative => Self::ReactNative,
            TargetArg::Flutter => Self::Flutter,
            TargetArg::Pwa => Self::Pwa,
        }
    }
}

/// Hosting providers as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ProviderArg {
    Github,
    Netlify,
    Vercel,
}

impl From<ProviderArg> for Provider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Github => Self::Github,
            ProviderArg::Netlify => Self::Netlify,
            ProviderArg::Vercel => Self::Vercel,
        }
    }
}

/// Marketplaces as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum StoreArg {
    AppStore,
    PlayStore,
}

impl From<StoreArg> for Marketplace {
    fn from(arg: StoreArg) -> Self {
        match arg {
            StoreArg::AppStore => Self::AppStore,
            StoreArg::PlayStore => Self::PlayStore,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_classify_command() {
        let cli = Cli::parse_from(["sitesmith", "classify", "a coffee shop"]);
        assert!(matches!(cli.command, Commands::Classify(_)));
    }

    #[test]
    fn parse_deploy_command() {
        let cli = Cli::parse_from([
            "sitesmith", "deploy", "netlify", "--model", "m.json", "--project", "shop",
        ]);
        if let Commands::Deploy(args) = cli.command {
            assert_eq!(args.provider, ProviderArg::Netlify);
            assert_eq!(args.target, TargetArg::Web);
        } else {
            panic!("expected Deploy command");
        }
    }

    #[test]
    fn react_native_alias() {
        let cli = Cli::parse_from([
            "sitesmith", "publish", "play-store", "--app-name", "x", "-t", "rn",
        ]);
        if let Commands::Publish(args) = cli.command {
            assert_eq!(args.target, TargetArg::ReactNative);
        } else {
            panic!("expected Publish command");
        }
    }

    #[test]
    fn target_conversions_round_trip() {
        assert_eq!(TargetKind::from(TargetArg::Pwa), TargetKind::Pwa);
        assert_eq!(Provider::from(ProviderArg::Github), Provider::Github);
        assert_eq!(Marketplace::from(StoreArg::AppStore), Marketplace::AppStore);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["sitesmith", "--quiet", "--verbose", "classify", "x"]);
        assert!(result.is_err());
    }
}
