// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

use anyhow::{Result, anyhow};
use std::path::PathBuf;

#[derive(Debug, Default, PartialEq)]
pub struct GlobalArgs {
    pub root: Option<PathBuf>,
    pub verbose: bool,
    pub help: bool,
    /// The command and everything after it, untouched.
    pub rest: Vec<String>,
}

/// Read the global options that precede the command.
///
/// Parsing stops at the first argument that is not a global option, so a
/// category such as `help` or `-v` after the command reaches the command.
pub fn parse_global_args(args: &[String]) -> Result<GlobalArgs> {
    let mut parsed = GlobalArgs::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--root" | "-r" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow!("--root requires a path"))?;
                parsed.root = Some(PathBuf::from(path));
            }
            "--verbose" | "-v" => parsed.verbose = true,
            "--help" | "-h" | "help" => parsed.help = true,
            _ => {
                parsed.rest.push(arg.clone());
                parsed.rest.extend(iter.cloned());
                break;
            }
        }
    }
    Ok(parsed)
}

/// `<command> --help` asks for help instead of running the command.
pub fn wants_command_help(command_args: &[String]) -> bool {
    command_args.iter().any(|a| a == "--help" || a == "-h")
}

pub fn print_help(binary_name: &str) {
    println!(
        "Huesmith v{} - Deterministic landing-page palettes and font pairings",
        env!("CARGO_PKG_VERSION"),
    );
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS] palette <category> [PALETTE OPTIONS]", binary_name);
    println!("    {} [OPTIONS] analyze <primary> [<secondary>] <accent>", binary_name);
    println!("    {} [OPTIONS] contrast <color> [--background <hex>]", binary_name);
    println!("    {} [OPTIONS] fonts <category> [--all | --random]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -v, --verbose         Log synthesis details to stderr.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("PALETTE OPTIONS:");
    println!("    --style <s>           vibrant | pastel | dark");
    println!("    --scheme <s>          complementary | triadic | analogous | monochromatic");
    println!("                          (split-complementary is accepted but unlisted)");
    println!("    --size <2|3>          Number of colors (2 drops the secondary)");
    println!("    --hue <deg>           Base hue; defaults to one derived from the category");
    println!("    --lightness <pct>     Override the primary's lightness");
    println!("    --saturation <pct>    Override the primary's saturation");
    println!("    --raw                 Skip the WCAG AA correction");
    println!("    --save                Write the JSON export to the export directory");
    println!();
    println!("EXAMPLES:");
    println!("    {} palette \"artisan bakery\" --style pastel", binary_name);
    println!(
        "    {} palette saas --hue 220 --scheme triadic --save",
        binary_name
    );
    println!("    {} analyze '#1e40af' '#166534' '#991b1b'", binary_name);
    println!("    {} contrast '#ffff00'", binary_name);
    println!("    {} fonts fitness --all", binary_name);
    println!();
    println!("CONFIG:");
    println!("    <config_dir>/config.toml accepts default_style, default_scheme,");
    println!("    palette_size, apply_wcag, log_level and export_dir.");
    println!();
    println!("MORE INFO:");
    println!("    License:    GPL-3.0");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_global_flags_before_command() {
        let parsed = parse_global_args(&args(&["-r", "/tmp/x", "-v", "fonts", "tech"])).unwrap();
        assert_eq!(parsed.root, Some(PathBuf::from("/tmp/x")));
        assert!(parsed.verbose);
        assert!(!parsed.help);
        assert_eq!(parsed.rest, args(&["fonts", "tech"]));
    }

    #[test]
    fn test_command_arguments_are_not_global_flags() {
        let parsed = parse_global_args(&args(&["fonts", "help"])).unwrap();
        assert!(!parsed.help);
        assert_eq!(parsed.rest, args(&["fonts", "help"]));

        let parsed = parse_global_args(&args(&["palette", "-v", "--root", "x"])).unwrap();
        assert!(!parsed.verbose);
        assert_eq!(parsed.root, None);
        assert_eq!(parsed.rest, args(&["palette", "-v", "--root", "x"]));
    }

    #[test]
    fn test_help_forms() {
        assert!(parse_global_args(&args(&["help"])).unwrap().help);
        assert!(parse_global_args(&args(&["-h"])).unwrap().help);
        assert!(wants_command_help(&args(&["tech", "--help"])));
        assert!(!wants_command_help(&args(&["help"])));
    }

    #[test]
    fn test_root_requires_a_path() {
        assert!(parse_global_args(&args(&["--root"])).is_err());
    }
}
