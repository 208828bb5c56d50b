// File: ./src/bin/huesmith.rs
use anyhow::{Context, Result, anyhow, bail};
use huesmith::cli::{parse_global_args, print_help, wants_command_help};
use huesmith::color_utils::{HexColor, contrast_ratio, hex_to_hsl, hue_name, is_light_color};
use huesmith::config::Config;
use huesmith::context::{AppContext, StandardContext};
use huesmith::contrast::{
    AA_LARGE_TEXT, AA_NORMAL_TEXT, WHITE, accessible_text_color, apply_aa_policy,
    ensure_aa_detailed, wcag_level,
};
use huesmith::export::ExportBundle;
use huesmith::fonts::{
    FontPair, detect_category, font_pairs_for_category, random_font_pair, select_font_pair,
};
use huesmith::harmony::{analyze_harmony, score_palette, suggestion_for_category};
use huesmith::model::{HarmonyScheme, Palette, PaletteSize, VisualStyle};
use huesmith::synth::{resolve_roles, synthesize};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::str::FromStr;

// Installed before anything else runs so config warnings are not lost.
// The level is lowered through `log::set_max_level` once the config is read.
fn init_logging() {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .build();
    // A logger may already be installed when embedded; keep going without ours.
    let _ = TermLogger::init(
        LevelFilter::Trace,
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let binary_name = args
        .first()
        .and_then(|a| std::path::Path::new(a).file_name())
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "huesmith".to_string());

    let global = parse_global_args(args.get(1..).unwrap_or_default())?;
    if global.help || global.rest.is_empty() {
        print_help(&binary_name);
        return Ok(());
    }

    init_logging();
    log::set_max_level(if global.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    let ctx = StandardContext::new(global.root);
    let config = Config::load_or_default(&ctx)?;
    if !global.verbose {
        log::set_max_level(config.log_level_filter());
    }

    let (command, rest) = global
        .rest
        .split_first()
        .ok_or_else(|| anyhow!("Missing command"))?;
    if wants_command_help(rest) {
        print_help(&binary_name);
        return Ok(());
    }
    match command.as_str() {
        "palette" => run_palette(&ctx, &config, rest),
        "analyze" => run_analyze(rest),
        "contrast" => run_contrast(rest),
        "fonts" => run_fonts(rest),
        other => bail!("Unknown command '{}'. See '{} --help'.", other, binary_name),
    }
}

fn next_value<'a>(iter: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<&'a str> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} requires a value", flag))
}

fn parse_number(value: &str, flag: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .with_context(|| format!("Invalid number for {}: '{}'", flag, value))
}

fn run_palette(ctx: &dyn AppContext, config: &Config, args: &[String]) -> Result<()> {
    let mut category: Option<&str> = None;
    let mut raw = false;
    let mut save = false;
    let mut style = config.default_style;
    let mut scheme = config.default_scheme;
    let mut size = config.palette_size;
    let mut hue = None;
    let mut lightness = None;
    let mut saturation = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--style" => {
                let v = next_value(&mut iter, "--style")?;
                style = VisualStyle::from_str(v)
                    .with_context(|| format!("Unknown style '{}'", v))?;
            }
            "--scheme" => {
                let v = next_value(&mut iter, "--scheme")?;
                scheme = HarmonyScheme::from_str(v)
                    .with_context(|| format!("Unknown scheme '{}'", v))?;
            }
            "--size" => {
                let v = next_value(&mut iter, "--size")?;
                let n: u8 = v
                    .parse()
                    .with_context(|| format!("Invalid number for --size: '{}'", v))?;
                size = PaletteSize::try_from(n)?;
            }
            "--hue" => hue = Some(parse_number(next_value(&mut iter, "--hue")?, "--hue")?),
            "--lightness" => {
                lightness = Some(parse_number(
                    next_value(&mut iter, "--lightness")?,
                    "--lightness",
                )?)
            }
            "--saturation" => {
                saturation = Some(parse_number(
                    next_value(&mut iter, "--saturation")?,
                    "--saturation",
                )?)
            }
            "--raw" => raw = true,
            "--save" => save = true,
            flag if flag.starts_with("--") => bail!("Unknown option '{}'", flag),
            value if category.is_none() => category = Some(value),
            value => bail!("Unexpected argument '{}'", value),
        }
    }

    let category = category.ok_or_else(|| anyhow!("palette requires a <category>"))?;
    let mut request = config
        .request(category)
        .with_style(style)
        .with_scheme(scheme)
        .with_size(size);
    request.base_hue = hue;
    request.override_lightness = lightness;
    request.override_saturation = saturation;

    if !scheme.is_user_selectable() {
        log::info!("Scheme '{}' is not offered in the default flow", scheme);
    }
    log::debug!("Resolved roles: {:?}", resolve_roles(&request));

    let synthesized = synthesize(&request);
    let palette = if raw || !config.apply_wcag {
        synthesized
    } else {
        // Adjustments are logged by the policy; stdout starts with the JSON.
        apply_aa_policy(&synthesized).palette
    };

    let fonts = select_font_pair(&request.category);
    let bundle = ExportBundle::from_request(&request, palette, &fonts);
    println!("{}", bundle.to_json_pretty()?);
    println!();
    print_reports(&bundle.palette);
    println!("Suggestion: {}", suggestion_for_category(category));

    if save {
        let path = bundle.save_to(&config.export_dir(ctx)?)?;
        println!("Saved to {}", path.display());
    }
    Ok(())
}

fn print_reports(palette: &Palette) {
    let harmony = analyze_harmony(
        palette.primary.as_str(),
        palette.secondary.as_ref().map(HexColor::as_str),
        palette.accent.as_str(),
    );
    println!(
        "Harmony: {} ({}) - {}",
        harmony.harmony_type, harmony.quality, harmony.description
    );

    let quality = score_palette(palette);
    println!("Quality score: {}/100", quality.score);
    for (issue, recommendation) in quality.issues.iter().zip(&quality.recommendations) {
        println!("  - {}", issue);
        println!("    {}", recommendation);
    }
}

fn run_analyze(args: &[String]) -> Result<()> {
    let palette = match args {
        [primary, accent] => Palette::parse(primary, None, accent),
        [primary, secondary, accent] => {
            Palette::parse(primary, Some(secondary.as_str()), accent)
        }
        _ => bail!("analyze expects <primary> [<secondary>] <accent>"),
    }
    .ok_or_else(|| anyhow!("Colors must be 6-digit hex values, e.g. #1e40af"))?;

    for color in [Some(&palette.primary), palette.secondary.as_ref(), Some(&palette.accent)]
        .into_iter()
        .flatten()
    {
        let hsl = hex_to_hsl(color.as_str());
        println!(
            "{}  hsl({:.0}, {:.0}%, {:.0}%)  {}",
            color,
            hsl.h,
            hsl.s,
            hsl.l,
            hue_name(hsl.h)
        );
    }
    println!();
    print_reports(&palette);
    Ok(())
}

fn run_contrast(args: &[String]) -> Result<()> {
    let mut color: Option<&str> = None;
    let mut background = WHITE.to_string();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--background" | "--bg" => {
                let v = next_value(&mut iter, "--background")?;
                background = HexColor::parse(v)
                    .ok_or_else(|| anyhow!("Invalid background color '{}'", v))?
                    .to_string();
            }
            flag if flag.starts_with("--") => bail!("Unknown option '{}'", flag),
            value if color.is_none() => color = Some(value),
            value => bail!("Unexpected argument '{}'", value),
        }
    }
    let raw = color.ok_or_else(|| anyhow!("contrast requires a <color>"))?;
    let color = HexColor::parse(raw).ok_or_else(|| anyhow!("Invalid color '{}'", raw))?;

    let ratio = contrast_ratio(color.as_str(), &background);
    println!("{} on {}: {:.2}:1", color, background, ratio);
    println!("Level: {}", wcag_level(color.as_str(), &background));
    println!(
        "Normal text (>= {}): {}",
        AA_NORMAL_TEXT,
        if ratio >= AA_NORMAL_TEXT { "pass" } else { "fail" }
    );
    println!(
        "Large text (>= {}): {}",
        AA_LARGE_TEXT,
        if ratio >= AA_LARGE_TEXT { "pass" } else { "fail" }
    );

    let fixed = ensure_aa_detailed(color.as_str(), &background);
    println!("AA corrected: {} ({:?})", fixed.color, fixed.outcome);
    println!(
        "As a background ({}): use {} text",
        if is_light_color(color.as_str()) {
            "light"
        } else {
            "dark"
        },
        accessible_text_color(color.as_str())
    );
    Ok(())
}

fn print_font_pair(pair: &FontPair) {
    println!(
        "{} / {}  - {} ({})",
        pair.headline, pair.body, pair.description, pair.mood
    );
}

fn run_fonts(args: &[String]) -> Result<()> {
    let mut category: Option<&str> = None;
    let mut all = false;
    let mut random = false;
    for arg in args {
        match arg.as_str() {
            "--all" => all = true,
            "--random" => random = true,
            flag if flag.starts_with("--") => bail!("Unknown option '{}'", flag),
            value if category.is_none() => category = Some(value),
            value => bail!("Unexpected argument '{}'", value),
        }
    }
    let category = category.ok_or_else(|| anyhow!("fonts requires a <category>"))?;

    println!("Category: {}", detect_category(category));
    if all {
        for pair in font_pairs_for_category(category) {
            print_font_pair(pair);
        }
    } else if random {
        print_font_pair(&random_font_pair(category));
    } else {
        print_font_pair(&select_font_pair(category));
    }
    Ok(())
}
